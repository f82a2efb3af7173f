use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ProfileError;
use super::model::Profile;

/// Load the profile for startup, falling back to the built-in default.
pub(crate) fn load_initial_profile() -> Profile {
    let path = profile_path();
    match load_profile_from_path(&path) {
        Ok(profile) => profile,
        Err(err) => {
            log::warn!(
                "failed to load profile from {}: {err}",
                path.display()
            );
            Profile::default()
        },
    }
}

fn load_profile_from_path(path: &Path) -> Result<Profile, ProfileError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::info!(
                "no profile at {}, using built-in profile",
                path.display()
            );
            return Ok(Profile::default());
        },
        Err(err) => return Err(err.into()),
    };

    let profile = serde_json::from_str::<Profile>(&data)?;
    validate(&profile)?;
    log::info!("loaded profile from {}", path.display());

    Ok(profile)
}

fn validate(profile: &Profile) -> Result<(), ProfileError> {
    if profile.name.trim().is_empty() {
        return Err(ProfileError::Validation {
            message: String::from("name must not be empty"),
        });
    }

    if let Some(contact) =
        profile.contacts.iter().find(|c| c.href.trim().is_empty())
    {
        return Err(ProfileError::Validation {
            message: format!("contact {:?} has an empty href", contact.label),
        });
    }

    Ok(())
}

fn profile_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("folio")
            .join("profile.json");
    }

    std::env::temp_dir().join("folio").join("profile.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{Profile, ProfileError, load_profile_from_path};
    use crate::shared::ui::theme::ColorPalette;

    #[test]
    fn given_missing_file_when_loaded_then_default_profile_is_returned() {
        let root = test_temp_dir("missing");
        let path = root.join("profile.json");

        let profile = load_profile_from_path(&path)
            .expect("missing profile should not be an error");

        assert_eq!(profile, Profile::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_partial_json_when_loaded_then_missing_fields_use_defaults() {
        let root = test_temp_dir("partial");
        let path = root.join("profile.json");
        fs::write(
            &path,
            r#"{ "name": "Sam Lee", "panel_titles": { "about": "Hello" } }"#,
        )
        .expect("test payload should be written");

        let profile =
            load_profile_from_path(&path).expect("partial profile should load");
        let defaults = Profile::default();

        assert_eq!(profile.name, "Sam Lee");
        assert_eq!(profile.role, defaults.role);
        assert_eq!(profile.skills, defaults.skills);
        assert_eq!(
            profile.panel_titles.get("about").map(String::as_str),
            Some("Hello")
        );

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_palette_in_json_when_loaded_then_missing_entries_use_defaults() {
        let root = test_temp_dir("palette");
        let path = root.join("profile.json");
        fs::write(&path, r##"{ "palette": { "accent": "#FF8800" } }"##)
            .expect("test payload should be written");

        let profile =
            load_profile_from_path(&path).expect("palette profile should load");
        let palette = profile.palette.expect("palette should be present");

        assert_eq!(palette.accent, "#FF8800");
        assert_eq!(palette.background, ColorPalette::default().background);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_loaded_then_json_error_is_returned() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("profile.json");
        fs::write(&path, "{ not json").expect("test payload should be written");

        let result = load_profile_from_path(&path);

        assert!(matches!(result, Err(ProfileError::Json(_))));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_empty_name_when_loaded_then_validation_fails() {
        let root = test_temp_dir("empty_name");
        let path = root.join("profile.json");
        fs::write(&path, r#"{ "name": "  " }"#)
            .expect("test payload should be written");

        let result = load_profile_from_path(&path);

        assert!(matches!(result, Err(ProfileError::Validation { .. })));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_contact_without_href_when_loaded_then_validation_fails() {
        let root = test_temp_dir("empty_href");
        let path = root.join("profile.json");
        fs::write(
            &path,
            r#"{ "contacts": [
                { "icon": "mail", "label": "Mail", "href": "" }
            ] }"#,
        )
        .expect("test payload should be written");

        match load_profile_from_path(&path) {
            Err(ProfileError::Validation { message }) => {
                assert!(message.contains("Mail"));
            },
            other => panic!("expected validation error, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "folio-profile-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
