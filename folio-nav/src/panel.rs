use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::NavError;

/// Content panels in navigation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    About,
    Skills,
    Experience,
    Projects,
    Education,
}

impl PanelId {
    /// Every panel, in nav and landing-grid order.
    pub const ALL: [PanelId; 5] = [
        PanelId::About,
        PanelId::Skills,
        PanelId::Experience,
        PanelId::Projects,
        PanelId::Education,
    ];

    /// Panel selected when the desktop layout needs a default.
    pub const DEFAULT: PanelId = PanelId::About;

    /// Stable lowercase key used in config files and logs.
    pub fn key(self) -> &'static str {
        match self {
            PanelId::About => "about",
            PanelId::Skills => "skills",
            PanelId::Experience => "experience",
            PanelId::Projects => "projects",
            PanelId::Education => "education",
        }
    }

    fn default_title(self) -> &'static str {
        match self {
            PanelId::About => "About",
            PanelId::Skills => "Skills",
            PanelId::Experience => "Experience",
            PanelId::Projects => "Projects",
            PanelId::Education => "Education",
        }
    }

    fn default_icon(self) -> IconRef {
        match self {
            PanelId::About => IconRef::User,
            PanelId::Skills => IconRef::Code,
            PanelId::Experience => IconRef::Briefcase,
            PanelId::Projects => IconRef::Folder,
            PanelId::Education => IconRef::GraduationCap,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PanelId {
    type Err = NavError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        PanelId::ALL
            .into_iter()
            .find(|id| id.key() == key)
            .ok_or_else(|| NavError::UnknownPanel {
                key: key.to_string(),
            })
    }
}

/// Renderer-independent icon reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconRef {
    User,
    Code,
    Briefcase,
    Folder,
    GraduationCap,
    Mail,
    Phone,
    Linkedin,
    Github,
    Link,
}

/// Static description of one content panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub id: PanelId,
    pub icon: IconRef,
    pub title: String,
}

/// External contact shown beside the navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub icon: IconRef,
    pub label: String,
    pub href: String,
}

/// Ordered panel table keyed by [`PanelId`].
///
/// Always holds exactly one entry per panel, stored at the panel's
/// position in [`PanelId::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelCatalog {
    panels: Vec<Panel>,
}

impl PanelCatalog {
    /// Build a catalog, replacing default titles with the given overrides.
    pub fn with_titles<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (PanelId, &'a str)>,
    {
        let mut catalog = Self::default();
        for (id, title) in overrides {
            let title = title.trim();
            if title.is_empty() {
                log::warn!("ignoring empty title override for panel {id}");
                continue;
            }
            catalog.panels[id.index()].title = title.to_string();
        }
        catalog
    }

    /// Return the panel entry for `id`.
    pub fn get(&self, id: PanelId) -> &Panel {
        &self.panels[id.index()]
    }

    /// Iterate panels in navigation order.
    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

impl Default for PanelCatalog {
    fn default() -> Self {
        let panels = PanelId::ALL
            .into_iter()
            .map(|id| Panel {
                id,
                icon: id.default_icon(),
                title: id.default_title().to_string(),
            })
            .collect();

        Self { panels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_known_key_when_parsed_then_panel_id_round_trips_through_display()
    {
        for id in PanelId::ALL {
            let parsed: PanelId = id.key().parse().expect("known key");
            assert_eq!(parsed, id);
            assert_eq!(parsed.to_string(), id.key());
        }
    }

    #[test]
    fn given_unknown_key_when_parsed_then_unknown_panel_error_is_returned() {
        let err = "blog".parse::<PanelId>().unwrap_err();
        assert_eq!(
            err,
            NavError::UnknownPanel {
                key: String::from("blog")
            }
        );
    }

    #[test]
    fn given_uppercase_key_when_parsed_then_it_is_rejected() {
        assert!("About".parse::<PanelId>().is_err());
    }

    #[test]
    fn given_default_catalog_when_iterated_then_order_matches_panel_ids() {
        let catalog = PanelCatalog::default();
        let ids: Vec<PanelId> = catalog.iter().map(|panel| panel.id).collect();
        assert_eq!(ids, PanelId::ALL.to_vec());
        assert_eq!(catalog.get(PanelId::Skills).icon, IconRef::Code);
        assert_eq!(catalog.get(PanelId::Projects).title, "Projects");
    }

    #[test]
    fn given_title_overrides_when_catalog_built_then_only_valid_titles_apply() {
        let catalog = PanelCatalog::with_titles([
            (PanelId::About, "About Me"),
            (PanelId::Skills, "   "),
        ]);

        assert_eq!(catalog.get(PanelId::About).title, "About Me");
        assert_eq!(catalog.get(PanelId::Skills).title, "Skills");
        assert_eq!(catalog.len(), PanelId::ALL.len());
    }

    #[test]
    fn given_panel_id_when_serialized_then_lowercase_key_is_used() {
        let json = serde_json::to_string(&PanelId::Experience).unwrap();
        assert_eq!(json, "\"experience\"");

        let icon: IconRef = serde_json::from_str("\"graduation_cap\"").unwrap();
        assert_eq!(icon, IconRef::GraduationCap);
    }
}
