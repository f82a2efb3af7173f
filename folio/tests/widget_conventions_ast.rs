use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const REQUIRED_WIDGET_FILES: [&str; 4] =
    ["mod.rs", "event.rs", "model.rs", "reducer.rs"];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");

    let mut violations: Vec<String> = Vec::new();

    let declared_widgets =
        declared_modules(&widgets_dir.join("mod.rs"), &mut violations);
    let widget_dirs = child_entries(&widgets_dir, EntryKind::Dir);

    if declared_widgets != widget_dirs {
        violations.push(format!(
            "{}: declared widgets {:?} do not match directories {:?}",
            widgets_dir.display(),
            declared_widgets,
            widget_dirs
        ));
    }

    for widget in &widget_dirs {
        let widget_dir = widgets_dir.join(widget);
        for required in REQUIRED_WIDGET_FILES {
            if !widget_dir.join(required).is_file() {
                violations.push(format!(
                    "{}: missing required file {required}",
                    widget_dir.display()
                ));
            }
        }

        let view_dir = widget_dir.join("view");
        let declared_views =
            declared_modules(&view_dir.join("mod.rs"), &mut violations);
        let view_files = child_entries(&view_dir, EntryKind::RustFile);

        if declared_views != view_files {
            violations.push(format!(
                "{}: declared views {:?} do not match files {:?}",
                view_dir.display(),
                declared_views,
                view_files
            ));
        }

        for view in &declared_views {
            validate_view_file(
                &view_dir.join(format!("{view}.rs")),
                &mut violations,
            );
        }
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    RustFile,
}

fn declared_modules(
    mod_rs: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let source = fs::read_to_string(mod_rs).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", mod_rs.display())
    });
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", mod_rs.display())
    });

    let mut modules = BTreeSet::new();
    for item in &file.items {
        match item {
            Item::Mod(item_mod) => {
                if item_mod.content.is_some() {
                    violations.push(format!(
                        "{}: inline module '{}' is forbidden",
                        mod_rs.display(),
                        item_mod.ident
                    ));
                }
                modules.insert(item_mod.ident.to_string());
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    modules
}

fn child_entries(dir: &Path, kind: EntryKind) -> BTreeSet<String> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });

    let mut names = BTreeSet::new();
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();

        match kind {
            EntryKind::Dir if path.is_dir() => {
                names.insert(file_stem(&path));
            },
            EntryKind::RustFile
                if path.is_file()
                    && path.extension().is_some_and(|ext| ext == "rs")
                    && path.file_name().is_some_and(|name| name != "mod.rs") =>
            {
                names.insert(file_stem(&path));
            },
            _ => {},
        }
    }

    names
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    });
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    });
    let expected_props =
        format!("{}Props", snake_to_pascal_case(&file_stem(file_path)));

    for forbidden in ["crate::app", "crate::routers", "crate::state"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: views must not depend on {forbidden}",
                file_path.display()
            ));
        }
    }

    for forbidden in ["log::", "std::fs::", "Task::", "iced::Task"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names != [expected_props.clone()] {
        violations.push(format!(
            "{}: expected a single props type '{expected_props}', found {props_names:?}",
            file_path.display()
        ));
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
