use std::collections::BTreeMap;

use folio_nav::{ContactLink, IconRef, PanelCatalog, PanelId};
use serde::{Deserialize, Serialize};

use crate::shared::ui::theme::ColorPalette;

/// Inert profile content rendered by the content panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Profile {
    pub(crate) name: String,
    pub(crate) role: String,
    pub(crate) about: Vec<String>,
    pub(crate) skills: Vec<SkillGroup>,
    pub(crate) experience: Vec<Role>,
    pub(crate) projects: Vec<Project>,
    pub(crate) education: Vec<Degree>,
    pub(crate) contacts: Vec<ContactLink>,
    /// Panel title overrides keyed by panel key (`"about"`, ...).
    pub(crate) panel_titles: BTreeMap<String, String>,
    pub(crate) palette: Option<ColorPalette>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SkillGroup {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Role {
    pub(crate) title: String,
    pub(crate) organisation: String,
    pub(crate) period: String,
    #[serde(default)]
    pub(crate) highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Project {
    pub(crate) name: String,
    pub(crate) summary: String,
    #[serde(default)]
    pub(crate) stack: Vec<String>,
    #[serde(default)]
    pub(crate) link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Degree {
    pub(crate) degree: String,
    pub(crate) institution: String,
    pub(crate) period: String,
    #[serde(default)]
    pub(crate) summary: String,
}

impl Profile {
    /// Build the navigation panel table with configured title overrides.
    ///
    /// Unknown panel keys are logged and skipped.
    pub(crate) fn catalog(&self) -> PanelCatalog {
        let overrides = self.panel_titles.iter().filter_map(|(key, title)| {
            match key.parse::<PanelId>() {
                Ok(id) => Some((id, title.as_str())),
                Err(err) => {
                    log::warn!("skipping panel title override: {err}");
                    None
                },
            }
        });

        PanelCatalog::with_titles(overrides)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::from("Alex Morgan"),
            role: String::from("Full Stack Developer"),
            about: vec![
                String::from(
                    "Full stack developer building scalable web \
                     applications and cloud services, with a focus on \
                     modern JavaScript frameworks and managed cloud \
                     infrastructure.",
                ),
                String::from(
                    "Background in computer science and enterprise \
                     delivery. Enjoys turning complex problems into \
                     efficient, friendly tools.",
                ),
            ],
            skills: vec![
                skill_group(
                    "Frontend",
                    &["JavaScript", "TypeScript", "React", "Redux", "CSS"],
                ),
                skill_group(
                    "Backend",
                    &["Node.js", "Express", "REST APIs", "WebSockets"],
                ),
                skill_group("Database", &["MongoDB", "DynamoDB", "SQL"]),
                skill_group(
                    "Cloud Services",
                    &["AWS Lambda", "API Gateway", "CloudFormation"],
                ),
                skill_group("Automation", &["Cypress", "Jest"]),
                skill_group("Tools", &["Git", "Docker", "CI/CD", "Postman"]),
            ],
            experience: vec![Role {
                title: String::from("Application Developer"),
                organisation: String::from("Example Corp"),
                period: String::from("2022 - Present"),
                highlights: vec![
                    String::from(
                        "Moved a legacy booking platform to managed cloud \
                         services",
                    ),
                    String::from(
                        "Built and deployed REST APIs in Node.js and \
                         TypeScript",
                    ),
                    String::from(
                        "Raised unit test coverage to 80% with Jest",
                    ),
                    String::from(
                        "Automated manual regression suites with Cypress",
                    ),
                ],
            }],
            projects: vec![
                Project {
                    name: String::from("Flight Status API"),
                    summary: String::from(
                        "Serverless API aggregating flight status feeds \
                         with tracing and structured logs.",
                    ),
                    stack: strings(&["TypeScript", "AWS Lambda", "DynamoDB"]),
                    link: Some(String::from(
                        "https://example.com/projects/flight-status",
                    )),
                },
                Project {
                    name: String::from("Portfolio"),
                    summary: String::from(
                        "This profile viewer: responsive navigation with a \
                         desktop sidebar and a mobile landing grid.",
                    ),
                    stack: strings(&["Rust", "iced"]),
                    link: None,
                },
            ],
            education: vec![Degree {
                degree: String::from(
                    "Bachelor of Technology in Computer Science",
                ),
                institution: String::from("Example University"),
                period: String::from("2018 - 2022"),
                summary: String::from(
                    "Core computer science, data structures, algorithms and \
                     software engineering.",
                ),
            }],
            contacts: vec![
                contact(
                    IconRef::Mail,
                    "alex@example.com",
                    "mailto:alex@example.com",
                ),
                contact(IconRef::Phone, "+1 555 0100", "tel:+15550100"),
                contact(
                    IconRef::Linkedin,
                    "LinkedIn",
                    "https://www.linkedin.com/in/example",
                ),
                contact(
                    IconRef::Github,
                    "GitHub",
                    "https://github.com/example",
                ),
            ],
            panel_titles: BTreeMap::new(),
            palette: None,
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn skill_group(title: &str, skills: &[&str]) -> SkillGroup {
    SkillGroup {
        title: title.to_string(),
        skills: strings(skills),
    }
}

fn contact(icon: IconRef, label: &str, href: &str) -> ContactLink {
    ContactLink {
        icon,
        label: label.to_string(),
        href: href.to_string(),
    }
}
