use iced::Task;

use super::event::{ContentEffect, ContentEvent, ContentIntent};
use super::state::ContentState;

/// Reduce a content intent into effect events.
pub(crate) fn reduce(
    state: &ContentState,
    event: ContentIntent,
) -> Task<ContentEvent> {
    match event {
        ContentIntent::ProjectLinkPressed { url } => {
            match project_link_effect(state, &url) {
                Some(effect) => Task::done(ContentEvent::Effect(effect)),
                None => {
                    log::warn!("ignoring link not present in profile: {url}");
                    Task::none()
                },
            }
        },
    }
}

/// Effect for a pressed project link, or `None` when the profile has no
/// project with that link.
fn project_link_effect(
    state: &ContentState,
    url: &str,
) -> Option<ContentEffect> {
    state
        .profile()
        .projects
        .iter()
        .any(|project| project.link.as_deref() == Some(url))
        .then(|| ContentEffect::CopyToClipboard {
            text: url.to_string(),
        })
}
