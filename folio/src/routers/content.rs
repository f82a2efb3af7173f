use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::content::{ContentEffect, ContentEvent, ContentIntent};

/// Route a content event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: ContentEvent) -> Task<AppEvent> {
    match event {
        ContentEvent::Intent(event) => route_intent(app, event),
        ContentEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: ContentIntent) -> Task<AppEvent> {
    app.widgets.content.reduce(event).map(AppEvent::Content)
}

fn route_effect(effect: ContentEffect) -> Task<AppEvent> {
    match effect {
        ContentEffect::CopyToClipboard { text } => {
            Task::done(AppEvent::CopyToClipboard { text })
        },
    }
}
