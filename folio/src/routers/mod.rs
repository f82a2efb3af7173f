use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod content;
pub(crate) mod navigation;
pub(crate) mod window;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Navigation widget
        AppEvent::Navigation(event) => navigation::route(app, event),
        // Content widget
        AppEvent::Content(event) => content::route(app, event),
        // Direct operations
        AppEvent::CopyToClipboard { text } => copy_to_clipboard(text),
        AppEvent::Window(event) => window::route(app, event),
    }
}

fn copy_to_clipboard(text: String) -> Task<AppEvent> {
    log::info!("copied {text} to clipboard");
    iced::clipboard::write(text)
}
