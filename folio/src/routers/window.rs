use folio_nav::ViewportObserver;
use iced::{Size, Task, window};

use crate::app::{App, AppEvent};

/// Route window events that affect layout.
pub(crate) fn route(app: &mut App, event: window::Event) -> Task<AppEvent> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => {
            handle_resize(app, size)
        },
        _ => Task::none(),
    }
}

/// Cache the new window size and feed its width to the viewport.
///
/// The viewport notifies the mounted navigation only when the size
/// class flips.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    app.state.set_window_size(size);
    if app.viewport.set_width(size.width) {
        log::debug!(
            "viewport crossed breakpoint at width {}, now {:?}",
            size.width,
            app.viewport.size_class()
        );
    }
    Task::none()
}
