use iced::Size;

/// Window geometry state.
#[derive(Default)]
pub(crate) struct State {
    pub(crate) window_size: Size,
}

impl State {
    /// Create state with the given initial window size.
    pub(crate) fn new(window_size: Size) -> Self {
        Self { window_size }
    }

    /// Update the cached size after a window resize.
    pub(crate) fn set_window_size(&mut self, size: Size) {
        self.window_size = size;
    }
}
