use folio_nav::MOBILE_BREAKPOINT;

pub(crate) const INITIAL_WINDOW_WIDTH: f32 = 1024.0;
pub(crate) const INITIAL_WINDOW_HEIGHT: f32 = 720.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Fixed width of the navigation sidebar in both regimes.
pub(crate) const SIDEBAR_WIDTH: f32 = 256.0;
/// Height of the mobile top bar holding the menu toggle.
pub(crate) const TOP_BAR_HEIGHT: f32 = 56.0;

const DESKTOP_CONTENT_PADDING: f32 = 48.0;
const MOBILE_CONTENT_PADDING: f32 = 20.0;

/// Width at which content cards switch from one column to two.
const TWO_COLUMN_MIN_CONTENT_WIDTH: f32 = MOBILE_BREAKPOINT - SIDEBAR_WIDTH;

/// Content area padding for the given regime.
pub(crate) fn content_padding(is_mobile: bool) -> f32 {
    if is_mobile {
        MOBILE_CONTENT_PADDING
    } else {
        DESKTOP_CONTENT_PADDING
    }
}

/// Width left for the content panel after the sidebar and padding.
pub(crate) fn content_width(window_width: f32, is_mobile: bool) -> f32 {
    let sidebar = if is_mobile { 0.0 } else { SIDEBAR_WIDTH };
    (window_width - sidebar - 2.0 * content_padding(is_mobile)).max(0.0)
}

/// Number of card columns that fit into `content_width`.
pub(crate) fn card_columns(content_width: f32) -> usize {
    if content_width >= TWO_COLUMN_MIN_CONTENT_WIDTH {
        2
    } else {
        1
    }
}
