use folio_nav::PanelId;

/// Intent events handled by the navigation presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum NavigationIntent {
    /// Sidebar or slide-in menu entry pressed.
    SelectFromNav(PanelId),
    /// Landing grid tile pressed.
    SelectFromGrid(PanelId),
    /// Hamburger button or backdrop pressed.
    ToggleMenu,
    ContactPressed { href: String },
}

/// Effect events produced by the navigation reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NavigationEffect {
    CopyToClipboard { text: String },
}

/// Navigation event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEvent {
    /// Intent event reduced by the navigation widget.
    Intent(NavigationIntent),
    /// External effect orchestrated by app-level routing.
    Effect(NavigationEffect),
}
