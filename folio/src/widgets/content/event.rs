/// Intent events handled by the content presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum ContentIntent {
    ProjectLinkPressed { url: String },
}

/// Effect events produced by the content reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentEffect {
    CopyToClipboard { text: String },
}

/// Content event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ContentEvent {
    /// Intent event reduced by the content widget.
    Intent(ContentIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ContentEffect),
}
