use folio_nav::{ContactLink, NavigationState, Panel};

/// View model for the navigation widget.
#[derive(Debug, Clone)]
pub(crate) struct NavigationViewModel {
    pub(crate) state: NavigationState,
    pub(crate) panels: Vec<Panel>,
    pub(crate) contacts: Vec<ContactLink>,
}
