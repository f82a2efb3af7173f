//! Navigation state for the folio profile viewer.
//!
//! The crate owns which content panel is visible, how the viewport size
//! class changes the default selection, and how the mobile slide-in menu
//! interacts with selection. It has no GUI dependency: renderers query a
//! [`NavigationController`] and feed viewport changes through a
//! [`ViewportObserver`].

mod controller;
mod errors;
mod mount;
mod panel;
mod viewport;

pub use controller::{
    NavigationController, NavigationState, SelectionSource, Transition,
};
pub use errors::NavError;
pub use mount::{MountedNavigation, ViewportSubscription};
pub use panel::{ContactLink, IconRef, Panel, PanelCatalog, PanelId};
pub use viewport::{
    Listener, ListenerId, MOBILE_BREAKPOINT, SizeClass, ViewportObserver,
    WindowViewport,
};
