pub(crate) mod event;
pub(crate) mod model;
mod reducer;
pub(crate) mod view;

use std::rc::Rc;

use folio_nav::{
    ContactLink, MountedNavigation, PanelCatalog, PanelId, WindowViewport,
};
use iced::Task;

pub(crate) use self::event::{
    NavigationEffect, NavigationEvent, NavigationIntent,
};
use self::model::NavigationViewModel;

/// Navigation widget wrapping the mounted navigation controller.
///
/// The controller follows the shared viewport on its own; this widget
/// only forwards user intents and exposes read-only snapshots.
pub(crate) struct NavigationWidget {
    mounted: MountedNavigation,
}

impl NavigationWidget {
    /// Mount navigation against the application viewport.
    pub(crate) fn new(
        viewport: Rc<WindowViewport>,
        panels: PanelCatalog,
        contacts: Vec<ContactLink>,
    ) -> Self {
        Self {
            mounted: MountedNavigation::mount(viewport, panels, contacts),
        }
    }

    /// Reduce an intent event into controller transitions and effects.
    pub(crate) fn reduce(
        &mut self,
        event: NavigationIntent,
    ) -> Task<NavigationEvent> {
        reducer::reduce(&self.mounted, event)
    }

    /// Produce the navigation view model for rendering.
    pub(crate) fn vm(&self) -> NavigationViewModel {
        let controller = self.mounted.controller();
        NavigationViewModel {
            state: controller.snapshot(),
            panels: controller.panels().iter().cloned().collect(),
            contacts: controller.contacts().to_vec(),
        }
    }

    pub(crate) fn active_section(&self) -> Option<PanelId> {
        self.mounted.controller().active_section()
    }

    /// Return the configured title of a panel.
    pub(crate) fn panel_title(&self, id: PanelId) -> String {
        self.mounted.controller().panels().get(id).title.clone()
    }
}
