use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::controller::{NavigationController, SelectionSource, Transition};
use crate::panel::{ContactLink, PanelCatalog, PanelId};
use crate::viewport::{ListenerId, ViewportObserver};

/// Registration of a controller with a [`ViewportObserver`].
///
/// Dropping the subscription deregisters the listener.
pub struct ViewportSubscription {
    observer: Rc<dyn ViewportObserver>,
    id: ListenerId,
}

impl ViewportSubscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        self.observer.unsubscribe(self.id);
        log::debug!("released {}", self.id);
    }
}

/// Navigation controller wired to a live viewport.
///
/// The viewport listener only holds a weak reference to the controller,
/// and the subscription is released when the mounted navigation drops.
pub struct MountedNavigation {
    controller: Rc<RefCell<NavigationController>>,
    subscription: ViewportSubscription,
}

impl MountedNavigation {
    /// Create a controller for the observer's current size class and
    /// subscribe it to future size-class flips.
    pub fn mount<O>(
        observer: Rc<O>,
        panels: PanelCatalog,
        contacts: Vec<ContactLink>,
    ) -> Self
    where
        O: ViewportObserver + 'static,
    {
        let initial = observer.size_class();
        let controller = Rc::new(RefCell::new(NavigationController::new(
            initial, panels, contacts,
        )));

        let target = Rc::downgrade(&controller);
        let id = observer.subscribe(Box::new(move |size_class| {
            if let Some(controller) = target.upgrade() {
                let _ = controller.borrow_mut().on_viewport_change(size_class);
            }
        }));
        log::debug!("mounted navigation in {initial:?} regime with {id}");

        let observer: Rc<dyn ViewportObserver> = observer;
        Self {
            controller,
            subscription: ViewportSubscription { observer, id },
        }
    }

    /// Read access to the controller for rendering.
    pub fn controller(&self) -> Ref<'_, NavigationController> {
        self.controller.borrow()
    }

    pub fn select_section(
        &self,
        id: PanelId,
        source: SelectionSource,
    ) -> Transition {
        self.controller.borrow_mut().select_section(id, source)
    }

    pub fn select_section_by_key(
        &self,
        key: &str,
        source: SelectionSource,
    ) -> Transition {
        self.controller.borrow_mut().select_section_by_key(key, source)
    }

    pub fn toggle_mobile_menu(&self) -> Transition {
        self.controller.borrow_mut().toggle_mobile_menu()
    }

    pub fn subscription(&self) -> &ViewportSubscription {
        &self.subscription
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::{SizeClass, WindowViewport};

    fn mount(viewport: &Rc<WindowViewport>) -> MountedNavigation {
        MountedNavigation::mount(
            Rc::clone(viewport),
            PanelCatalog::default(),
            Vec::new(),
        )
    }

    #[test]
    fn given_desktop_viewport_when_mounted_then_default_panel_is_active() {
        let viewport = Rc::new(WindowViewport::new(1280.0));
        let navigation = mount(&viewport);

        assert_eq!(
            navigation.controller().active_section(),
            Some(PanelId::About)
        );
        assert_eq!(viewport.listener_count(), 1);
    }

    #[test]
    fn given_mounted_navigation_when_viewport_crosses_then_controller_follows() {
        let viewport = Rc::new(WindowViewport::new(360.0));
        let navigation = mount(&viewport);
        assert!(navigation.controller().should_show_landing_grid());

        viewport.set_width(1024.0);

        let controller = navigation.controller();
        assert!(!controller.is_mobile());
        assert!(controller.is_panel_visible(PanelId::About));
    }

    #[test]
    fn given_mounted_navigation_when_dropped_then_listener_is_released() {
        let viewport = Rc::new(WindowViewport::new(360.0));
        let navigation = mount(&viewport);
        assert_eq!(viewport.listener_count(), 1);

        drop(navigation);

        assert_eq!(viewport.listener_count(), 0);
        assert!(viewport.set_width(1024.0));
        assert_eq!(viewport.size_class(), SizeClass::Desktop);
    }

    #[test]
    fn given_two_mounts_when_one_dropped_then_other_keeps_receiving_changes() {
        let viewport = Rc::new(WindowViewport::new(360.0));
        let first = mount(&viewport);
        let second = mount(&viewport);
        assert_ne!(first.subscription().id(), second.subscription().id());

        drop(first);
        viewport.set_width(1024.0);

        assert_eq!(viewport.listener_count(), 1);
        assert!(!second.controller().is_mobile());
    }

    #[test]
    fn given_mounted_navigation_when_transitions_dispatched_then_applied_in_order()
    {
        let viewport = Rc::new(WindowViewport::new(360.0));
        let navigation = mount(&viewport);

        navigation.toggle_mobile_menu();
        navigation
            .select_section(PanelId::Experience, SelectionSource::NavLink);
        viewport.set_width(900.0);
        navigation.toggle_mobile_menu();
        viewport.set_width(500.0);

        let controller = navigation.controller();
        assert_eq!(controller.active_section(), Some(PanelId::Experience));
        assert!(controller.is_mobile());
        assert!(!controller.is_mobile_menu_open());
    }
}
