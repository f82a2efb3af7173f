use folio_nav::{ContactLink, MountedNavigation, SelectionSource};
use iced::Task;

use super::event::{NavigationEffect, NavigationEvent, NavigationIntent};

/// Reduce a navigation intent into controller transitions and effects.
pub(crate) fn reduce(
    navigation: &MountedNavigation,
    event: NavigationIntent,
) -> Task<NavigationEvent> {
    match event {
        NavigationIntent::SelectFromNav(id) => {
            let _ = navigation.select_section(id, SelectionSource::NavLink);
            Task::none()
        },
        NavigationIntent::SelectFromGrid(id) => {
            let _ =
                navigation.select_section(id, SelectionSource::LandingGrid);
            Task::none()
        },
        NavigationIntent::ToggleMenu => {
            let _ = navigation.toggle_mobile_menu();
            Task::none()
        },
        NavigationIntent::ContactPressed { href } => {
            let effect =
                contact_effect(navigation.controller().contacts(), &href);
            match effect {
                Some(effect) => Task::done(NavigationEvent::Effect(effect)),
                None => {
                    log::warn!(
                        "ignoring contact not present in profile: {href}"
                    );
                    Task::none()
                },
            }
        },
    }
}

/// Effect for a pressed contact, or `None` when no contact has `href`.
fn contact_effect(
    contacts: &[ContactLink],
    href: &str,
) -> Option<NavigationEffect> {
    contacts
        .iter()
        .any(|contact| contact.href == href)
        .then(|| NavigationEffect::CopyToClipboard {
            text: href.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use folio_nav::{
        ContactLink, IconRef, PanelCatalog, PanelId, WindowViewport,
    };

    use super::contact_effect;
    use crate::widgets::navigation::event::NavigationEffect;
    use crate::widgets::navigation::{NavigationIntent, NavigationWidget};

    const MAIL_HREF: &str = "mailto:sam@example.com";

    fn widget(width: f32) -> (Rc<WindowViewport>, NavigationWidget) {
        let viewport = Rc::new(WindowViewport::new(width));
        let widget = NavigationWidget::new(
            Rc::clone(&viewport),
            PanelCatalog::default(),
            vec![ContactLink {
                icon: IconRef::Mail,
                label: String::from("Mail"),
                href: String::from(MAIL_HREF),
            }],
        );
        (viewport, widget)
    }

    #[test]
    fn given_mobile_widget_when_created_then_landing_grid_is_shown() {
        let (_viewport, widget) = widget(400.0);

        let vm = widget.vm();

        assert!(vm.state.should_show_landing_grid());
        assert!(!vm.state.is_sidebar_open());
        assert_eq!(vm.panels.len(), PanelId::ALL.len());
    }

    #[test]
    fn given_open_menu_when_nav_entry_selected_then_menu_closes() {
        let (_viewport, mut widget) = widget(400.0);
        let _task = widget.reduce(NavigationIntent::ToggleMenu);
        assert!(widget.vm().state.is_mobile_menu_open());

        let _task =
            widget.reduce(NavigationIntent::SelectFromNav(PanelId::Skills));

        let vm = widget.vm();
        assert_eq!(vm.state.active_section(), Some(PanelId::Skills));
        assert!(!vm.state.is_mobile_menu_open());
    }

    #[test]
    fn given_open_menu_when_grid_tile_selected_then_menu_stays_open() {
        let (_viewport, mut widget) = widget(400.0);
        let _task = widget.reduce(NavigationIntent::ToggleMenu);

        let _task =
            widget.reduce(NavigationIntent::SelectFromGrid(PanelId::Projects));

        let vm = widget.vm();
        assert_eq!(vm.state.active_section(), Some(PanelId::Projects));
        assert!(vm.state.is_mobile_menu_open());
    }

    #[test]
    fn given_desktop_widget_when_menu_toggled_then_state_is_untouched() {
        let (_viewport, mut widget) = widget(1280.0);
        let before = widget.vm().state;

        let _task = widget.reduce(NavigationIntent::ToggleMenu);

        assert_eq!(widget.vm().state, before);
    }

    #[test]
    fn given_known_contact_when_pressed_then_href_is_copied() {
        let (_viewport, widget) = widget(1280.0);

        let effect = contact_effect(&widget.vm().contacts, MAIL_HREF);

        assert_eq!(
            effect,
            Some(NavigationEffect::CopyToClipboard {
                text: String::from(MAIL_HREF),
            })
        );
    }

    #[test]
    fn given_unknown_contact_when_pressed_then_nothing_is_copied() {
        let (_viewport, widget) = widget(1280.0);

        let effect =
            contact_effect(&widget.vm().contacts, "mailto:other@example.com");

        assert_eq!(effect, None);
    }

    #[test]
    fn given_mobile_widget_when_viewport_widens_then_default_panel_is_active() {
        let (viewport, widget) = widget(400.0);

        viewport.set_width(1024.0);

        assert_eq!(widget.active_section(), Some(PanelId::About));
        assert_eq!(widget.panel_title(PanelId::About), "About");
    }
}
