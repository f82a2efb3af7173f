use crate::panel::{ContactLink, PanelCatalog, PanelId};
use crate::viewport::SizeClass;

/// Where a section selection originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// Entry in the sidebar or the mobile slide-in menu.
    NavLink,
    /// Tile in the mobile landing grid.
    LandingGrid,
}

/// Outcome of a navigation transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
}

impl Transition {
    pub fn is_changed(self) -> bool {
        self == Transition::Changed
    }

    fn when(changed: bool) -> Self {
        if changed {
            Transition::Changed
        } else {
            Transition::Unchanged
        }
    }
}

/// Mutable navigation state.
///
/// `active_section == None` means no panel was chosen yet. The menu flag
/// only has a visual effect in the mobile regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    active_section: Option<PanelId>,
    is_mobile_menu_open: bool,
    is_mobile: bool,
}

impl NavigationState {
    fn unselected(size_class: SizeClass) -> Self {
        Self {
            active_section: None,
            is_mobile_menu_open: false,
            is_mobile: size_class.is_mobile(),
        }
    }

    pub fn active_section(&self) -> Option<PanelId> {
        self.active_section
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.is_mobile_menu_open
    }

    /// Whether the content of `id` should be rendered.
    pub fn is_panel_visible(&self, id: PanelId) -> bool {
        self.active_section == Some(id)
    }

    /// Whether the mobile landing grid replaces the content area.
    pub fn should_show_landing_grid(&self) -> bool {
        self.is_mobile && self.active_section.is_none()
    }

    /// Whether the navigation sidebar is on screen.
    pub fn is_sidebar_open(&self) -> bool {
        !self.is_mobile || self.is_mobile_menu_open
    }
}

/// Owner of [`NavigationState`] and the static panel configuration.
#[derive(Debug, Clone)]
pub struct NavigationController {
    state: NavigationState,
    panels: PanelCatalog,
    contacts: Vec<ContactLink>,
}

impl NavigationController {
    /// Mount a controller for the initial viewport size class.
    ///
    /// Starts without a selection; a desktop mount then applies the
    /// desktop default exactly like a viewport change would.
    pub fn new(
        initial: SizeClass,
        panels: PanelCatalog,
        contacts: Vec<ContactLink>,
    ) -> Self {
        let mut controller = Self {
            state: NavigationState::unselected(initial),
            panels,
            contacts,
        };
        controller.apply_desktop_default();
        controller
    }

    /// Record a viewport size class change.
    ///
    /// Entering desktop without a selection selects the default panel.
    /// Entering mobile never changes the selection.
    pub fn on_viewport_change(&mut self, size_class: SizeClass) -> Transition {
        let is_mobile = size_class.is_mobile();
        let flipped = self.state.is_mobile != is_mobile;
        self.state.is_mobile = is_mobile;

        let defaulted = self.apply_desktop_default();
        if flipped {
            log::debug!(
                "navigation entered {size_class:?} regime, active section {:?}",
                self.state.active_section
            );
        }

        Transition::when(flipped || defaulted)
    }

    /// Make `id` the active panel.
    ///
    /// Nav-link selections also close the slide-in menu; landing-grid
    /// selections leave it alone.
    pub fn select_section(
        &mut self,
        id: PanelId,
        source: SelectionSource,
    ) -> Transition {
        let before = self.state;

        self.state.active_section = Some(id);
        if source == SelectionSource::NavLink {
            self.state.is_mobile_menu_open = false;
        }

        let transition = Transition::when(before != self.state);
        if transition.is_changed() {
            log::debug!("navigation selected {id} from {source:?}");
        }
        transition
    }

    /// Select a panel by its config key.
    ///
    /// Unknown keys are logged and ignored without touching state.
    pub fn select_section_by_key(
        &mut self,
        key: &str,
        source: SelectionSource,
    ) -> Transition {
        match key.parse::<PanelId>() {
            Ok(id) => self.select_section(id, source),
            Err(err) => {
                log::warn!("ignoring section selection: {err}");
                Transition::Unchanged
            },
        }
    }

    /// Flip the mobile slide-in menu. No-op in the desktop regime.
    pub fn toggle_mobile_menu(&mut self) -> Transition {
        if !self.state.is_mobile {
            log::debug!("ignoring mobile menu toggle in desktop regime");
            return Transition::Unchanged;
        }

        self.state.is_mobile_menu_open = !self.state.is_mobile_menu_open;
        Transition::Changed
    }

    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> NavigationState {
        self.state
    }

    pub fn active_section(&self) -> Option<PanelId> {
        self.state.active_section()
    }

    pub fn is_mobile(&self) -> bool {
        self.state.is_mobile()
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.state.is_mobile_menu_open()
    }

    pub fn is_panel_visible(&self, id: PanelId) -> bool {
        self.state.is_panel_visible(id)
    }

    pub fn should_show_landing_grid(&self) -> bool {
        self.state.should_show_landing_grid()
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.state.is_sidebar_open()
    }

    /// Static panel table in navigation order.
    pub fn panels(&self) -> &PanelCatalog {
        &self.panels
    }

    /// Static contact links.
    pub fn contacts(&self) -> &[ContactLink] {
        &self.contacts
    }

    fn apply_desktop_default(&mut self) -> bool {
        if self.state.is_mobile || self.state.active_section.is_some() {
            return false;
        }

        self.state.active_section = Some(PanelId::DEFAULT);
        true
    }
}
