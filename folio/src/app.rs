#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use std::rc::Rc;

use folio_nav::WindowViewport;
use iced::{Element, Size, Subscription, Task, Theme};

use crate::layout::{INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH};
use crate::profile::load_initial_profile;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeManager;
use crate::state::State;
use crate::widgets::content::{ContentEvent, ContentWidget};
use crate::widgets::navigation::{NavigationEvent, NavigationWidget};

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Navigation widget
    Navigation(NavigationEvent),
    // Content widget
    Content(ContentEvent),
    // Direct operations
    CopyToClipboard { text: String },
    Window(iced::window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) navigation: NavigationWidget,
    pub(crate) content: ContentWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) viewport: Rc<WindowViewport>,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let profile = load_initial_profile();

        let mut theme_manager = ThemeManager::new();
        if let Some(palette) = &profile.palette {
            theme_manager.set_custom_palette(palette);
        }

        let window_size = Size {
            width: INITIAL_WINDOW_WIDTH,
            height: INITIAL_WINDOW_HEIGHT,
        };
        let viewport = Rc::new(WindowViewport::new(window_size.width));

        let navigation = NavigationWidget::new(
            Rc::clone(&viewport),
            profile.catalog(),
            profile.contacts.clone(),
        );

        let widgets = Widgets {
            navigation,
            content: ContentWidget::new(profile),
        };

        let app = App {
            theme_manager,
            fonts: FontsConfig::default(),
            viewport,
            state: State::new(window_size),
            widgets,
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        let name = self.widgets.content.profile().name.as_str();
        match self.widgets.navigation.active_section() {
            Some(id) => {
                let panel = self.widgets.navigation.panel_title(id);
                format!("{name} | {panel}")
            },
            None => name.to_string(),
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
