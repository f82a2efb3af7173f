use folio_nav::{NavigationState, PanelId};
use iced::widget::{
    Space, Stack, column, container, mouse_area, row, scrollable,
};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::layout;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::content::ContentEvent;
use crate::widgets::content::view::{
    about, education, experience, projects, skills,
};
use crate::widgets::navigation::model::NavigationViewModel;
use crate::widgets::navigation::view::{landing_grid, sidebar, top_bar};
use crate::widgets::navigation::{NavigationEvent, NavigationIntent};

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(app.theme_manager.current());
    let vm = app.widgets.navigation.vm();
    let state = vm.state;

    let body = view_body(app, &vm, theme_props);
    let palette = theme_props.theme.iced_palette().clone();
    let scroll = scrollable(
        container(body)
            .padding(layout::content_padding(state.is_mobile()))
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(style::thin_scroll_style(palette));

    if !state.is_mobile() {
        let sidebar = view_sidebar(app, vm, theme_props);
        return row![sidebar, scroll]
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    let profile = app.widgets.content.profile();
    let top_bar = top_bar::view(top_bar::TopBarProps {
        name: &profile.name,
        is_menu_open: state.is_mobile_menu_open(),
        fonts: &app.fonts,
        theme: theme_props,
    })
    .map(navigation_event);

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> = vec![
        column![top_bar, scroll]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    ];

    if state.is_sidebar_open() {
        layers.push(view_mobile_menu(app, vm, theme_props));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Landing grid when nothing is selected on mobile, else the active panel.
fn view_body<'a>(
    app: &'a App,
    vm: &NavigationViewModel,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let state: NavigationState = vm.state;

    if state.should_show_landing_grid() {
        return landing_grid::view(landing_grid::LandingGridProps {
            panels: vm.panels.clone(),
            fonts: &app.fonts,
            theme: theme_props,
        })
        .map(navigation_event);
    }

    match state.active_section() {
        Some(id) => view_panel(app, id, state.is_mobile(), theme_props),
        None => Space::new().into(),
    }
}

fn view_panel<'a>(
    app: &'a App,
    id: PanelId,
    is_mobile: bool,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let columns = layout::card_columns(layout::content_width(
        app.state.window_size.width,
        is_mobile,
    ));
    let content = app.widgets.content.vm(columns);
    let profile = content.profile;
    let title = app.widgets.navigation.panel_title(id);
    let fonts = &app.fonts;

    let panel = match id {
        PanelId::About => about::view(about::AboutProps {
            title,
            paragraphs: &profile.about,
            fonts,
            theme: theme_props,
        }),
        PanelId::Skills => skills::view(skills::SkillsProps {
            title,
            groups: &profile.skills,
            columns: content.columns,
            fonts,
            theme: theme_props,
        }),
        PanelId::Experience => experience::view(experience::ExperienceProps {
            title,
            roles: &profile.experience,
            fonts,
            theme: theme_props,
        }),
        PanelId::Projects => projects::view(projects::ProjectsProps {
            title,
            projects: &profile.projects,
            columns: content.columns,
            fonts,
            theme: theme_props,
        }),
        PanelId::Education => education::view(education::EducationProps {
            title,
            degrees: &profile.education,
            fonts,
            theme: theme_props,
        }),
    };

    panel.map(|intent| AppEvent::Content(ContentEvent::Intent(intent)))
}

fn view_sidebar<'a>(
    app: &'a App,
    vm: NavigationViewModel,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let profile = app.widgets.content.profile();

    sidebar::view(sidebar::SidebarProps {
        state: vm.state,
        panels: vm.panels,
        contacts: vm.contacts,
        name: &profile.name,
        role: &profile.role,
        fonts: &app.fonts,
        theme: theme_props,
    })
    .map(navigation_event)
}

/// Slide-in sidebar over a dimmed backdrop that closes the menu.
fn view_mobile_menu<'a>(
    app: &'a App,
    vm: NavigationViewModel,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme_props.theme.iced_palette();
    let sidebar = view_sidebar(app, vm, theme_props);

    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::scrim_style(palette)),
    )
    .on_press(navigation_event(NavigationIntent::ToggleMenu));

    row![sidebar, backdrop]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn navigation_event(intent: NavigationIntent) -> AppEvent {
    AppEvent::Navigation(NavigationEvent::Intent(intent))
}
