use folio_nav::{ContactLink, NavigationState, Panel};
use iced::widget::{Column, Space, button, column, container, row, svg, text};
use iced::{Element, Length, Theme, alignment};

use crate::layout::SIDEBAR_WIDTH;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::navigation::event::NavigationIntent;

const SIDEBAR_PADDING: f32 = 24.0;
const HEADER_SPACING: f32 = 6.0;
const HEADER_BOTTOM_GAP: f32 = 48.0;
const NAME_SIZE: f32 = 24.0;
const NAV_ITEM_SPACING: f32 = 8.0;
const NAV_ITEM_PADDING: [f32; 2] = [8.0, 16.0];
const NAV_ICON_SIZE: f32 = 20.0;
const CONTACT_SPACING: f32 = 16.0;
const CONTACT_ICON_SIZE: f32 = 16.0;
const CONTACT_TEXT_SIZE: f32 = 14.0;

/// Props for the navigation sidebar.
pub(crate) struct SidebarProps<'a> {
    pub(crate) state: NavigationState,
    pub(crate) panels: Vec<Panel>,
    pub(crate) contacts: Vec<ContactLink>,
    pub(crate) name: &'a str,
    pub(crate) role: &'a str,
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the sidebar: profile header, panel entries and contact links.
pub(crate) fn view(
    props: SidebarProps<'_>,
) -> Element<'_, NavigationIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    let header = column![
        text(props.name)
            .size(NAME_SIZE)
            .font(props.fonts.heading.font_type)
            .color(palette.bright_foreground),
        text(props.role).color(palette.bright_accent),
    ]
    .spacing(HEADER_SPACING);

    let entries = props.panels.into_iter().map(|panel| {
        let is_active = props.state.is_panel_visible(panel.id);
        nav_entry(panel, is_active, props.theme)
    });
    let nav = Column::with_children(entries).spacing(NAV_ITEM_SPACING);

    let links = props
        .contacts
        .into_iter()
        .map(|contact| contact_link(contact, props.theme));
    let footer = Column::with_children(links).spacing(CONTACT_SPACING);

    let content = column![
        header,
        Space::new().height(Length::Fixed(HEADER_BOTTOM_GAP)),
        nav,
        Space::new().height(Length::Fill),
        footer,
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    let background = palette.surface;
    container(content)
        .padding(SIDEBAR_PADDING)
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

fn nav_entry<'a>(
    panel: Panel,
    is_active: bool,
    theme: ThemeProps<'a>,
) -> Element<'a, NavigationIntent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette().clone();
    let icon_color = if is_active {
        palette.bright_foreground
    } else {
        palette.foreground
    };

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::svg_bytes(
        panel.icon,
    )))
    .width(Length::Fixed(NAV_ICON_SIZE))
    .height(Length::Fixed(NAV_ICON_SIZE))
    .style(move |_, _| svg::Style {
        color: Some(icon_color),
    });

    let content = row![icon, text(panel.title)]
        .spacing(NAV_ITEM_SPACING)
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(NavigationIntent::SelectFromNav(panel.id))
        .padding(NAV_ITEM_PADDING)
        .width(Length::Fill)
        .style(move |_, status| {
            style::nav_item_style(&palette, is_active, status)
        })
        .into()
}

fn contact_link<'a>(
    contact: ContactLink,
    theme: ThemeProps<'a>,
) -> Element<'a, NavigationIntent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette().clone();
    let base_color = palette.foreground;
    let hover_color = palette.bright_accent;

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::svg_bytes(
        contact.icon,
    )))
    .width(Length::Fixed(CONTACT_ICON_SIZE))
    .height(Length::Fixed(CONTACT_ICON_SIZE))
    .style(move |_, status| {
        let color = if status == svg::Status::Hovered {
            hover_color
        } else {
            base_color
        };

        svg::Style { color: Some(color) }
    });

    let content = row![icon, text(contact.label).size(CONTACT_TEXT_SIZE)]
        .spacing(NAV_ITEM_SPACING)
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(NavigationIntent::ContactPressed { href: contact.href })
        .padding(0)
        .style(move |_, status| style::link_style(&palette, status))
        .into()
}
