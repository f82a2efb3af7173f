use iced::widget::{Space, button, container, row, svg, text};
use iced::{Element, Length, Theme, alignment};

use crate::layout::TOP_BAR_HEIGHT;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::navigation::event::NavigationIntent;

const BAR_PADDING_X: f32 = 16.0;
const TITLE_SIZE: f32 = 18.0;
const TOGGLE_SIZE: f32 = 40.0;
const TOGGLE_ICON_SIZE: f32 = 24.0;

/// Props for the mobile top bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TopBarProps<'a> {
    pub(crate) name: &'a str,
    pub(crate) is_menu_open: bool,
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the mobile top bar with the menu toggle.
pub(crate) fn view(
    props: TopBarProps<'_>,
) -> Element<'_, NavigationIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let base_color = palette.foreground;
    let hover_color = palette.bright_accent;

    let toggle_icon = if props.is_menu_open {
        icons::MENU_CLOSE
    } else {
        icons::MENU_OPEN
    };

    let icon = svg::Svg::new(svg::Handle::from_memory(toggle_icon))
        .width(Length::Fixed(TOGGLE_ICON_SIZE))
        .height(Length::Fixed(TOGGLE_ICON_SIZE))
        .style(move |_, status| {
            let color = if status == svg::Status::Hovered {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let toggle = button(
        container(icon)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(NavigationIntent::ToggleMenu)
    .padding(0)
    .width(Length::Fixed(TOGGLE_SIZE))
    .height(Length::Fixed(TOGGLE_SIZE))
    .style(|_, _| iced::widget::button::Style::default());

    let title = text(props.name)
        .size(TITLE_SIZE)
        .font(props.fonts.heading.font_type)
        .color(palette.bright_foreground);

    let content = row![title, Space::new().width(Length::Fill), toggle]
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill);

    let background = palette.surface;
    container(content)
        .padding([0.0, BAR_PADDING_X])
        .width(Length::Fill)
        .height(Length::Fixed(TOP_BAR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}
