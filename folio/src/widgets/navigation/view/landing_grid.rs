use folio_nav::Panel;
use iced::widget::{button, column, container, svg, text};
use iced::{Element, Length, Theme, alignment};

use crate::components::primitive::card_grid::{self, CardGridProps};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::navigation::event::NavigationIntent;

const TILE_HEIGHT: f32 = 140.0;
const TILE_ICON_SIZE: f32 = 40.0;
const TILE_SPACING: f32 = 16.0;
const TILE_CONTENT_SPACING: f32 = 12.0;
const TILE_TEXT_SIZE: f32 = 18.0;
const GRID_COLUMNS: usize = 2;

/// Props for the mobile landing grid.
pub(crate) struct LandingGridProps<'a> {
    pub(crate) panels: Vec<Panel>,
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render one tile per panel, in panel order.
pub(crate) fn view(
    props: LandingGridProps<'_>,
) -> Element<'_, NavigationIntent, Theme, iced::Renderer> {
    let tiles = props
        .panels
        .into_iter()
        .map(|panel| tile(panel, props.fonts, props.theme))
        .collect();

    card_grid::view(CardGridProps {
        cards: tiles,
        columns: GRID_COLUMNS,
        spacing: TILE_SPACING,
    })
}

fn tile<'a>(
    panel: Panel,
    fonts: &'a FontsConfig,
    theme: ThemeProps<'a>,
) -> Element<'a, NavigationIntent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette().clone();
    let icon_color = palette.bright_accent;

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::svg_bytes(
        panel.icon,
    )))
    .width(Length::Fixed(TILE_ICON_SIZE))
    .height(Length::Fixed(TILE_ICON_SIZE))
    .style(move |_, _| svg::Style {
        color: Some(icon_color),
    });

    let label = text(panel.title)
        .size(TILE_TEXT_SIZE)
        .font(fonts.heading.font_type)
        .color(palette.bright_foreground);

    let content = container(
        column![icon, label]
            .spacing(TILE_CONTENT_SPACING)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(style::card_style(theme.with_background(palette.overlay)));

    button(content)
        .on_press(NavigationIntent::SelectFromGrid(panel.id))
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(TILE_HEIGHT))
        .style(move |_, status| style::tile_style(&palette, status))
        .into()
}
