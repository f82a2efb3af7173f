use iced::widget::{button, container, scrollable};
use iced::{Background, Border};

use super::theme::{IcedColorPalette, ThemeProps};

const CARD_RADIUS: f32 = 8.0;
const CHIP_RADIUS: f32 = 999.0;
const NAV_ITEM_RADIUS: f32 = 8.0;
const CHIP_BACKGROUND_ALPHA: f32 = 0.12;
const HOVER_ALPHA: f32 = 0.1;
const SCRIM_ALPHA: f32 = 0.55;
const TILE_BORDER_WIDTH: f32 = 1.0;

pub(crate) fn thin_scroll_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;

        let mut scroller_color = match style.vertical_rail.scroller.background {
            Background::Color(color) => color,
            _ => palette.dim_foreground,
        };
        scroller_color.a = (scroller_color.a * 0.7).min(1.0);
        style.vertical_rail.scroller.background =
            Background::Color(scroller_color);

        style
    }
}

/// Style for a sidebar navigation entry.
pub(crate) fn nav_item_style(
    palette: &IcedColorPalette,
    is_active: bool,
    status: button::Status,
) -> button::Style {
    let is_hovered =
        matches!(status, button::Status::Hovered | button::Status::Pressed);
    let (background, text_color): (Option<Background>, iced::Color) =
        if is_active {
            (Some(palette.accent.into()), palette.bright_foreground)
        } else if is_hovered {
            let mut color = palette.bright_foreground;
            color.a = HOVER_ALPHA;
            (Some(color.into()), palette.foreground)
        } else {
            (None, palette.foreground)
        };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: NAV_ITEM_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Style for a text link in the sidebar footer or project cards.
pub(crate) fn link_style(
    palette: &IcedColorPalette,
    status: button::Status,
) -> button::Style {
    let text_color = if matches!(status, button::Status::Hovered) {
        palette.bright_accent
    } else {
        palette.foreground
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..Default::default()
    }
}

/// Style for a landing grid tile; the card underneath draws the surface.
pub(crate) fn tile_style(
    palette: &IcedColorPalette,
    status: button::Status,
) -> button::Style {
    let border_color =
        if matches!(status, button::Status::Hovered | button::Status::Pressed)
        {
            palette.accent
        } else {
            iced::Color::TRANSPARENT
        };

    button::Style {
        background: None,
        text_color: palette.foreground,
        border: Border {
            width: TILE_BORDER_WIDTH,
            color: border_color,
            radius: CARD_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Raised surface used for content cards and landing tiles.
pub(crate) fn card_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    let background = theme
        .overrides
        .and_then(|o| o.background)
        .unwrap_or(palette.surface);

    move |_theme: &iced::Theme| container::Style {
        background: Some(background.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 0.0,
            color: palette.overlay,
            radius: CARD_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Rounded accent pill used for skill and stack tags.
pub(crate) fn chip_style(
    palette: &IcedColorPalette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let mut background = palette.accent;
    background.a = CHIP_BACKGROUND_ALPHA;
    let text_color = palette.bright_accent;

    move |_theme: &iced::Theme| container::Style {
        background: Some(background.into()),
        text_color: Some(text_color),
        border: Border {
            radius: CHIP_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the open mobile menu.
pub(crate) fn scrim_style(
    palette: &IcedColorPalette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let mut background = palette.background;
    background.a = SCRIM_ALPHA;

    move |_theme: &iced::Theme| container::Style {
        background: Some(background.into()),
        ..Default::default()
    }
}
