use iced::widget::{Column, column, row, text};
use iced::{Element, Theme};

use crate::components::primitive::card::{self, CardProps};
use crate::components::primitive::panel_heading::{self, PanelHeadingProps};
use crate::profile::Role;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::content::event::ContentIntent;

const ROLE_SPACING: f32 = 24.0;
const HIGHLIGHT_SPACING: f32 = 12.0;
const BULLET_SPACING: f32 = 12.0;
const SECTION_SPACING: f32 = 32.0;

/// Props for the experience panel.
pub(crate) struct ExperienceProps<'a> {
    pub(crate) title: String,
    pub(crate) roles: &'a [Role],
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view(
    props: ExperienceProps<'_>,
) -> Element<'_, ContentIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    let heading = panel_heading::view(PanelHeadingProps {
        title: props.title,
        fonts: props.fonts,
        theme: props.theme,
    });

    let roles = props.roles.iter().map(|role| {
        let highlights = role.highlights.iter().map(|highlight| {
            row![
                text("\u{2022}").color(palette.bright_accent),
                text(highlight.as_str())
                    .size(props.fonts.ui.size)
                    .font(props.fonts.ui.font_type),
            ]
            .spacing(BULLET_SPACING)
            .into()
        });

        let body = column![
            text(role.title.as_str())
                .size(props.fonts.heading.card_size)
                .font(props.fonts.heading.font_type)
                .color(palette.bright_foreground),
            text(format!("{} | {}", role.organisation, role.period))
                .color(palette.bright_accent),
            Column::with_children(highlights).spacing(HIGHLIGHT_SPACING),
        ]
        .spacing(HIGHLIGHT_SPACING);

        card::view(CardProps {
            content: body.into(),
            theme: props.theme,
        })
    });

    column![heading, Column::with_children(roles).spacing(ROLE_SPACING)]
        .spacing(SECTION_SPACING)
        .into()
}
