use iced::widget::{Column, column, text};
use iced::{Element, Theme};

use crate::components::primitive::card::{self, CardProps};
use crate::components::primitive::panel_heading::{self, PanelHeadingProps};
use crate::profile::Degree;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::content::event::ContentIntent;

const CARD_SPACING: f32 = 12.0;
const DEGREE_SPACING: f32 = 24.0;
const SECTION_SPACING: f32 = 32.0;

/// Props for the education panel.
pub(crate) struct EducationProps<'a> {
    pub(crate) title: String,
    pub(crate) degrees: &'a [Degree],
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view(
    props: EducationProps<'_>,
) -> Element<'_, ContentIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    let heading = panel_heading::view(PanelHeadingProps {
        title: props.title,
        fonts: props.fonts,
        theme: props.theme,
    });

    let degrees = props.degrees.iter().map(|degree| {
        let body = column![
            text(degree.degree.as_str())
                .size(props.fonts.heading.card_size)
                .font(props.fonts.heading.font_type)
                .color(palette.bright_foreground),
            text(format!("{} | {}", degree.institution, degree.period))
                .color(palette.bright_accent),
            text(degree.summary.as_str()).color(palette.dim_foreground),
        ]
        .spacing(CARD_SPACING);

        card::view(CardProps {
            content: body.into(),
            theme: props.theme,
        })
    });

    column![heading, Column::with_children(degrees).spacing(DEGREE_SPACING)]
        .spacing(SECTION_SPACING)
        .into()
}
