use iced::widget::{Column, column, text};
use iced::{Element, Length, Theme};

use crate::components::primitive::panel_heading::{self, PanelHeadingProps};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::content::event::ContentIntent;

const MAX_TEXT_WIDTH: f32 = 672.0;
const PARAGRAPH_SIZE: f32 = 18.0;
const PARAGRAPH_LINE_HEIGHT: f32 = 1.6;
const PARAGRAPH_SPACING: f32 = 24.0;
const SECTION_SPACING: f32 = 24.0;

/// Props for the about panel.
pub(crate) struct AboutProps<'a> {
    pub(crate) title: String,
    pub(crate) paragraphs: &'a [String],
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view(
    props: AboutProps<'_>,
) -> Element<'_, ContentIntent, Theme, iced::Renderer> {
    let heading = panel_heading::view(PanelHeadingProps {
        title: props.title,
        fonts: props.fonts,
        theme: props.theme,
    });

    let paragraphs = props.paragraphs.iter().map(|paragraph| {
        text(paragraph.as_str())
            .size(PARAGRAPH_SIZE)
            .line_height(PARAGRAPH_LINE_HEIGHT)
            .into()
    });

    column![
        heading,
        Column::with_children(paragraphs).spacing(PARAGRAPH_SPACING),
    ]
    .spacing(SECTION_SPACING)
    .max_width(MAX_TEXT_WIDTH)
    .width(Length::Fill)
    .into()
}
