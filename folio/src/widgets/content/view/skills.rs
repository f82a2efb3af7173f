use iced::widget::{column, text};
use iced::{Element, Theme};

use crate::components::primitive::card::{self, CardProps};
use crate::components::primitive::card_grid::{self, CardGridProps};
use crate::components::primitive::chip_list::{self, ChipListProps};
use crate::components::primitive::panel_heading::{self, PanelHeadingProps};
use crate::profile::SkillGroup;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::content::event::ContentIntent;

const GRID_SPACING: f32 = 24.0;
const CARD_SPACING: f32 = 16.0;
const SECTION_SPACING: f32 = 32.0;

/// Props for the skills panel.
pub(crate) struct SkillsProps<'a> {
    pub(crate) title: String,
    pub(crate) groups: &'a [SkillGroup],
    pub(crate) columns: usize,
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view(
    props: SkillsProps<'_>,
) -> Element<'_, ContentIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    let heading = panel_heading::view(PanelHeadingProps {
        title: props.title,
        fonts: props.fonts,
        theme: props.theme,
    });

    let cards = props
        .groups
        .iter()
        .map(|group| {
            let body = column![
                text(group.title.as_str())
                    .size(props.fonts.heading.card_size)
                    .font(props.fonts.heading.font_type)
                    .color(palette.bright_foreground),
                chip_list::view(ChipListProps {
                    labels: &group.skills,
                    theme: props.theme,
                }),
            ]
            .spacing(CARD_SPACING);

            card::view(CardProps {
                content: body.into(),
                theme: props.theme,
            })
        })
        .collect();

    column![
        heading,
        card_grid::view(CardGridProps {
            cards,
            columns: props.columns,
            spacing: GRID_SPACING,
        }),
    ]
    .spacing(SECTION_SPACING)
    .into()
}
