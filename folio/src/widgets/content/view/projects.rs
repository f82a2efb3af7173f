use iced::widget::{button, column, row, svg, text};
use iced::{Element, Length, Theme, alignment};

use crate::components::primitive::card::{self, CardProps};
use crate::components::primitive::card_grid::{self, CardGridProps};
use crate::components::primitive::chip_list::{self, ChipListProps};
use crate::components::primitive::panel_heading::{self, PanelHeadingProps};
use crate::profile::Project;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::content::event::ContentIntent;

const GRID_SPACING: f32 = 24.0;
const CARD_SPACING: f32 = 16.0;
const SECTION_SPACING: f32 = 32.0;
const LINK_ICON_SIZE: f32 = 16.0;
const LINK_SPACING: f32 = 8.0;

/// Props for the projects panel.
pub(crate) struct ProjectsProps<'a> {
    pub(crate) title: String,
    pub(crate) projects: &'a [Project],
    pub(crate) columns: usize,
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view(
    props: ProjectsProps<'_>,
) -> Element<'_, ContentIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    let heading = panel_heading::view(PanelHeadingProps {
        title: props.title,
        fonts: props.fonts,
        theme: props.theme,
    });

    let cards = props
        .projects
        .iter()
        .map(|project| {
            let mut body = column![
                text(project.name.as_str())
                    .size(props.fonts.heading.card_size)
                    .font(props.fonts.heading.font_type)
                    .color(palette.bright_foreground),
                text(project.summary.as_str())
                    .size(props.fonts.ui.size)
                    .font(props.fonts.ui.font_type)
                    .color(palette.dim_foreground),
                chip_list::view(ChipListProps {
                    labels: &project.stack,
                    theme: props.theme,
                }),
            ]
            .spacing(CARD_SPACING);

            if let Some(url) = &project.link {
                let link_color = palette.bright_accent;
                let icon =
                    svg::Svg::new(svg::Handle::from_memory(icons::LINK))
                        .width(Length::Fixed(LINK_ICON_SIZE))
                        .height(Length::Fixed(LINK_ICON_SIZE))
                        .style(move |_, _| svg::Style {
                            color: Some(link_color),
                        });

                let link_palette = palette.clone();
                let link = button(
                    row![icon, text(url.as_str())]
                        .spacing(LINK_SPACING)
                        .align_y(alignment::Vertical::Center),
                )
                .on_press(ContentIntent::ProjectLinkPressed {
                    url: url.clone(),
                })
                .padding(0)
                .style(move |_, status| {
                    style::link_style(&link_palette, status)
                });

                body = body.push(link);
            }

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
