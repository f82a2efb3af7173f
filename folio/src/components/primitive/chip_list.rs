use iced::widget::{Row, container, text};
use iced::{Element, Length};

use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;

const CHIP_PADDING_X: f32 = 12.0;
const CHIP_PADDING_Y: f32 = 4.0;
const CHIP_SPACING: f32 = 8.0;
const CHIP_TEXT_SIZE: f32 = 13.0;

/// Props for a wrapping list of tag chips.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChipListProps<'a> {
    pub(crate) labels: &'a [String],
    pub(crate) theme: ThemeProps<'a>,
}

/// Render labels as rounded chips that wrap onto new lines.
pub(crate) fn view<'a, Message: 'a>(
    props: ChipListProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();

    let chips = props.labels.iter().map(|label| {
        container(text(label.as_str()).size(CHIP_TEXT_SIZE))
            .padding([CHIP_PADDING_Y, CHIP_PADDING_X])
            .style(style::chip_style(palette))
            .into()
    });

    Row::with_children(chips)
        .spacing(CHIP_SPACING)
        .width(Length::Fill)
        .wrap()
        .vertical_spacing(CHIP_SPACING)
        .into()
}
