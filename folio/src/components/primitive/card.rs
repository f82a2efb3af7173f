use iced::widget::container;
use iced::{Element, Length};

use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;

const CARD_PADDING: f32 = 24.0;

/// Props for rendering a raised content card.
pub(crate) struct CardProps<'a, Message> {
    pub(crate) content: Element<'a, Message>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a full-width card around arbitrary content.
pub(crate) fn view<'a, Message: 'a>(
    props: CardProps<'a, Message>,
) -> Element<'a, Message> {
    container(props.content)
        .padding(CARD_PADDING)
        .width(Length::Fill)
        .style(style::card_style(props.theme))
        .into()
}
