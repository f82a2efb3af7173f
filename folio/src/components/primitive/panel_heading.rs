use iced::widget::text;
use iced::Element;

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

/// Props for the large heading at the top of a content panel.
#[derive(Debug, Clone)]
pub(crate) struct PanelHeadingProps<'a> {
    pub(crate) title: String,
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a, Message: 'a>(
    props: PanelHeadingProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();

    text(props.title)
        .size(props.fonts.heading.title_size)
        .font(props.fonts.heading.font_type)
        .color(palette.bright_foreground)
        .into()
}
