use iced::widget::{Column, Row, Space};
use iced::{Element, Length};

/// Props for laying cards out in fixed-width columns.
pub(crate) struct CardGridProps<'a, Message> {
    pub(crate) cards: Vec<Element<'a, Message>>,
    pub(crate) columns: usize,
    pub(crate) spacing: f32,
}

/// Render cards row by row, padding the last row with empty cells.
pub(crate) fn view<'a, Message: 'a>(
    props: CardGridProps<'a, Message>,
) -> Element<'a, Message> {
    let columns = props.columns.max(1);
    let mut grid = Column::new().spacing(props.spacing).width(Length::Fill);
    let mut current = Row::new().spacing(props.spacing).width(Length::Fill);
    let mut filled = 0usize;

    for card in props.cards {
        current = current.push(
            iced::widget::container(card).width(Length::FillPortion(1)),
        );
        filled += 1;

        if filled == columns {
            grid = grid.push(current);
            current = Row::new().spacing(props.spacing).width(Length::Fill);
            filled = 0;
        }
    }

    if filled > 0 {
        for _ in filled..columns {
            current = current.push(Space::new().width(Length::FillPortion(1)));
        }
        grid = grid.push(current);
    }

    grid.into()
}
