pub(crate) mod card;
pub(crate) mod card_grid;
pub(crate) mod chip_list;
pub(crate) mod panel_heading;
