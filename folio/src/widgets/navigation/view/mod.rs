pub(crate) mod landing_grid;
pub(crate) mod sidebar;
pub(crate) mod top_bar;
