pub(crate) mod content;
pub(crate) mod navigation;
