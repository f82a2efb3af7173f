use crate::profile::Profile;

/// View model for the content widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContentViewModel<'a> {
    pub(crate) profile: &'a Profile,
    pub(crate) columns: usize,
}
