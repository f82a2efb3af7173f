use crate::profile::Profile;

/// Profile content shown by the panels.
pub(crate) struct ContentState {
    profile: Profile,
}

impl ContentState {
    pub(crate) fn new(profile: Profile) -> Self {
        Self { profile }
    }

    pub(crate) fn profile(&self) -> &Profile {
        &self.profile
    }
}
