pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{ContentEffect, ContentEvent, ContentIntent};
use self::model::ContentViewModel;
use self::state::ContentState;
use crate::profile::Profile;

/// Content widget owning the inert profile data.
pub(crate) struct ContentWidget {
    state: ContentState,
}

impl ContentWidget {
    pub(crate) fn new(profile: Profile) -> Self {
        Self {
            state: ContentState::new(profile),
        }
    }

    /// Reduce a content intent into effects.
    pub(crate) fn reduce(
        &mut self,
        event: ContentIntent,
    ) -> Task<ContentEvent> {
        reducer::reduce(&self.state, event)
    }

    /// Produce the content view model for a card grid of `columns`.
    pub(crate) fn vm(&self, columns: usize) -> ContentViewModel<'_> {
        ContentViewModel {
            profile: self.state.profile(),
            columns,
        }
    }

    pub(crate) fn profile(&self) -> &Profile {
        self.state.profile()
    }
}
