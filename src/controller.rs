//! Session controller - dispatches user actions and recomputes the view
//!
//! Every user-facing event maps to one [`Action`]. Dispatching an action is
//! a state transition followed by a synchronous filter pass; the visible set
//! is always replaced wholesale, never edited in place.

use crate::filter;
use crate::models::{CombineMode, Developer, FilterState, Language};
use crate::search;

/// A user action that mutates the filter state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the text query; the value is normalized before storing
    SetQuery(String),
    /// Flip the inclusion flag for one language tag
    ToggleLanguage(Language),
    /// Select the combine policy
    SetMode(CombineMode),
}

/// Owns the loaded profiles, the filter state, and the visible set
#[derive(Debug)]
pub struct Session {
    devs: Vec<Developer>,
    state: FilterState,
    visible: Vec<Developer>,
}

impl Session {
    /// Create a session over the loaded profiles and run the initial
    /// filter pass with the default state (all tags selected, ANY mode)
    #[must_use]
    pub fn new(devs: Vec<Developer>) -> Self {
        Self::with_state(devs, FilterState::new())
    }

    /// Create a session with a pre-built filter state and run one pass
    #[must_use]
    pub fn with_state(devs: Vec<Developer>, state: FilterState) -> Self {
        let mut session = Self {
            devs,
            state,
            visible: Vec::new(),
        };
        session.recompute();
        session
    }

    /// Apply one action and recompute the visible set
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SetQuery(query) => self.state.query = search::normalize(&query),
            Action::ToggleLanguage(lang) => self.state.toggle(lang),
            Action::SetMode(mode) => self.state.mode = mode,
        }
        self.recompute();
    }

    /// The current filter state
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Profiles matching the current filter state, in load order
    #[must_use]
    pub fn visible(&self) -> &[Developer] {
        &self.visible
    }

    fn recompute(&mut self) {
        self.visible = filter::visible(&self.devs, &self.state);
        log::debug!(
            "filter pass: {} of {} profile(s) visible",
            self.visible.len(),
            self.devs.len()
        );
    }
}
