//! Episode panel toggle controller
//!
//! Tracks which show, if any, has its episode panel on screen. Opening is
//! split in two: [`PanelController::click`] decides and hands out a
//! [`PendingOpen`] ticket, and [`PanelController::resolve`] is called once
//! the episode fetch finishes. A ticket that no longer matches the current
//! state is stale and its result is dropped.

use serde::Serialize;

use crate::types::{MISSING_SHOW_ID, ShowId};

/// Panel state as seen by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "showId", rename_all = "lowercase")]
pub enum PanelState {
    /// No panel on screen
    #[default]
    Closed,
    /// Episodes for this show are being fetched; nothing rendered yet
    Loading(ShowId),
    /// Panel for this show is on screen
    Open(ShowId),
}

/// Ticket for an in-flight open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingOpen {
    show: ShowId,
    ticket: u64,
}

impl PendingOpen {
    pub fn show(&self) -> ShowId {
        self.show
    }
}

/// What the caller has to do after a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Close: remove `remove`'s panel if one is rendered, fetch nothing
    Close { remove: Option<ShowId> },
    /// Open: remove `remove`'s panel, then fetch episodes for `pending`
    Open {
        remove: Option<ShowId>,
        pending: PendingOpen,
    },
}

impl ToggleAction {
    /// Panel that must be taken off screen before anything else
    pub fn panel_to_remove(&self) -> Option<ShowId> {
        match self {
            ToggleAction::Close { remove } | ToggleAction::Open { remove, .. } => *remove,
        }
    }
}

/// Outcome of a finished fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// Still current: render `T` into the panel of `show`
    Render { show: ShowId, content: T },
    /// Fetch failed; the panel stays closed
    Failed { show: ShowId },
    /// A newer click or search superseded this fetch
    Stale { show: ShowId },
}

/// Owner of the single panel slot
#[derive(Debug, Default)]
pub struct PanelController {
    state: PanelState,
    ticket: u64,
}

impl PanelController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Show whose panel is currently rendered
    pub fn open_show(&self) -> Option<ShowId> {
        match self.state {
            PanelState::Open(show) => Some(show),
            _ => None,
        }
    }

    /// Handle a click on the "Episodes" affordance of `show`
    ///
    /// Every click invalidates any ticket handed out before it.
    pub fn click(&mut self, show: ShowId) -> ToggleAction {
        self.ticket += 1;
        let remove = self.open_show();

        let same_show = matches!(
            self.state,
            PanelState::Open(current) | PanelState::Loading(current) if current == show
        );

        if same_show || show == MISSING_SHOW_ID {
            self.state = PanelState::Closed;
            return ToggleAction::Close { remove };
        }

        self.state = PanelState::Loading(show);
        ToggleAction::Open {
            remove,
            pending: PendingOpen {
                show,
                ticket: self.ticket,
            },
        }
    }

    /// Apply the result of the fetch started for `pending`
    ///
    /// `fetched` is `None` when the fetch failed.
    pub fn resolve<T>(&mut self, pending: PendingOpen, fetched: Option<T>) -> Resolution<T> {
        let show = pending.show;
        let current = pending.ticket == self.ticket && self.state == PanelState::Loading(show);
        if !current {
            return Resolution::Stale { show };
        }

        match fetched {
            Some(content) => {
                self.state = PanelState::Open(show);
                Resolution::Render { show, content }
            }
            None => {
                self.state = PanelState::Closed;
                Resolution::Failed { show }
            }
        }
    }

    /// Close everything, e.g. when a new search replaces the show list
    ///
    /// Returns the show whose panel must be removed. In-flight opens
    /// become stale.
    pub fn reset(&mut self) -> Option<ShowId> {
        self.ticket += 1;
        let remove = self.open_show();
        self.state = PanelState::Closed;
        remove
    }
}
