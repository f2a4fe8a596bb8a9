//! Session Events
//!
//! Emitted by every state-changing operation so observers (presentation,
//! audio, analytics) can react without polling the whole session.

use serde::{Deserialize, Serialize};

use crate::game::types::{GameStatus, ItemId};

/// Something that changed in the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Status moved from one screen to another
    StatusChanged {
        from: GameStatus,
        to: GameStatus,
    },

    /// A new run began
    RunStarted {
        run: u32,
    },

    /// Offers rolled on shop entry
    OffersRolled {
        visit: u32,
        offers: Vec<ItemId>,
    },

    /// Shop purchase completed
    ItemPurchased {
        item: ItemId,
        cost: u32,
        remaining_score: u32,
    },

    /// Letter tile collected
    LetterCollected {
        index: usize,
        letter: char,
        word_complete: bool,
    },

    /// Gem pickup
    GemCollected {
        total: u32,
    },

    /// A life was lost
    LifeLost {
        remaining: u32,
    },

    /// Immortality switched on or off
    ImmortalityToggled {
        active: bool,
    },
}

impl SessionEvent {
    /// Shorthand for a status transition.
    pub fn status_changed(from: GameStatus, to: GameStatus) -> Self {
        SessionEvent::StatusChanged { from, to }
    }

    /// Whether this event should interrupt whatever the presentation shows.
    pub fn is_screen_change(&self) -> bool {
        matches!(self, SessionEvent::StatusChanged { .. })
    }
}
