//! Shared Game Types
//!
//! Status, shop item identifiers and the permanent upgrade flags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// GAME STATUS
// =============================================================================

/// Which screen the session is on. Exactly one holds at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Title screen, no run active
    #[default]
    Menu,
    /// Run in progress
    Playing,
    /// Shop overlay during a run
    Shop,
    /// Run ended by losing the last life
    GameOver,
    /// Run ended by reaching the goal
    Victory,
}

impl GameStatus {
    /// True while a run is in progress (including the shop overlay).
    #[inline]
    pub fn in_run(self) -> bool {
        matches!(self, GameStatus::Playing | GameStatus::Shop)
    }

    /// True for the two run-ending states.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Victory)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Menu => "MENU",
            GameStatus::Playing => "PLAYING",
            GameStatus::Shop => "SHOP",
            GameStatus::GameOver => "GAME_OVER",
            GameStatus::Victory => "VICTORY",
        };
        f.write_str(name)
    }
}

// =============================================================================
// ITEM ID
// =============================================================================

/// Identifier of a shop item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemId {
    /// Jump again in mid-air. One-time.
    DoubleJump,
    /// Adds a heart slot and heals into it.
    MaxLife,
    /// Restores one life.
    Heal,
    /// Unlocks the activatable invincibility. One-time.
    Immortal,
}

impl ItemId {
    /// Wire name used by the input layer.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemId::DoubleJump => "DOUBLE_JUMP",
            ItemId::MaxLife => "MAX_LIFE",
            ItemId::Heal => "HEAL",
            ItemId::Immortal => "IMMORTAL",
        }
    }

    /// Whether the item can be bought at most once.
    #[inline]
    pub fn is_one_time(self) -> bool {
        matches!(self, ItemId::DoubleJump | ItemId::Immortal)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown item name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown item id: {0}")]
pub struct UnknownItem(pub String);

impl FromStr for ItemId {
    type Err = UnknownItem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DOUBLE_JUMP" => Ok(ItemId::DoubleJump),
            "MAX_LIFE" => Ok(ItemId::MaxLife),
            "HEAL" => Ok(ItemId::Heal),
            "IMMORTAL" => Ok(ItemId::Immortal),
            other => Err(UnknownItem(other.to_string())),
        }
    }
}

// =============================================================================
// OWNED UPGRADES
// =============================================================================

/// Permanent upgrade flags, the only session data the offer sampler reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedUpgrades {
    /// Double jump unlocked
    pub double_jump: bool,
    /// Immortality unlocked
    pub immortality: bool,
}

impl OwnedUpgrades {
    /// True when `item` is a one-time item that is already owned.
    ///
    /// Repeatable items are never "owned".
    pub fn owns(&self, item: ItemId) -> bool {
        match item {
            ItemId::DoubleJump => self.double_jump,
            ItemId::Immortal => self.immortality,
            ItemId::MaxLife | ItemId::Heal => false,
        }
    }
}
