//! Inbound Commands
//!
//! Maps user commands and run-loop feed events onto session operations.
//! Refused operations are logged and swallowed here, so an out-of-order
//! input can never interrupt gameplay.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game::state::Session;
use crate::game::types::{ItemId, UnknownItem};

/// Commands from the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Start button on the menu
    StartGame,
    /// Retry / play again
    RestartGame,
    /// Buy button on a shop card
    BuyItem { item: ItemId, cost: u32 },
    /// Resume button in the shop
    CloseShop,
    /// Space / tap to switch invincibility
    ToggleImmortality,
}

impl Command {
    /// Build a buy command from the wire item name.
    pub fn buy(item: &str, cost: u32) -> Result<Self, UnknownItem> {
        Ok(Command::BuyItem {
            item: item.parse()?,
            cost,
        })
    }

    /// Whether this command begins a run (audio must be unlocked first).
    pub fn starts_run(&self) -> bool {
        matches!(self, Command::StartGame | Command::RestartGame)
    }
}

/// Events from the physics/run-loop driver.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunFeed {
    /// Distance travelled since the last tick
    Distance { delta: f64 },
    /// New run speed
    Speed { value: f64 },
    /// New level
    Level { value: u32 },
    /// Points earned
    Score { points: u32 },
    /// Letter pickup
    Letter { index: usize },
    /// Gem pickup
    Gem,
    /// Obstacle collision
    Hit,
    /// Shop milestone reached
    Milestone,
    /// Victory condition reached
    Victory,
}

/// Apply a user command. Returns whether the session changed.
pub fn apply_command(session: &mut Session, command: Command) -> bool {
    let result = match command {
        Command::StartGame => session.start_game(),
        Command::RestartGame => session.restart_game(),
        Command::BuyItem { item, cost } => session.buy_item(item, cost),
        Command::CloseShop => session.close_shop(),
        Command::ToggleImmortality => return session.toggle_immortality_active(),
    };

    match result {
        Ok(()) => true,
        Err(err) => {
            debug!(?command, error = %err, "command ignored");
            false
        }
    }
}

/// Apply a run-loop event. Returns whether the session changed.
pub fn apply_feed(session: &mut Session, feed: RunFeed) -> bool {
    match feed {
        RunFeed::Distance { delta } => session.advance_distance(delta),
        RunFeed::Speed { value } => session.set_speed(value),
        RunFeed::Level { value } => session.set_level(value),
        RunFeed::Score { points } => session.add_score(points),
        RunFeed::Letter { index } => session.collect_letter(index),
        RunFeed::Gem => session.collect_gem(),
        RunFeed::Hit => session.lose_life(),
        RunFeed::Milestone => match session.open_shop() {
            Ok(_) => true,
            Err(err) => {
                debug!(error = %err, "milestone ignored");
                false
            }
        },
        RunFeed::Victory => match session.reach_victory_condition() {
            Ok(()) => true,
            Err(err) => {
                debug!(error = %err, "victory ignored");
                false
            }
        },
    }
}
