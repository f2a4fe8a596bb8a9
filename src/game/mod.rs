//! Game Logic Module
//!
//! ## Module Structure
//!
//! - `types`: Status, item ids, owned upgrades
//! - `config`: Session configuration and policies
//! - `state`: Session state machine and economy
//! - `shop`: Offer catalog, sampler, purchase validation
//! - `events`: Session events for observers
//! - `input`: Inbound commands and run-loop feed
//! - `hud`: Read-only presentation projection

pub mod config;
pub mod events;
pub mod hud;
pub mod input;
pub mod shop;
pub mod state;
pub mod types;

// Re-export key types
pub use config::SessionConfig;
pub use events::SessionEvent;
pub use input::{apply_command, apply_feed, Command, RunFeed};
pub use shop::{generate_offers, ShopOffer, CATALOG};
pub use state::{Session, SessionError, SessionSnapshot};
pub use types::{GameStatus, ItemId, OwnedUpgrades};
