//! # Gem Runner
//!
//! Session state and in-run shop economy for an endless-runner arcade game.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        GEM RUNNER                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  └── rng.rs      - Seedable Xorshift128+ PRNG                │
//! │                                                              │
//! │  game/           - Session logic                             │
//! │  ├── types.rs    - Status, item ids, owned upgrades          │
//! │  ├── config.rs   - Session configuration and policies        │
//! │  ├── state.rs    - Session state machine                     │
//! │  ├── shop.rs     - Offer catalog, sampler, purchases         │
//! │  ├── events.rs   - Events for observers                      │
//! │  ├── input.rs    - Inbound commands and run-loop feed        │
//! │  └── hud.rs      - Read-only presentation projection         │
//! │                                                              │
//! │  audio.rs        - Audio capability (fire-and-forget)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation discipline
//!
//! [`Session`] is the single writer of every field it holds. Observers read
//! through accessors, [`Session::snapshot`] or the drained event queue.
//! Invalid operations leave the session untouched: transition and purchase
//! methods return a [`SessionError`], feed points return `false`.
//!
//! All randomness comes from a seeded [`DeterministicRng`], so a run's shop
//! offers are reproducible from the configured seed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod audio;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::audio::{AudioCue, AudioSystem, GameController, NullAudio};
pub use crate::core::rng::DeterministicRng;
pub use crate::game::config::{ConfigError, HealPolicy, SessionConfig, UpgradePolicy};
pub use crate::game::events::SessionEvent;
pub use crate::game::hud::{HudView, Screen, ShopView};
pub use crate::game::shop::{generate_offers, ShopOffer, CATALOG};
pub use crate::game::state::{Session, SessionError, SessionSnapshot};
pub use crate::game::types::{GameStatus, ItemId, OwnedUpgrades};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base run speed; `speed / BASE_SPEED` is the displayed speed ratio.
pub const BASE_SPEED: f64 = 22.5;

/// Heart slots at the start of the first run.
pub const DEFAULT_MAX_LIVES: u32 = 3;

/// Word whose letters are collected during a run.
pub const TARGET_WORD: &str = "GEMINI";

/// Offers presented per shop visit.
pub const OFFERS_PER_VISIT: usize = 3;
