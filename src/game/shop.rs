//! Shop Offer Engine
//!
//! The fixed offer catalog, the per-visit sampler and purchase validation.
//!
//! Sampling filters out owned one-time upgrades first, then shuffles and
//! truncates, so every remaining offer is equally likely to be shown and no
//! slot is wasted on something the player cannot buy.

use serde::Serialize;
use tracing::trace;

use crate::core::rng::DeterministicRng;
use crate::game::config::HealPolicy;
use crate::game::state::{Session, SessionError};
use crate::game::types::{GameStatus, ItemId, OwnedUpgrades};

/// A purchasable shop item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ShopOffer {
    /// Item identifier
    pub id: ItemId,
    /// Display name
    pub name: &'static str,
    /// Display description
    pub description: &'static str,
    /// Price in score
    pub cost: u32,
    /// Can only be bought once
    pub one_time: bool,
}

/// Every item the shop can ever offer.
pub const CATALOG: [ShopOffer; 4] = [
    ShopOffer {
        id: ItemId::DoubleJump,
        name: "DOUBLE JUMP",
        description: "Jump again in mid-air.",
        cost: 1000,
        one_time: true,
    },
    ShopOffer {
        id: ItemId::MaxLife,
        name: "MAX LIFE UP",
        description: "Adds a heart slot and heals.",
        cost: 1500,
        one_time: false,
    },
    ShopOffer {
        id: ItemId::Heal,
        name: "REPAIR KIT",
        description: "Restores 1 Life point.",
        cost: 1000,
        one_time: false,
    },
    ShopOffer {
        id: ItemId::Immortal,
        name: "IMMORTALITY",
        description: "Active: Press Space or Tap to be invincible.",
        cost: 3000,
        one_time: true,
    },
];

/// Look up a catalog entry.
pub fn offer(item: ItemId) -> &'static ShopOffer {
    match item {
        ItemId::DoubleJump => &CATALOG[0],
        ItemId::MaxLife => &CATALOG[1],
        ItemId::Heal => &CATALOG[2],
        ItemId::Immortal => &CATALOG[3],
    }
}

/// Sample the offers for one shop visit.
///
/// Pure function of its inputs: one-time offers already owned are dropped,
/// the rest is shuffled and the first `count` are returned. Affordability is
/// not considered here.
///
/// # Example
///
/// ```
/// use gem_runner::{generate_offers, DeterministicRng, OwnedUpgrades, CATALOG};
///
/// let mut rng = DeterministicRng::new(1);
/// let offers = generate_offers(&CATALOG, OwnedUpgrades::default(), 3, &mut rng);
/// assert_eq!(offers.len(), 3);
/// ```
pub fn generate_offers(
    catalog: &[ShopOffer],
    owned: OwnedUpgrades,
    count: usize,
    rng: &mut DeterministicRng,
) -> Vec<ShopOffer> {
    let mut pool: Vec<ShopOffer> = catalog
        .iter()
        .filter(|offer| !(offer.one_time && owned.owns(offer.id)))
        .copied()
        .collect();

    rng.shuffle(&mut pool);
    pool.truncate(count);

    trace!(
        offered = ?pool.iter().map(|o| o.id).collect::<Vec<_>>(),
        "sampled shop offers"
    );
    pool
}

/// Roll offers for the session's current shop visit.
///
/// The generator is derived from the session seed, run and visit counters.
pub(crate) fn roll_for_visit(session: &Session) -> Vec<ShopOffer> {
    let config = session.config();
    let mut rng =
        DeterministicRng::for_shop_visit(config.seed, session.run_number(), session.shop_visits());
    generate_offers(&CATALOG, session.owned_upgrades(), config.offers_per_visit, &mut rng)
}

/// Check whether `item` may be bought for `cost` right now.
///
/// Validation never mutates; [`Session::buy_item`] applies the effect only
/// after this returns `Ok`.
pub fn validate_purchase(session: &Session, item: ItemId, cost: u32) -> Result<(), SessionError> {
    if session.status() != GameStatus::Shop {
        return Err(SessionError::InvalidTransition {
            from: session.status(),
            action: "buy_item",
        });
    }

    if session.owned_upgrades().owns(item) {
        return Err(SessionError::AlreadyOwned(item));
    }

    if cost > session.score() {
        return Err(SessionError::InsufficientFunds {
            cost,
            balance: session.score(),
        });
    }

    if item == ItemId::Heal
        && session.config().heal_policy == HealPolicy::RefuseAtFull
        && session.lives() >= session.max_lives()
    {
        return Err(SessionError::HealAtFull);
    }

    Ok(())
}
