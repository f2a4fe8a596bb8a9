//! Session State
//!
//! The single source of truth for run progress and the shop economy.
//! Every field is private; the methods below are the only writers, and each
//! one either applies completely or leaves the session untouched.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::game::config::{ConfigError, SessionConfig, UpgradePolicy};
use crate::game::events::SessionEvent;
use crate::game::shop::{self, ShopOffer};
use crate::game::types::{GameStatus, ItemId, OwnedUpgrades};

// =============================================================================
// ERRORS
// =============================================================================

/// Why an operation was refused. The session is unchanged whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Operation not valid from the current status
    #[error("{action} is not valid from {from}")]
    InvalidTransition {
        /// Status when the call was made
        from: GameStatus,
        /// Operation name
        action: &'static str,
    },

    /// Not enough score to pay
    #[error("cost {cost} exceeds balance {balance}")]
    InsufficientFunds {
        /// Requested price
        cost: u32,
        /// Current score
        balance: u32,
    },

    /// One-time upgrade already unlocked
    #[error("{0} is already owned")]
    AlreadyOwned(ItemId),

    /// HEAL refused at full lives
    #[error("lives are already full")]
    HealAtFull,
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Read-only copy of every observable session field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub status: GameStatus,
    pub score: u32,
    pub distance: f64,
    pub level: u32,
    pub speed: f64,
    pub lives: u32,
    pub max_lives: u32,
    pub collected_letters: Vec<usize>,
    pub gems_collected: u32,
    pub has_double_jump: bool,
    pub has_immortality: bool,
    pub is_immortality_active: bool,
    pub run: u32,
    pub current_offers: Vec<ItemId>,
}

// =============================================================================
// SESSION
// =============================================================================

/// Events kept before the oldest are dropped.
pub const MAX_PENDING_EVENTS: usize = 256;

/// Game session: status machine, run progression and economy.
///
/// Every operation queues [`SessionEvent`]s. Callers driving a session
/// directly must drain them with [`Session::take_events`] (once per frame is
/// enough); past [`MAX_PENDING_EVENTS`] the oldest are discarded.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,

    status: GameStatus,

    /// Doubles as shop currency
    score: u32,
    distance: f64,
    level: u32,
    speed: f64,
    lives: u32,
    max_lives: u32,

    /// Indices into the target word
    collected_letters: BTreeSet<usize>,
    gems_collected: u32,

    owned: OwnedUpgrades,
    immortality_active: bool,

    /// Runs started so far (1 during the first run)
    run: u32,
    /// Shop entries during the current run
    shop_visits: u32,
    current_offers: Vec<ShopOffer>,

    pending_events: Vec<SessionEvent>,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_valid_config(SessionConfig::default())
    }
}

impl Session {
    /// Create a session on the menu screen.
    ///
    /// Rejects configs that would break the lives or offer invariants.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: SessionConfig) -> Self {
        let max_lives = config.default_max_lives;
        let speed = config.base_speed;
        Self {
            config,
            status: GameStatus::Menu,
            score: 0,
            distance: 0.0,
            level: 1,
            speed,
            lives: max_lives,
            max_lives,
            collected_letters: BTreeSet::new(),
            gems_collected: 0,
            owned: OwnedUpgrades::default(),
            immortality_active: false,
            run: 0,
            shop_visits: 0,
            current_offers: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    // =========================================================================
    // Status transitions
    // =========================================================================

    /// Start a run from the menu or an ended run.
    pub fn start_game(&mut self) -> Result<(), SessionError> {
        match self.status {
            GameStatus::Menu | GameStatus::GameOver | GameStatus::Victory => {
                self.begin_run();
                Ok(())
            }
            GameStatus::Playing | GameStatus::Shop => Err(self.reject("start_game")),
        }
    }

    /// Start another run after GAME_OVER or VICTORY.
    ///
    /// Same state semantics as [`Session::start_game`].
    pub fn restart_game(&mut self) -> Result<(), SessionError> {
        if !self.status.is_terminal() {
            return Err(self.reject("restart_game"));
        }
        self.begin_run();
        Ok(())
    }

    /// Enter the shop and roll this visit's offers.
    pub fn open_shop(&mut self) -> Result<&[ShopOffer], SessionError> {
        if self.status != GameStatus::Playing {
            return Err(self.reject("open_shop"));
        }

        self.shop_visits += 1;
        self.current_offers = shop::roll_for_visit(self);
        self.push_event(SessionEvent::OffersRolled {
            visit: self.shop_visits,
            offers: self.current_offers.iter().map(|o| o.id).collect(),
        });
        self.set_status(GameStatus::Shop);

        Ok(&self.current_offers)
    }

    /// Leave the shop and resume the run.
    pub fn close_shop(&mut self) -> Result<(), SessionError> {
        if self.status != GameStatus::Shop {
            return Err(self.reject("close_shop"));
        }
        self.current_offers.clear();
        self.set_status(GameStatus::Playing);
        Ok(())
    }

    /// Buy `item` for `cost`.
    ///
    /// Refused without any state change when not in the shop, when the score
    /// does not cover the cost, or when a one-time item is already owned.
    pub fn buy_item(&mut self, item: ItemId, cost: u32) -> Result<(), SessionError> {
        if let Err(err) = shop::validate_purchase(self, item, cost) {
            debug!(%item, cost, error = %err, "purchase refused");
            return Err(err);
        }

        self.score -= cost;

        match item {
            ItemId::DoubleJump => self.owned.double_jump = true,
            ItemId::Immortal => self.owned.immortality = true,
            ItemId::MaxLife => {
                self.max_lives = self.max_lives.saturating_add(1);
                self.lives = self.lives.saturating_add(1).min(self.max_lives);
            }
            ItemId::Heal => {
                // Charged even at full lives under the default policy
                self.lives = self.lives.saturating_add(1).min(self.max_lives);
            }
        }

        if item.is_one_time() {
            self.current_offers.retain(|o| o.id != item);
        }

        info!(%item, cost, score = self.score, "item purchased");
        self.push_event(SessionEvent::ItemPurchased {
            item,
            cost,
            remaining_score: self.score,
        });
        Ok(())
    }

    /// End the run victoriously.
    pub fn reach_victory_condition(&mut self) -> Result<(), SessionError> {
        if self.status != GameStatus::Playing {
            return Err(self.reject("reach_victory_condition"));
        }
        self.set_status(GameStatus::Victory);
        Ok(())
    }

    // =========================================================================
    // Run-loop feed points
    // =========================================================================

    /// Add travelled distance. Ignores non-positive or non-finite deltas.
    pub fn advance_distance(&mut self, delta: f64) -> bool {
        if !self.status.in_run() || !(delta.is_finite() && delta > 0.0) {
            return false;
        }
        self.distance += delta;
        true
    }

    /// Set the current run speed. Must be positive.
    pub fn set_speed(&mut self, speed: f64) -> bool {
        if !self.status.in_run() || !(speed.is_finite() && speed > 0.0) {
            return false;
        }
        self.speed = speed;
        true
    }

    /// Set the current level. Must be at least 1.
    pub fn set_level(&mut self, level: u32) -> bool {
        if !self.status.in_run() || level == 0 {
            return false;
        }
        self.level = level;
        true
    }

    /// Credit score from pickups or distance.
    pub fn add_score(&mut self, points: u32) -> bool {
        if !self.status.in_run() || points == 0 {
            return false;
        }
        self.score = self.score.saturating_add(points);
        true
    }

    /// Collect the letter at `index` of the target word.
    ///
    /// No-op if the index is out of range or already collected.
    pub fn collect_letter(&mut self, index: usize) -> bool {
        if !self.status.in_run() {
            return false;
        }
        let Some(letter) = self.config.target_word.chars().nth(index) else {
            return false;
        };
        if !self.collected_letters.insert(index) {
            return false;
        }

        let word_complete = self.word_complete();
        self.push_event(SessionEvent::LetterCollected {
            index,
            letter,
            word_complete,
        });
        true
    }

    /// Count a gem pickup.
    pub fn collect_gem(&mut self) -> bool {
        if !self.status.in_run() {
            return false;
        }
        self.gems_collected = self.gems_collected.saturating_add(1);
        self.push_event(SessionEvent::GemCollected {
            total: self.gems_collected,
        });
        true
    }

    /// Take a hit.
    ///
    /// Suppressed entirely while immortality is active. Reaching zero lives
    /// ends the run with GAME_OVER.
    pub fn lose_life(&mut self) -> bool {
        if self.status != GameStatus::Playing || self.immortality_active {
            return false;
        }

        self.lives = self.lives.saturating_sub(1);
        self.push_event(SessionEvent::LifeLost { remaining: self.lives });

        if self.lives == 0 {
            self.set_status(GameStatus::GameOver);
        }
        true
    }

    /// Flip the active invincibility. Requires the IMMORTAL upgrade.
    pub fn toggle_immortality_active(&mut self) -> bool {
        if !self.owned.immortality || !self.status.in_run() {
            return false;
        }
        self.immortality_active = !self.immortality_active;
        self.push_event(SessionEvent::ImmortalityToggled {
            active: self.immortality_active,
        });
        true
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current status.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Score / currency balance.
    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Distance travelled this run.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Current level.
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current speed.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Remaining lives.
    #[inline]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Heart slots.
    #[inline]
    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    /// Collected letter indices.
    pub fn collected_letters(&self) -> &BTreeSet<usize> {
        &self.collected_letters
    }

    /// Gems picked up this run.
    #[inline]
    pub fn gems_collected(&self) -> u32 {
        self.gems_collected
    }

    /// Double jump unlocked.
    #[inline]
    pub fn has_double_jump(&self) -> bool {
        self.owned.double_jump
    }

    /// Immortality unlocked.
    #[inline]
    pub fn has_immortality(&self) -> bool {
        self.owned.immortality
    }

    /// Invincibility currently switched on.
    #[inline]
    pub fn is_immortality_active(&self) -> bool {
        self.immortality_active
    }

    /// Permanent upgrade flags.
    #[inline]
    pub fn owned_upgrades(&self) -> OwnedUpgrades {
        self.owned
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Runs started so far.
    #[inline]
    pub fn run_number(&self) -> u32 {
        self.run
    }

    /// Shop entries during the current run.
    #[inline]
    pub fn shop_visits(&self) -> u32 {
        self.shop_visits
    }

    /// Offers of the current shop visit; empty outside the shop.
    pub fn current_offers(&self) -> &[ShopOffer] {
        &self.current_offers
    }

    /// Every letter of the target word has been collected.
    pub fn word_complete(&self) -> bool {
        self.collected_letters.len() == self.config.word_length()
    }

    /// Copy every observable field.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status,
            score: self.score,
            distance: self.distance,
            level: self.level,
            speed: self.speed,
            lives: self.lives,
            max_lives: self.max_lives,
            collected_letters: self.collected_letters.iter().copied().collect(),
            gems_collected: self.gems_collected,
            has_double_jump: self.owned.double_jump,
            has_immortality: self.owned.immortality,
            is_immortality_active: self.immortality_active,
            run: self.run,
            current_offers: self.current_offers.iter().map(|o| o.id).collect(),
        }
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn begin_run(&mut self) {
        if self.config.upgrade_policy == UpgradePolicy::ResetEachRun {
            self.owned = OwnedUpgrades::default();
            self.max_lives = self.config.default_max_lives;
        }

        self.score = 0;
        self.distance = 0.0;
        self.level = 1;
        self.speed = self.config.base_speed;
        self.lives = self.max_lives;
        self.collected_letters.clear();
        self.gems_collected = 0;
        self.immortality_active = false;
        self.shop_visits = 0;
        self.current_offers.clear();
        self.run += 1;

        info!(run = self.run, max_lives = self.max_lives, "run started");
        self.push_event(SessionEvent::RunStarted { run: self.run });
        self.set_status(GameStatus::Playing);
    }

    fn set_status(&mut self, to: GameStatus) {
        let from = self.status;
        self.status = to;
        info!(%from, %to, "status changed");
        self.push_event(SessionEvent::status_changed(from, to));
    }

    fn reject(&self, action: &'static str) -> SessionError {
        debug!(from = %self.status, action, "ignored operation");
        SessionError::InvalidTransition {
            from: self.status,
            action,
        }
    }

    fn push_event(&mut self, event: SessionEvent) {
        if self.pending_events.len() >= MAX_PENDING_EVENTS {
            self.pending_events.remove(0);
        }
        self.pending_events.push(event);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::HealPolicy;

    fn playing() -> Session {
        let mut session = Session::default();
        session.start_game().unwrap();
        session
    }

    fn in_shop_with(score: u32) -> Session {
        let mut session = playing();
        session.add_score(score);
        session.open_shop().unwrap();
        session
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let zero_lives = SessionConfig {
            default_max_lives: 0,
            ..SessionConfig::default()
        };
        assert!(matches!(
            Session::new(zero_lives),
            Err(ConfigError::InvalidValue { key: "GEM_RUNNER_MAX_LIVES", .. })
        ));

        let no_offers = SessionConfig {
            offers_per_visit: 0,
            ..SessionConfig::default()
        };
        assert!(Session::new(no_offers).is_err());

        let session = Session::new(SessionConfig::default()).unwrap();
        assert_eq!(session.max_lives(), 3);
    }

    #[test]
    fn test_undrained_events_are_capped() {
        let mut session = playing();
        session.take_events();
        for _ in 0..(MAX_PENDING_EVENTS + 10) {
            session.collect_gem();
        }

        let events = session.take_events();
        assert_eq!(events.len(), MAX_PENDING_EVENTS);
        // Newest survive
        assert_eq!(
            events.last(),
            Some(&SessionEvent::GemCollected { total: (MAX_PENDING_EVENTS + 10) as u32 })
        );
        assert_eq!(events[0], SessionEvent::GemCollected { total: 11 });
    }

    #[test]
    fn test_new_session_on_menu() {
        let session = Session::default();
        assert_eq!(session.status(), GameStatus::Menu);
        assert_eq!(session.lives(), 3);
        assert_eq!(session.max_lives(), 3);
        assert_eq!(session.level(), 1);
        assert_eq!(session.run_number(), 0);
    }

    #[test]
    fn test_status_machine_happy_path() {
        let mut session = Session::default();
        session.start_game().unwrap();
        assert_eq!(session.status(), GameStatus::Playing);

        session.open_shop().unwrap();
        assert_eq!(session.status(), GameStatus::Shop);

        session.close_shop().unwrap();
        assert_eq!(session.status(), GameStatus::Playing);

        session.reach_victory_condition().unwrap();
        assert_eq!(session.status(), GameStatus::Victory);

        session.restart_game().unwrap();
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.run_number(), 2);
    }

    #[test]
    fn test_misordered_calls_are_rejected() {
        let mut session = Session::default();
        assert!(session.open_shop().is_err());
        assert!(session.close_shop().is_err());
        assert!(session.restart_game().is_err());
        assert!(session.reach_victory_condition().is_err());
        assert!(!session.lose_life());
        assert!(!session.advance_distance(10.0));
        assert_eq!(session.status(), GameStatus::Menu);

        session.start_game().unwrap();
        assert!(matches!(
            session.start_game(),
            Err(SessionError::InvalidTransition { from: GameStatus::Playing, .. })
        ));
        assert!(session.buy_item(ItemId::Heal, 0).is_err());
    }

    #[test]
    fn test_purchase_refused_when_unaffordable() {
        let mut session = in_shop_with(999);
        session.close_shop().unwrap();
        session.lose_life();
        session.open_shop().unwrap();

        let before = session.snapshot();
        let result = session.buy_item(ItemId::Heal, 1000);

        assert_eq!(result, Err(SessionError::InsufficientFunds { cost: 1000, balance: 999 }));
        assert_eq!(session.score(), 999);
        assert_eq!(session.lives(), 2);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_max_life_purchase() {
        let mut session = playing();
        session.add_score(2000);
        session.lose_life();
        session.open_shop().unwrap();

        session.buy_item(ItemId::MaxLife, 1500).unwrap();

        assert_eq!(session.score(), 500);
        assert_eq!(session.max_lives(), 4);
        assert_eq!(session.lives(), 3);
    }

    #[test]
    fn test_heal_capped_and_charged_at_full() {
        let mut session = in_shop_with(2000);
        assert_eq!(session.lives(), session.max_lives());

        session.buy_item(ItemId::Heal, 1000).unwrap();
        assert_eq!(session.score(), 1000);
        assert_eq!(session.lives(), 3);
    }

    #[test]
    fn test_heal_refused_at_full_with_policy() {
        let config = SessionConfig {
            heal_policy: HealPolicy::RefuseAtFull,
            ..SessionConfig::default()
        };
        let mut session = Session::new(config).unwrap();
        session.start_game().unwrap();
        session.add_score(2000);
        session.open_shop().unwrap();

        assert_eq!(session.buy_item(ItemId::Heal, 1000), Err(SessionError::HealAtFull));
        assert_eq!(session.score(), 2000);
    }

    #[test]
    fn test_one_time_item_not_bought_twice() {
        let mut session = in_shop_with(5000);
        session.buy_item(ItemId::DoubleJump, 1000).unwrap();
        assert!(session.has_double_jump());
        assert!(session.current_offers().iter().all(|o| o.id != ItemId::DoubleJump));

        assert_eq!(
            session.buy_item(ItemId::DoubleJump, 1000),
            Err(SessionError::AlreadyOwned(ItemId::DoubleJump))
        );
        assert_eq!(session.score(), 4000);
    }

    #[test]
    fn test_reentered_shop_excludes_bought_upgrade() {
        let mut session = in_shop_with(10_000);
        session.buy_item(ItemId::Immortal, 3000).unwrap();
        session.close_shop().unwrap();

        for _ in 0..20 {
            let offers = session.open_shop().unwrap();
            assert!(offers.iter().all(|o| o.id != ItemId::Immortal));
            assert_eq!(offers.len(), 3);
            session.close_shop().unwrap();
        }
        assert_eq!(session.shop_visits(), 21);
    }

    #[test]
    fn test_close_shop_clears_offers() {
        let mut session = in_shop_with(0);
        assert_eq!(session.current_offers().len(), 3);
        session.close_shop().unwrap();
        assert!(session.current_offers().is_empty());
    }

    #[test]
    fn test_last_life_ends_run() {
        let mut session = playing();
        session.lose_life();
        session.lose_life();
        assert_eq!(session.lives(), 1);

        assert!(session.lose_life());
        assert_eq!(session.lives(), 0);
        assert_eq!(session.status(), GameStatus::GameOver);

        // No further underflow
        assert!(!session.lose_life());
        assert_eq!(session.lives(), 0);
    }

    #[test]
    fn test_immortality_suppresses_damage() {
        let mut session = in_shop_with(3000);
        session.buy_item(ItemId::Immortal, 3000).unwrap();
        session.close_shop().unwrap();
        session.lose_life();
        session.lose_life();
        assert_eq!(session.lives(), 1);

        assert!(session.toggle_immortality_active());
        assert!(!session.lose_life());
        assert_eq!(session.lives(), 1);
        assert_eq!(session.status(), GameStatus::Playing);
    }

    #[test]
    fn test_toggle_requires_ownership() {
        let mut session = playing();
        assert!(!session.toggle_immortality_active());
        assert!(!session.is_immortality_active());
    }

    #[test]
    fn test_restart_preserves_upgrades() {
        let mut session = in_shop_with(4000);
        session.buy_item(ItemId::DoubleJump, 1000).unwrap();
        session.buy_item(ItemId::MaxLife, 1500).unwrap();
        session.close_shop().unwrap();
        session.advance_distance(120.5);
        session.collect_letter(0);
        session.collect_gem();
        while session.status() == GameStatus::Playing {
            session.lose_life();
        }

        session.restart_game().unwrap();

        assert_eq!(session.distance(), 0.0);
        assert!(session.collected_letters().is_empty());
        assert_eq!(session.gems_collected(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.has_double_jump());
        assert_eq!(session.max_lives(), 4);
        assert_eq!(session.lives(), 4);
    }

    #[test]
    fn test_reset_policy_drops_upgrades() {
        let config = SessionConfig {
            upgrade_policy: UpgradePolicy::ResetEachRun,
            ..SessionConfig::default()
        };
        let mut session = Session::new(config).unwrap();
        session.start_game().unwrap();
        session.add_score(5000);
        session.open_shop().unwrap();
        session.buy_item(ItemId::DoubleJump, 1000).unwrap();
        session.buy_item(ItemId::MaxLife, 1500).unwrap();
        session.close_shop().unwrap();
        session.reach_victory_condition().unwrap();

        session.restart_game().unwrap();

        assert!(!session.has_double_jump());
        assert_eq!(session.max_lives(), 3);
        assert_eq!(session.lives(), 3);
    }

    #[test]
    fn test_start_resets_immortality_active() {
        let mut session = in_shop_with(3000);
        session.buy_item(ItemId::Immortal, 3000).unwrap();
        session.close_shop().unwrap();
        session.toggle_immortality_active();
        session.reach_victory_condition().unwrap();

        session.start_game().unwrap();
        assert!(!session.is_immortality_active());
        assert!(session.has_immortality());
    }

    #[test]
    fn test_collect_letter_rules() {
        let mut session = playing();
        assert!(session.collect_letter(2));
        assert!(!session.collect_letter(2));
        assert!(!session.collect_letter(6));
        assert_eq!(session.collected_letters().len(), 1);

        for i in 0..6 {
            session.collect_letter(i);
        }
        assert!(session.word_complete());
    }

    #[test]
    fn test_feed_points_reject_bad_values() {
        let mut session = playing();
        assert!(!session.advance_distance(-1.0));
        assert!(!session.advance_distance(f64::NAN));
        assert!(!session.set_speed(0.0));
        assert!(!session.set_level(0));
        assert!(!session.add_score(0));

        assert!(session.advance_distance(3.5));
        assert!(session.set_speed(45.0));
        assert!(session.set_level(2));
        assert_eq!(session.distance(), 3.5);
        assert_eq!(session.speed(), 45.0);
        assert_eq!(session.level(), 2);
    }

    #[test]
    fn test_progress_continues_in_shop() {
        let mut session = in_shop_with(0);
        assert!(session.advance_distance(1.0));
        assert!(!session.lose_life());
        assert!(session.reach_victory_condition().is_err());
    }

    #[test]
    fn test_events_emitted() {
        let mut session = Session::default();
        session.start_game().unwrap();
        let events = session.take_events();

        assert_eq!(events[0], SessionEvent::RunStarted { run: 1 });
        assert_eq!(events[1], SessionEvent::status_changed(GameStatus::Menu, GameStatus::Playing));
        assert!(session.take_events().is_empty());

        session.open_shop().unwrap();
        let events = session.take_events();
        assert!(matches!(events[0], SessionEvent::OffersRolled { visit: 1, .. }));
    }

    #[test]
    fn test_same_seed_same_shop() {
        let mut a = playing();
        let mut b = playing();
        let offers_a: Vec<ItemId> = a.open_shop().unwrap().iter().map(|o| o.id).collect();
        let offers_b: Vec<ItemId> = b.open_shop().unwrap().iter().map(|o| o.id).collect();
        assert_eq!(offers_a, offers_b);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = playing();
        session.collect_letter(1);
        let json = serde_json::to_string(&session.snapshot()).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session.snapshot());
        assert!(json.contains("\"PLAYING\""));
    }
}
