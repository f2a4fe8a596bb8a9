//! Presentation Projection
//!
//! Read-only views the presentation layer renders as-is. Screen choice is a
//! pure function of the session status; no business logic lives here.

use serde::Serialize;

use crate::game::shop::ShopOffer;
use crate::game::state::Session;
use crate::game::types::GameStatus;

/// What to draw, selected by status.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Screen {
    /// Title screen with the start button
    Menu,
    /// In-run overlay
    Hud(HudView),
    /// Shop overlay
    Shop(ShopView),
    /// Run lost
    GameOver {
        /// Whole distance units travelled
        distance: u64,
        /// Final score
        score: u32,
    },
    /// Run won
    Victory {
        /// Final score
        score: u32,
    },
}

impl Screen {
    /// Build the screen for the session's current status.
    pub fn for_session(session: &Session) -> Self {
        match session.status() {
            GameStatus::Menu => Screen::Menu,
            GameStatus::Playing => Screen::Hud(HudView::from_session(session)),
            GameStatus::Shop => Screen::Shop(ShopView::from_session(session)),
            GameStatus::GameOver => Screen::GameOver {
                distance: session.distance().floor() as u64,
                score: session.score(),
            },
            GameStatus::Victory => Screen::Victory {
                score: session.score(),
            },
        }
    }
}

/// One tile of the target word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LetterTile {
    pub letter: char,
    pub collected: bool,
}

/// In-run HUD widgets.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HudView {
    pub score: u32,
    /// One entry per heart slot; `true` is a filled heart
    pub hearts: Vec<bool>,
    pub level: u32,
    /// Whole distance units travelled (floored)
    pub distance: u64,
    pub letters: Vec<LetterTile>,
    /// `speed / base_speed` as a rounded percentage
    pub speed_percent: u32,
    pub invincible: bool,
}

impl HudView {
    /// Project the HUD from a session.
    pub fn from_session(session: &Session) -> Self {
        let hearts = (0..session.max_lives()).map(|i| i < session.lives()).collect();

        let letters = session
            .config()
            .target_word
            .chars()
            .enumerate()
            .map(|(i, letter)| LetterTile {
                letter,
                collected: session.collected_letters().contains(&i),
            })
            .collect();

        Self {
            score: session.score(),
            hearts,
            level: session.level(),
            distance: session.distance().floor() as u64,
            letters,
            speed_percent: speed_percent(session.speed(), session.config().base_speed),
            invincible: session.is_immortality_active(),
        }
    }
}

/// A shop card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ShopEntry {
    pub offer: ShopOffer,
    /// Advisory only; the purchase itself re-checks the balance
    pub affordable: bool,
}

/// Shop overlay contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShopView {
    pub credits: u32,
    pub entries: Vec<ShopEntry>,
}

impl ShopView {
    /// Project the current shop visit from a session.
    pub fn from_session(session: &Session) -> Self {
        let credits = session.score();
        let entries = session
            .current_offers()
            .iter()
            .map(|offer| ShopEntry {
                offer: *offer,
                affordable: credits >= offer.cost,
            })
            .collect();
        Self { credits, entries }
    }
}

fn speed_percent(speed: f64, base_speed: f64) -> u32 {
    if base_speed <= 0.0 {
        return 0;
    }
    ((speed / base_speed) * 100.0).round().max(0.0) as u32
}
