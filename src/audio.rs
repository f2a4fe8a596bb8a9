//! Audio Capability
//!
//! The session never waits on audio. [`GameController`] only guarantees that
//! `initialize` happens before the first run starts (platforms that gate
//! audio behind a user gesture need the unlock on the start press) and turns
//! session events into fire-and-forget cues.

use tracing::debug;

use crate::game::events::SessionEvent;
use crate::game::input::{apply_command, apply_feed, Command, RunFeed};
use crate::game::state::Session;
use crate::game::types::GameStatus;

/// Sound effects the core can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    /// Gem pickup chime
    Gem,
    /// Letter pickup
    Letter,
    /// Obstacle hit
    Damage,
    /// Shop purchase
    Purchase,
    /// Run lost
    GameOver,
    /// Run won
    Victory,
}

impl AudioCue {
    /// Cue for a session event, if any.
    pub fn for_event(event: &SessionEvent) -> Option<Self> {
        match event {
            SessionEvent::GemCollected { .. } => Some(AudioCue::Gem),
            SessionEvent::LetterCollected { .. } => Some(AudioCue::Letter),
            SessionEvent::LifeLost { .. } => Some(AudioCue::Damage),
            SessionEvent::ItemPurchased { .. } => Some(AudioCue::Purchase),
            SessionEvent::StatusChanged { to: GameStatus::GameOver, .. } => Some(AudioCue::GameOver),
            SessionEvent::StatusChanged { to: GameStatus::Victory, .. } => Some(AudioCue::Victory),
            _ => None,
        }
    }
}

/// Opaque audio subsystem.
pub trait AudioSystem {
    /// Unlock / prepare audio output.
    fn initialize(&mut self);

    /// Play a cue. Must not block.
    fn play(&mut self, cue: AudioCue);
}

/// Audio sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSystem for NullAudio {
    fn initialize(&mut self) {}

    fn play(&mut self, _cue: AudioCue) {}
}

/// Owns a session and the audio subsystem it drives.
pub struct GameController<A: AudioSystem> {
    session: Session,
    audio: A,
    audio_ready: bool,
}

impl<A: AudioSystem> GameController<A> {
    /// Wrap a session.
    pub fn new(session: Session, audio: A) -> Self {
        Self {
            session,
            audio,
            audio_ready: false,
        }
    }

    /// Apply a user command, unlocking audio first if it starts a run.
    pub fn handle(&mut self, command: Command) -> bool {
        if command.starts_run() && !self.audio_ready {
            self.audio.initialize();
            self.audio_ready = true;
            debug!("audio initialized");
        }
        apply_command(&mut self.session, command)
    }

    /// Apply a run-loop event.
    pub fn feed(&mut self, feed: RunFeed) -> bool {
        apply_feed(&mut self.session, feed)
    }

    /// Drain session events, playing a cue for each one that has one.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        let events = self.session.take_events();
        if self.audio_ready {
            for cue in events.iter().filter_map(AudioCue::for_event) {
                self.audio.play(cue);
            }
        }
        events
    }

    /// The wrapped session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The audio subsystem.
    pub fn audio(&self) -> &A {
        &self.audio
    }
}
