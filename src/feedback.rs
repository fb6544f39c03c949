//! Audio/haptic cue vocabulary
//!
//! The game loop announces *what happened*; a [`FeedbackSink`] decides how (or
//! whether) to play it. Preference gating lives in [`GatedFeedback`] so the
//! simulation never branches on sound/haptics settings.

use crate::settings::Settings;

/// Feedback-worthy moments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Player reversed the orbit
    DirectionChange,
    /// Satellite hit debris
    Collision,
    /// Run ended above the previous best
    NewHighScore,
    /// A run started
    GameStart,
}

/// Haptic intensity a cue maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticKind {
    Medium,
    Heavy,
    Success,
    Light,
}

impl Cue {
    /// Haptic pattern for this cue
    pub fn haptic(&self) -> HapticKind {
        match self {
            Cue::DirectionChange => HapticKind::Medium,
            Cue::Collision => HapticKind::Heavy,
            Cue::NewHighScore => HapticKind::Success,
            Cue::GameStart => HapticKind::Light,
        }
    }
}

/// Plays cues (audio, haptics, or both)
pub trait FeedbackSink {
    fn cue(&mut self, cue: Cue);
}

/// Discards all cues
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFeedback;

impl FeedbackSink for NoFeedback {
    fn cue(&mut self, _cue: Cue) {}
}

/// Logs cues at debug level (headless hosts)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFeedback;

impl FeedbackSink for LogFeedback {
    fn cue(&mut self, cue: Cue) {
        log::debug!("cue {:?} (haptic {:?})", cue, cue.haptic());
    }
}

/// Separate audio and haptic backends behind the player's preferences
pub struct GatedFeedback<A, H> {
    pub audio: A,
    pub haptics: H,
    sound_enabled: bool,
    haptics_enabled: bool,
}

impl<A: FeedbackSink, H: FeedbackSink> GatedFeedback<A, H> {
    pub fn new(audio: A, haptics: H, settings: &Settings) -> Self {
        Self {
            audio,
            haptics,
            sound_enabled: settings.sound_enabled,
            haptics_enabled: settings.haptics_enabled,
        }
    }

    /// Re-read preferences after the settings screen changes them
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.sound_enabled = settings.sound_enabled;
        self.haptics_enabled = settings.haptics_enabled;
    }
}

impl<A: FeedbackSink, H: FeedbackSink> FeedbackSink for GatedFeedback<A, H> {
    fn cue(&mut self, cue: Cue) {
        if self.sound_enabled {
            self.audio.cue(cue);
        }
        if self.haptics_enabled {
            self.haptics.cue(cue);
        }
    }
}
