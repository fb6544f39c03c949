//! Platform abstraction layer
//!
//! Everything the game loop needs from its host, injected at construction:
//! - Progress storage ([`ScoreStore`])
//! - Audio/haptic feedback ([`FeedbackSink`])
//! - Remote leaderboard submission ([`LeaderboardSink`])

use crate::feedback::{FeedbackSink, NoFeedback};
use crate::persistence::{MemoryStore, ScoreStore};

/// Receives final scores for a remote leaderboard
pub trait LeaderboardSink {
    fn submit(&mut self, score: u32);
}

/// Leaderboard that drops submissions (offline / not signed in)
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineLeaderboard;

impl LeaderboardSink for OfflineLeaderboard {
    fn submit(&mut self, score: u32) {
        log::debug!("Leaderboard offline, dropping score {}", score);
    }
}

/// Host-provided collaborators owned by the game loop
pub struct Collaborators {
    pub store: Box<dyn ScoreStore>,
    pub feedback: Box<dyn FeedbackSink>,
    pub leaderboard: Box<dyn LeaderboardSink>,
}

impl Collaborators {
    pub fn new(
        store: impl ScoreStore + 'static,
        feedback: impl FeedbackSink + 'static,
        leaderboard: impl LeaderboardSink + 'static,
    ) -> Self {
        Self {
            store: Box::new(store),
            feedback: Box::new(feedback),
            leaderboard: Box::new(leaderboard),
        }
    }
}

impl Default for Collaborators {
    /// In-memory store, silent feedback, offline leaderboard
    fn default() -> Self {
        Self::new(MemoryStore::default(), NoFeedback, OfflineLeaderboard)
    }
}
