//! Outbound collaborators: the score service and the match-end notification.

use crate::error::SinkError;
use crate::resources::FinalScores;

/// Best-effort destination for final scores.
///
/// Implementations must return promptly; anything slow (network, disk) belongs
/// in a task the implementation spawns itself. Errors are logged by the match
/// and never retried.
pub trait ScoreSink {
    fn submit_score(&mut self, player_name: &str, goals: u32) -> Result<(), SinkError>;
}

/// Sink that drops every submission
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ScoreSink for NullSink {
    fn submit_score(&mut self, _player_name: &str, _goals: u32) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Receives the one-off end-of-match notification
pub trait MatchObserver {
    fn match_ended(&mut self, scores: FinalScores);
}

/// Observer that ignores the notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl MatchObserver for NullObserver {
    fn match_ended(&mut self, _scores: FinalScores) {}
}
