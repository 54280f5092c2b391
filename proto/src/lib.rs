//! Wire types for the score service
//!
//! JSON bodies exchanged with the leaderboard REST API

use serde::{Deserialize, Serialize};

/// Default endpoint of the score service
pub const SCORES_URL: &str = "http://localhost:8080/api/scores";

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /api/scores`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub player_name: String,
    pub goals: u32,
}

impl ScoreSubmission {
    pub fn new(player_name: impl Into<String>, goals: u32) -> Self {
        Self {
            player_name: player_name.into(),
            goals,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// A stored score as returned by `GET /api/scores` and `GET /api/scores/top`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub id: u64,
    pub player_name: String,
    pub goals: u32,
    /// ISO-8601 local timestamp, passed through verbatim
    #[serde(default)]
    pub played_at: Option<String>,
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl ScoreSubmission {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ScoreRecord {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Decode a leaderboard listing
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Endpoint for the top-five leaderboard under a scores base URL
pub fn top_scores_url(base: &str) -> String {
    format!("{}/top", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_uses_camel_case() {
        let msg = ScoreSubmission::new("Player 1", 4);
        let json = msg.to_json().expect("Serialization should succeed");
        assert_eq!(json, r#"{"playerName":"Player 1","goals":4}"#);
    }

    #[test]
    fn test_submission_escapes_names() {
        let msg = ScoreSubmission::new(r#"Bob "the" Keeper"#, 0);
        let json = msg.to_json().expect("Serialization should succeed");
        let decoded = ScoreSubmission::from_json(&json).expect("Deserialization should succeed");
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_leaderboard_listing() {
        let json = r#"[
            {"id": 7, "playerName": "Player 2", "goals": 5, "playedAt": "2024-05-01T18:22:03"},
            {"id": 3, "playerName": "Player 1", "goals": 4}
        ]"#;
        let records = ScoreRecord::list_from_json(json).expect("Deserialization should succeed");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].player_name, "Player 2");
        assert_eq!(records[0].played_at.as_deref(), Some("2024-05-01T18:22:03"));
        assert_eq!(records[1].played_at, None);
    }

    #[test]
    fn test_top_scores_url() {
        assert_eq!(top_scores_url(SCORES_URL), "http://localhost:8080/api/scores/top");
        assert_eq!(top_scores_url("/api/scores/"), "/api/scores/top");
    }
}
