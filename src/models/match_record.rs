use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ScoreBreakdown;

/// Lifecycle of a proposed match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Matched,
    Rejected,
}

/// Match record handed to the external match store
///
/// Built with status `Pending`; only a pending record can be resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: Uuid,
    pub users: [String; 2],
    pub status: MatchStatus,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    #[serde(rename = "matchFactors")]
    pub match_factors: ScoreBreakdown,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl MatchRecord {
    pub fn new(
        user_id: impl Into<String>,
        target_user_id: impl Into<String>,
        factors: ScoreBreakdown,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            users: [user_id.into(), target_user_id.into()],
            status: MatchStatus::Pending,
            compatibility_score: factors.total,
            match_factors: factors,
            created_at,
        }
    }

    /// Accept or reject a pending match
    ///
    /// Returns the rejected transition as `(from, to)` when the move is not
    /// allowed.
    pub fn resolve(&mut self, status: MatchStatus) -> Result<(), (MatchStatus, MatchStatus)> {
        match (self.status, status) {
            (MatchStatus::Pending, MatchStatus::Matched | MatchStatus::Rejected) => {
                self.status = status;
                Ok(())
            }
            (from, to) => Err((from, to)),
        }
    }

    /// Whether the given user takes part in this match
    pub fn involves(&self, user_id: &str) -> bool {
        self.users.iter().any(|u| u == user_id)
    }
}
