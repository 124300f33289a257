use serde::{Deserialize, Serialize};
use crate::models::domain::{RankedCandidate, SkippedCandidate};

/// Response for the potential matches lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotentialMatchesResponse {
    pub matches: Vec<RankedCandidate>,
    pub skipped: Vec<SkippedCandidate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
