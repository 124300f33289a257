//! TrueMatch - compatibility scoring for the TrueMatch dating app
//!
//! This library provides the matching core used by the TrueMatch backend.
//! It scores pairs of profiles on shared interests, distance, mutual age
//! ranges and gender preferences, and ranks candidate sets by that score.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Clock, EngineError, FixedClock, Matcher, SystemClock, distance::haversine_distance};
pub use crate::models::{Profile, ScoreBreakdown, RankedCandidate, ScoringWeights, MatchRecord, MatchStatus};
pub use crate::services::{MatchingService, ProfileSource, ProfileStore, ServiceError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let distance = haversine_distance(&Location::new(0.0, 0.0), &Location::new(0.0, 0.0));
        assert_eq!(distance, 0.0);
        assert!(Matcher::default().weights().is_normalized());
    }
}
