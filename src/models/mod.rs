// Model exports
pub mod domain;
pub mod match_record;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeRange, BoundingBox, Gender, Location, LookingFor, Preferences, Profile, RankedCandidate,
    ScoreBreakdown, ScoringWeights, SkippedCandidate,
};
pub use match_record::{MatchRecord, MatchStatus};
pub use requests::{CreateMatchRequest, FindMatchesRequest};
pub use responses::{ErrorResponse, PotentialMatchesResponse};
