// Core algorithm exports
pub mod clock;
pub mod distance;
pub mod error;
pub mod matcher;
pub mod scoring;
pub mod validation;

pub use clock::{age_on, Clock, FixedClock, SystemClock};
pub use distance::{haversine_distance, calculate_bounding_box, is_within_bounding_box, is_valid_coordinate};
pub use error::EngineError;
pub use matcher::{Matcher, RankOutcome};
pub use scoring::{calculate_compatibility, interest_score, location_score, age_score, preference_score};
pub use validation::{scoring_inputs, ScoringInputs};
