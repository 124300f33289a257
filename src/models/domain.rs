use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender category stored on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Who a user wants to be matched with
///
/// `Both` is the wildcard and accepts every gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookingFor {
    Male,
    Female,
    Other,
    Both,
}

impl LookingFor {
    /// Whether this preference accepts someone of the given gender
    #[inline]
    pub fn accepts(self, gender: Gender) -> bool {
        matches!(
            (self, gender),
            (LookingFor::Both, _)
                | (LookingFor::Male, Gender::Male)
                | (LookingFor::Female, Gender::Female)
                | (LookingFor::Other, Gender::Other)
        )
    }
}

/// Point on the globe, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Inclusive age window, in whole years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, age: u32) -> bool {
        age >= self.min && age <= self.max
    }
}

/// Stated matching preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Maximum acceptable distance in kilometers
    pub distance: f64,
    #[serde(rename = "ageRange")]
    pub age_range: AgeRange,
}

/// Dating profile as loaded by the data-access layer
///
/// The scoring inputs are optional because stored documents can be
/// incomplete; the engine reports a missing one instead of guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(rename = "lookingFor", default)]
    pub looking_for: Option<LookingFor>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Profile {
    /// Bare profile with only an id, for building up in code
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: None,
            interests: None,
            location: None,
            date_of_birth: None,
            gender: None,
            looking_for: None,
            preferences: None,
            bio: None,
            photos: vec![],
        }
    }
}

/// Per-factor compatibility breakdown
///
/// Sub-scores are in [0, 100]; `total` is their weighted sum rounded to the
/// nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub interests: f64,
    pub location: f64,
    pub age: f64,
    pub preferences: f64,
    pub total: u8,
}

/// Candidate annotated with its score against the requester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub profile: Profile,
    pub score: ScoreBreakdown,
}

/// Candidate left out of a lenient ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedCandidate {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub reason: String,
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Scoring weights
///
/// Must be non-negative and sum to 1.0 so the aggregate stays in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub interests: f64,
    pub location: f64,
    pub age: f64,
    pub preferences: f64,
}

impl ScoringWeights {
    const SUM_TOLERANCE: f64 = 1e-6;

    /// Check the weights form a convex combination
    pub fn is_normalized(&self) -> bool {
        let parts = [self.interests, self.location, self.age, self.preferences];
        let sum: f64 = parts.iter().sum();
        parts.iter().all(|w| w.is_finite() && *w >= 0.0)
            && (sum - 1.0).abs() <= Self::SUM_TOLERANCE
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interests: 0.4,
            location: 0.2,
            age: 0.2,
            preferences: 0.2,
        }
    }
}
