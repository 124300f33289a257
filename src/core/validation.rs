use chrono::NaiveDate;

use crate::core::{distance::is_valid_coordinate, EngineError};
use crate::models::{Gender, Location, LookingFor, Preferences, Profile};

/// Borrowed view of a profile with every scoring input present and sane
#[derive(Debug, Clone, Copy)]
pub struct ScoringInputs<'a> {
    pub user_id: &'a str,
    pub interests: &'a [String],
    pub location: Location,
    pub date_of_birth: NaiveDate,
    pub gender: Option<Gender>,
    pub looking_for: Option<LookingFor>,
    pub preferences: Preferences,
}

/// Check a profile can be scored and borrow its scoring inputs
///
/// Missing fields are reported before range problems, in the order
/// `interests`, `location`, `dateOfBirth`, `preferences`.
pub fn scoring_inputs(profile: &Profile) -> Result<ScoringInputs<'_>, EngineError> {
    let missing = |field| EngineError::MissingField {
        user_id: profile.user_id.clone(),
        field,
    };

    let interests = profile.interests.as_deref().ok_or_else(|| missing("interests"))?;
    let location = profile.location.ok_or_else(|| missing("location"))?;
    let date_of_birth = profile.date_of_birth.ok_or_else(|| missing("dateOfBirth"))?;
    let preferences = profile.preferences.ok_or_else(|| missing("preferences"))?;

    if !is_valid_coordinate(&location) {
        return Err(EngineError::InvalidCoordinate {
            user_id: profile.user_id.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
        });
    }

    let range = preferences.age_range;
    if range.min > range.max {
        return Err(EngineError::InvalidRange {
            user_id: profile.user_id.clone(),
            reason: format!("ageRange min {} exceeds max {}", range.min, range.max),
        });
    }

    // Zero is allowed here; the location score guards it
    if !preferences.distance.is_finite() || preferences.distance < 0.0 {
        return Err(EngineError::InvalidRange {
            user_id: profile.user_id.clone(),
            reason: format!("preferred distance {} is not a non-negative number", preferences.distance),
        });
    }

    Ok(ScoringInputs {
        user_id: &profile.user_id,
        interests,
        location,
        date_of_birth,
        gender: profile.gender,
        looking_for: profile.looking_for,
        preferences,
    })
}
