use std::collections::HashSet;

use chrono::NaiveDate;

use crate::core::{
    clock::age_on,
    distance::haversine_distance,
    validation::{scoring_inputs, ScoringInputs},
    EngineError,
};
use crate::models::{AgeRange, Gender, Location, LookingFor, Profile, ScoreBreakdown, ScoringWeights};

const MAX_SCORE: f64 = 100.0;

/// Score the compatibility of two profiles
///
/// Scoring formula:
/// total = round(
///     interests   * 0.4 +   # shared interests over the larger set
///     location    * 0.2 +   # linear falloff up to the larger preferred distance
///     age         * 0.2 +   # 100 only if both ages fit the other's range
///     preferences * 0.2     # 50 per side whose lookingFor accepts the other
/// )
///
/// `today` is the reference date for deriving ages.
pub fn calculate_compatibility(
    a: &Profile,
    b: &Profile,
    today: NaiveDate,
    weights: &ScoringWeights,
) -> Result<ScoreBreakdown, EngineError> {
    let a = scoring_inputs(a)?;
    let b = scoring_inputs(b)?;
    Ok(score_inputs(&a, &b, today, weights))
}

/// Score two already validated profiles
pub(crate) fn score_inputs(
    a: &ScoringInputs<'_>,
    b: &ScoringInputs<'_>,
    today: NaiveDate,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let interests = interest_score(a.interests, b.interests);

    let location = location_score(
        &a.location,
        &b.location,
        a.preferences.distance.max(b.preferences.distance),
    );

    let age = age_score(
        age_on(a.date_of_birth, today),
        age_on(b.date_of_birth, today),
        a.preferences.age_range,
        b.preferences.age_range,
    );

    let preferences = preference_score(a.gender, a.looking_for, b.gender, b.looking_for);

    let weighted = interests * weights.interests
        + location * weights.location
        + age * weights.age
        + preferences * weights.preferences;

    // f64::round is half away from zero, i.e. half up for non-negative values
    let total = weighted.clamp(0.0, MAX_SCORE).round() as u8;

    tracing::trace!(
        a = a.user_id,
        b = b.user_id,
        interests,
        location,
        age,
        preferences,
        total,
        "Scored pair"
    );

    ScoreBreakdown {
        interests,
        location,
        age,
        preferences,
        total,
    }
}

/// Interest overlap (0-100)
///
/// Both lists are treated as sets. Two empty sets score 0.
pub fn interest_score(a: &[String], b: &[String]) -> f64 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let denom = a.len().max(b.len());
    if denom == 0 {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    let common = small.iter().filter(|tag| large.contains(*tag)).count();

    (MAX_SCORE * common as f64 / denom as f64).clamp(0.0, MAX_SCORE)
}

/// Distance score (0-100)
///
/// Falls off linearly from 100 at distance 0 to 0 at `max_distance_km`.
/// A zero maximum can never be satisfied and scores 0.
pub fn location_score(a: &Location, b: &Location, max_distance_km: f64) -> f64 {
    if max_distance_km <= 0.0 {
        return 0.0;
    }

    let distance_km = haversine_distance(a, b);
    (MAX_SCORE - MAX_SCORE * distance_km / max_distance_km).clamp(0.0, MAX_SCORE)
}

/// Mutual age gate (0 or 100)
#[inline]
pub fn age_score(age_a: u32, age_b: u32, range_a: AgeRange, range_b: AgeRange) -> f64 {
    if range_a.contains(age_b) && range_b.contains(age_a) {
        MAX_SCORE
    } else {
        0.0
    }
}

/// Gender preference score (0, 50 or 100)
///
/// Each side whose `lookingFor` accepts the other's gender adds 50,
/// independently of the other side.
#[inline]
pub fn preference_score(
    gender_a: Option<Gender>,
    looking_for_a: Option<LookingFor>,
    gender_b: Option<Gender>,
    looking_for_b: Option<LookingFor>,
) -> f64 {
    let half = |looking_for: Option<LookingFor>, gender: Option<Gender>| match (looking_for, gender) {
        (Some(LookingFor::Both), _) => MAX_SCORE / 2.0,
        (Some(looking_for), Some(gender)) if looking_for.accepts(gender) => MAX_SCORE / 2.0,
        _ => 0.0,
    };

    half(looking_for_a, gender_b) + half(looking_for_b, gender_a)
}
