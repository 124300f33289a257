// Property tests for the TrueMatch compatibility engine

use chrono::NaiveDate;
use proptest::prelude::*;
use truematch::core::scoring::{calculate_compatibility, interest_score, location_score};
use truematch::models::{AgeRange, Gender, Location, LookingFor, Preferences, Profile, ScoringWeights};
use truematch::Matcher;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female), Just(Gender::Other)]
}

fn looking_for() -> impl Strategy<Value = LookingFor> {
    prop_oneof![
        Just(LookingFor::Male),
        Just(LookingFor::Female),
        Just(LookingFor::Other),
        Just(LookingFor::Both),
    ]
}

fn location() -> impl Strategy<Value = Location> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Location::new(lat, lon))
}

fn interests() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(vec!["hiking", "music", "art", "tennis", "cooking", "travel"]), 0..8)
        .prop_map(|tags| tags.into_iter().map(String::from).collect())
}

prop_compose! {
    fn profile(id: &'static str)(
        interests in interests(),
        location in location(),
        days_old in 18 * 365i64..70 * 365,
        gender in gender(),
        looking_for in looking_for(),
        distance in 0.0f64..500.0,
        min_age in 18u32..60,
        span in 0u32..30,
    ) -> Profile {
        Profile {
            interests: Some(interests),
            location: Some(location),
            date_of_birth: Some(today() - chrono::Duration::days(days_old)),
            gender: Some(gender),
            looking_for: Some(looking_for),
            preferences: Some(Preferences {
                distance,
                age_range: AgeRange::new(min_age, min_age + span),
            }),
            ..Profile::new(id)
        }
    }
}

proptest! {
    #[test]
    fn scores_stay_in_range(a in profile("a"), b in profile("b")) {
        let score = calculate_compatibility(&a, &b, today(), &ScoringWeights::default()).unwrap();
        for sub in [score.interests, score.location, score.age, score.preferences] {
            prop_assert!((0.0..=100.0).contains(&sub), "sub-score {} out of range", sub);
        }
        prop_assert!(score.total <= 100);
    }

    #[test]
    fn interest_location_and_age_are_symmetric(a in profile("a"), b in profile("b")) {
        let ab = calculate_compatibility(&a, &b, today(), &ScoringWeights::default()).unwrap();
        let ba = calculate_compatibility(&b, &a, today(), &ScoringWeights::default()).unwrap();
        prop_assert_eq!(ab.interests, ba.interests);
        prop_assert!((ab.location - ba.location).abs() < 1e-9);
        prop_assert_eq!(ab.age, ba.age);
        prop_assert_eq!(ab.preferences, ba.preferences);
    }

    #[test]
    fn identical_attributes_score_symmetrically(a in profile("a")) {
        let b = Profile { user_id: "b".to_string(), ..a.clone() };
        let ab = calculate_compatibility(&a, &b, today(), &ScoringWeights::default()).unwrap();
        let ba = calculate_compatibility(&b, &a, today(), &ScoringWeights::default()).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn interest_order_does_not_matter(mut a in interests(), b in interests()) {
        let forward = interest_score(&a, &b);
        a.reverse();
        prop_assert_eq!(forward, interest_score(&a, &b));
        prop_assert_eq!(forward, interest_score(&b, &a));
    }

    #[test]
    fn location_never_nan(a in location(), b in location(), max in 0.0f64..1000.0) {
        let score = location_score(&a, &b, max);
        prop_assert!(!score.is_nan());
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn ranking_is_sorted_and_complete(
        requester in profile("requester"),
        candidates in prop::collection::vec(profile("candidate"), 0..20),
    ) {
        let count = candidates.len();
        let ranked = Matcher::default().rank_candidates(&requester, candidates, today()).unwrap();
        prop_assert_eq!(ranked.len(), count);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score.total >= pair[1].score.total);
        }
    }
}
