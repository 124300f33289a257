use std::collections::HashMap;
use std::future::Future;
use std::path::Path;

use thiserror::Error;

use crate::core::distance::{calculate_bounding_box, haversine_distance, is_within_bounding_box};
use crate::models::Profile;

/// Errors that can occur when loading or reading profiles
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Duplicate profile id: {0}")]
    DuplicateProfile(String),

    #[error("Profile {0} has no location to search around")]
    MissingLocation(String),
}

/// Data-access seam the matching service reads profiles through
pub trait ProfileSource: Send + Sync {
    /// Fetch one profile by id
    fn get_profile(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<Profile>, SourceError>> + Send;

    /// Fetch up to `limit` candidates for the requester, never including
    /// the requester itself
    fn find_candidates(
        &self,
        requester: &Profile,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Profile>, SourceError>> + Send;
}

/// In-memory profile store
///
/// Candidate lookup mirrors a geo `$near` query: profiles within the
/// requester's preferred distance, nearest first.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
    index: HashMap<String, usize>,
}

impl ProfileStore {
    /// Build a store, rejecting duplicate ids
    pub fn from_profiles(profiles: Vec<Profile>) -> Result<Self, SourceError> {
        let mut index = HashMap::with_capacity(profiles.len());
        for (position, profile) in profiles.iter().enumerate() {
            if index.insert(profile.user_id.clone(), position).is_some() {
                return Err(SourceError::DuplicateProfile(profile.user_id.clone()));
            }
        }

        Ok(Self { profiles, index })
    }

    /// Load a store from a JSON array of profiles
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        let profiles: Vec<Profile> = serde_json::from_slice(&bytes)?;

        tracing::debug!(
            "Loaded {} profiles from {}",
            profiles.len(),
            path.as_ref().display()
        );

        Self::from_profiles(profiles)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn nearby(&self, requester: &Profile, limit: usize) -> Result<Vec<Profile>, SourceError> {
        let center = requester
            .location
            .ok_or_else(|| SourceError::MissingLocation(requester.user_id.clone()))?;
        let max_distance_km = requester
            .preferences
            .map(|p| p.distance)
            .unwrap_or(0.0);

        let bbox = calculate_bounding_box(&center, max_distance_km);

        let mut nearby: Vec<(f64, &Profile)> = self
            .profiles
            .iter()
            .filter(|p| p.user_id != requester.user_id)
            // Stage 1: cheap bounding box pre-filter
            .filter_map(|p| p.location.filter(|l| is_within_bounding_box(l, &bbox)).map(|l| (l, p)))
            // Stage 2: exact distance
            .map(|(l, p)| (haversine_distance(&center, &l), p))
            .filter(|(distance_km, _)| *distance_km <= max_distance_km)
            .collect();

        nearby.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        nearby.truncate(limit);

        Ok(nearby.into_iter().map(|(_, p)| p.clone()).collect())
    }
}

impl ProfileSource for ProfileStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, SourceError> {
        Ok(self.index.get(user_id).map(|&i| self.profiles[i].clone()))
    }

    async fn find_candidates(
        &self,
        requester: &Profile,
        limit: usize,
    ) -> Result<Vec<Profile>, SourceError> {
        self.nearby(requester, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeRange, Location, Preferences};

    fn located(id: &str, lat: f64, lon: f64) -> Profile {
        Profile {
            location: Some(Location::new(lat, lon)),
            preferences: Some(Preferences {
                distance: 10.0,
                age_range: AgeRange::new(18, 99),
            }),
            ..Profile::new(id)
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = ProfileStore::from_profiles(vec![located("a", 0.0, 0.0), located("a", 1.0, 1.0)]);
        assert!(matches!(result, Err(SourceError::DuplicateProfile(id)) if id == "a"));
    }

    #[tokio::test]
    async fn test_get_profile() {
        let store = ProfileStore::from_profiles(vec![located("a", 0.0, 0.0)]).unwrap();
        assert_eq!(store.get_profile("a").await.unwrap().unwrap().user_id, "a");
        assert!(store.get_profile("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_candidates_nearest_first_within_distance() {
        let store = ProfileStore::from_profiles(vec![
            located("me", 0.0, 0.0),
            located("far", 0.5, 0.0),      // ~55km
            located("mid", 0.05, 0.0),     // ~5.5km
            located("near", 0.01, 0.0),    // ~1.1km
            Profile::new("nowhere"),
        ])
        .unwrap();

        let requester = store.get_profile("me").await.unwrap().unwrap();
        let candidates = store.find_candidates(&requester, 10).await.unwrap();

        let ids: Vec<_> = candidates.iter().map(|p| p.user_id.as_str()).collect();
        assert_eq!(ids, vec!["near", "mid"]);
    }

    #[tokio::test]
    async fn test_candidates_respect_limit() {
        let profiles = std::iter::once(located("me", 0.0, 0.0))
            .chain((0..20).map(|i| located(&format!("c{i}"), 0.001 * i as f64, 0.0)))
            .collect();
        let store = ProfileStore::from_profiles(profiles).unwrap();

        let requester = store.get_profile("me").await.unwrap().unwrap();
        let candidates = store.find_candidates(&requester, 5).await.unwrap();
        assert_eq!(candidates.len(), 5);
        assert_eq!(candidates[0].user_id, "c0");
    }

    #[tokio::test]
    async fn test_high_latitude_candidate_within_distance_is_kept() {
        let mut requester = located("me", 80.0, 0.0);
        requester.preferences = Some(Preferences {
            distance: 500.0,
            age_range: AgeRange::new(18, 99),
        });
        let candidate = located("north-east", 79.98, 26.07);
        assert!(haversine_distance(&Location::new(80.0, 0.0), &Location::new(79.98, 26.07)) < 500.0);

        let store = ProfileStore::from_profiles(vec![requester.clone(), candidate]).unwrap();
        let candidates = store.find_candidates(&requester, 10).await.unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].user_id, "north-east");
    }

    #[tokio::test]
    async fn test_requester_without_location() {
        let store = ProfileStore::from_profiles(vec![Profile::new("me")]).unwrap();
        let requester = Profile::new("me");
        assert!(matches!(
            store.find_candidates(&requester, 5).await,
            Err(SourceError::MissingLocation(_))
        ));
    }
}
