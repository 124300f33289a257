use thiserror::Error;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{Clock, EngineError, Matcher};
use crate::models::{
    CreateMatchRequest, FindMatchesRequest, MatchRecord, MatchStatus, PotentialMatchesResponse, Profile,
};
use crate::services::store::{ProfileSource, SourceError};

/// Errors surfaced by the matching service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Profile source error: {0}")]
    Source(#[from] SourceError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Cannot move match from {from:?} to {to:?}")]
    InvalidTransition { from: MatchStatus, to: MatchStatus },
}

/// Matching service
///
/// Glue between a profile source and the compatibility engine. It owns no
/// storage: match records are returned for the caller to persist.
pub struct MatchingService<S, C> {
    source: S,
    clock: C,
    matcher: Matcher,
    settings: MatchingSettings,
}

impl<S: ProfileSource, C: Clock> MatchingService<S, C> {
    pub fn new(source: S, clock: C, matcher: Matcher, settings: MatchingSettings) -> Self {
        Self {
            source,
            clock,
            matcher,
            settings,
        }
    }

    /// Find potential matches for a user
    ///
    /// Candidates that cannot be scored are skipped and reported in the
    /// response rather than failing the lookup.
    pub async fn find_potential_matches(
        &self,
        request: &FindMatchesRequest,
    ) -> Result<PotentialMatchesResponse, ServiceError> {
        request.validate()?;

        let user_id = &request.user_id;
        let limit = request
            .limit
            .unwrap_or(self.settings.default_limit)
            .min(self.settings.max_limit) as usize;

        tracing::info!("Finding matches for user: {}, limit: {}", user_id, limit);

        let requester = self.require_profile(user_id).await?;
        let candidates = self.source.find_candidates(&requester, limit).await?;
        let total_candidates = candidates.len();

        tracing::debug!("Found {} candidates for {}", total_candidates, user_id);

        let outcome = self
            .matcher
            .rank_valid_candidates(&requester, candidates, self.clock.today())?;

        for skipped in &outcome.skipped {
            tracing::warn!("Skipping candidate {} for {}: {}", skipped.user_id, user_id, skipped.reason);
        }

        tracing::info!(
            "Returning {} matches for user {} (from {} candidates)",
            outcome.ranked.len(),
            user_id,
            total_candidates
        );

        Ok(PotentialMatchesResponse {
            matches: outcome.ranked,
            skipped: outcome.skipped,
            total_candidates,
        })
    }

    /// Score two users and build a pending match record
    pub async fn create_match(
        &self,
        request: &CreateMatchRequest,
    ) -> Result<MatchRecord, ServiceError> {
        request.validate()?;

        if request.user_id == request.target_user_id {
            return Err(ServiceError::InvalidRequest(
                "Cannot create a match with yourself".to_string(),
            ));
        }

        let user = self.require_profile(&request.user_id).await?;
        let target = self.require_profile(&request.target_user_id).await?;

        let factors = self.matcher.score(&user, &target, self.clock.today())?;
        let record = MatchRecord::new(&user.user_id, &target.user_id, factors, self.clock.now());

        tracing::info!(
            "Created match {} between {} and {} (score {})",
            record.id,
            user.user_id,
            target.user_id,
            record.compatibility_score
        );

        Ok(record)
    }

    /// Accept or reject a pending match on behalf of one of its users
    pub fn resolve_match(
        &self,
        record: &mut MatchRecord,
        user_id: &str,
        status: MatchStatus,
    ) -> Result<(), ServiceError> {
        if !record.involves(user_id) {
            return Err(ServiceError::NotFound(format!("match {} for user {}", record.id, user_id)));
        }

        record
            .resolve(status)
            .map_err(|(from, to)| ServiceError::InvalidTransition { from, to })?;

        tracing::debug!("Match {} is now {:?}", record.id, record.status);
        Ok(())
    }

    async fn require_profile(&self, user_id: &str) -> Result<Profile, ServiceError> {
        self.source
            .get_profile(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(user_id.to_string()))
    }
}
