use chrono::NaiveDate;

use crate::core::{
    scoring::{calculate_compatibility, score_inputs},
    validation::scoring_inputs,
    EngineError,
};
use crate::models::{Profile, RankedCandidate, ScoreBreakdown, ScoringWeights, SkippedCandidate};

/// Result of a lenient ranking
#[derive(Debug, Default)]
pub struct RankOutcome {
    pub ranked: Vec<RankedCandidate>,
    pub skipped: Vec<SkippedCandidate>,
}

/// Compatibility engine
///
/// Holds nothing but the scoring weights, so it is cheap to copy and safe to
/// share between threads. Every call is a pure function of its arguments.
///
/// # Ranking policy
/// 1. Score each candidate against the requester
/// 2. Sort by total score, descending
/// 3. Keep input order among equal totals
///
/// No filtering and no truncation happen here; the data-access layer
/// decides which candidates to offer and how many to show.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score the compatibility of two profiles as of `today`
    pub fn score(
        &self,
        a: &Profile,
        b: &Profile,
        today: NaiveDate,
    ) -> Result<ScoreBreakdown, EngineError> {
        calculate_compatibility(a, b, today, &self.weights)
    }

    /// Rank every candidate against the requester
    ///
    /// The first profile that cannot be scored aborts the ranking with its
    /// error; the requester is checked before any candidate.
    ///
    /// # Arguments
    /// * `requester` - Profile the candidates are ranked for
    /// * `candidates` - Candidates in arbitrary order
    /// * `today` - Reference date for ages
    ///
    /// # Returns
    /// All candidates with their score, best first
    pub fn rank_candidates(
        &self,
        requester: &Profile,
        candidates: Vec<Profile>,
        today: NaiveDate,
    ) -> Result<Vec<RankedCandidate>, EngineError> {
        let requester_inputs = scoring_inputs(requester)?;

        let mut ranked = candidates
            .into_iter()
            .map(|profile| -> Result<RankedCandidate, EngineError> {
                let candidate_inputs = scoring_inputs(&profile)?;
                let score = score_inputs(&requester_inputs, &candidate_inputs, today, &self.weights);
                Ok(RankedCandidate { profile, score })
            })
            .collect::<Result<Vec<_>, _>>()?;

        sort_by_score(&mut ranked);
        Ok(ranked)
    }

    /// Rank the candidates that can be scored and set the rest aside
    ///
    /// An invalid requester still fails the whole call, since no candidate
    /// could be scored against it.
    pub fn rank_valid_candidates(
        &self,
        requester: &Profile,
        candidates: Vec<Profile>,
        today: NaiveDate,
    ) -> Result<RankOutcome, EngineError> {
        let requester_inputs = scoring_inputs(requester)?;
        let mut outcome = RankOutcome::default();

        for profile in candidates {
            let score = match scoring_inputs(&profile) {
                Ok(candidate_inputs) => {
                    score_inputs(&requester_inputs, &candidate_inputs, today, &self.weights)
                }
                Err(e) => {
                    outcome.skipped.push(SkippedCandidate {
                        user_id: profile.user_id.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            outcome.ranked.push(RankedCandidate { profile, score });
        }

        sort_by_score(&mut outcome.ranked);
        Ok(outcome)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Stable sort, best total first
#[inline]
fn sort_by_score(ranked: &mut [RankedCandidate]) {
    ranked.sort_by(|a, b| b.score.total.cmp(&a.score.total));
}
