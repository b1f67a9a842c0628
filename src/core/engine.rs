use chrono::{DateTime, Utc};

use crate::core::criteria::score_criteria;
use crate::core::normalize::{normalize_profile, NormalizedProfile};
use crate::core::reasons::{classify_priority, generate_reasons};
use crate::core::scoring::combine_scores;
use crate::models::{Grant, MatchResult, OrganizationProfile, ScoringWeights, WeightOverrides};

/// Grant-to-profile ranking engine.
///
/// Pure and stateless: the weight vector is fixed at construction and every
/// operation reads only its arguments, so one engine can be shared freely
/// across request handlers.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    weights: ScoringWeights,
}

impl RankingEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Build an engine from a partial weight override; criteria absent from
    /// the override keep their default weight.
    pub fn with_overrides(overrides: &WeightOverrides) -> Self {
        Self {
            weights: ScoringWeights::with_overrides(overrides),
        }
    }

    /// Score one grant against one profile.
    pub fn compute_match(&self, grant: &Grant, profile: &OrganizationProfile) -> MatchResult {
        let normalized = normalize_profile(profile);
        self.compute_match_normalized(grant, &normalized, Utc::now())
    }

    /// Score every grant and sort best-first.
    ///
    /// The profile is normalized once and `now` is snapshotted once, so all
    /// grants in a pass are judged against the same inputs. Ties on score
    /// are broken by ascending grant id to keep the ordering deterministic.
    pub fn rank_matches(
        &self,
        grants: &[Grant],
        profile: &OrganizationProfile,
    ) -> Vec<MatchResult> {
        let normalized = normalize_profile(profile);
        let now = Utc::now();

        let mut results: Vec<MatchResult> = grants
            .iter()
            .map(|grant| self.compute_match_normalized(grant, &normalized, now))
            .collect();

        results.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.grant_id.cmp(&b.grant_id))
        });

        tracing::debug!(
            "Ranked {} grants, best score {}",
            results.len(),
            results.first().map(|r| r.score).unwrap_or(0)
        );

        results
    }

    /// The first `limit` entries of `rank_matches`.
    ///
    /// A limit of 0 yields an empty list; a limit beyond the collection size
    /// yields the full ranking. Never an error.
    pub fn top_matches(
        &self,
        grants: &[Grant],
        profile: &OrganizationProfile,
        limit: usize,
    ) -> Vec<MatchResult> {
        let mut results = self.rank_matches(grants, profile);
        results.truncate(limit);
        results
    }

    fn compute_match_normalized(
        &self,
        grant: &Grant,
        profile: &NormalizedProfile,
        now: DateTime<Utc>,
    ) -> MatchResult {
        let scores = score_criteria(grant, profile, now);
        let score = combine_scores(&scores, &self.weights);

        MatchResult {
            grant_id: grant.id.clone(),
            score,
            reasons: generate_reasons(&scores),
            priority: classify_priority(score),
        }
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
