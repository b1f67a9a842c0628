use crate::core::criteria::CriterionScores;
use crate::models::ScoringWeights;

/// Combine the six raw scores into one overall score.
///
/// `round(sum(score * weight) / 100)`, clamped into 0-100. Weights are not
/// required to sum to 100 here; that contract sits with whoever built the
/// weight vector (the default vector does, and configuration load validates
/// per-weight bounds). A sum above 100 merely makes the clamp reachable.
pub fn combine_scores(scores: &CriterionScores, weights: &ScoringWeights) -> u8 {
    let weighted = scores.org_type as u32 * weights.org_type as u32
        + scores.industry as u32 * weights.industry as u32
        + scores.location as u32 * weights.location as u32
        + scores.funding_range as u32 * weights.funding_range as u32
        + scores.deadline as u32 * weights.deadline as u32
        + scores.purpose as u32 * weights.purpose as u32;

    let overall = (weighted as f64 / 100.0).round() as u32;
    overall.min(100) as u8
}
