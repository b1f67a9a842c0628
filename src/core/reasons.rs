use crate::core::criteria::CriterionScores;
use crate::models::Priority;

/// Score at or above which a criterion gets the strong phrasing.
const STRONG_THRESHOLD: u8 = 80;
/// Score at or above which a criterion is surfaced at all.
const MODERATE_THRESHOLD: u8 = 60;

/// Derive the justification strings for a match.
///
/// Criteria are surfaced in a fixed order: organisation type, industry,
/// funding range, deadline. Location and purpose are deliberately not
/// surfaced (parity with the dashboard's observed behaviour). The list is
/// never empty: if nothing clears the moderate threshold a single generic
/// fallback is emitted.
pub fn generate_reasons(scores: &CriterionScores) -> Vec<String> {
    let mut reasons = Vec::new();

    push_reason(
        &mut reasons,
        scores.org_type,
        "strong organisation type match",
        "partial organisation type match",
    );
    push_reason(
        &mut reasons,
        scores.industry,
        "excellent industry alignment",
        "moderate industry alignment",
    );
    push_reason(
        &mut reasons,
        scores.funding_range,
        "funding amount fits your preferred range",
        "funding amount close to your preferred range",
    );
    push_reason(
        &mut reasons,
        scores.deadline,
        "comfortable application deadline",
        "approaching application deadline",
    );

    if reasons.is_empty() {
        reasons.push("general compatibility".to_string());
    }

    reasons
}

fn push_reason(reasons: &mut Vec<String>, score: u8, strong: &str, moderate: &str) {
    if score >= STRONG_THRESHOLD {
        reasons.push(strong.to_string());
    } else if score >= MODERATE_THRESHOLD {
        reasons.push(moderate.to_string());
    }
}

/// Bucket an overall score into a priority. Total over 0-100.
pub fn classify_priority(score: u8) -> Priority {
    if score >= 80 {
        Priority::High
    } else if score >= 60 {
        Priority::Medium
    } else {
        Priority::Low
    }
}
