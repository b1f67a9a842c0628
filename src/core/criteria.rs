use chrono::{DateTime, Utc};

use crate::core::normalize::{fold, NormalizedProfile, MAX_AMOUNT_SENTINEL};
use crate::models::Grant;

/// Raw per-criterion scores, each in 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionScores {
    pub org_type: u8,
    pub industry: u8,
    pub location: u8,
    pub funding_range: u8,
    pub deadline: u8,
    pub purpose: u8,
}

/// Run all six criterion scorers for one grant/profile pair.
///
/// `now` is passed in rather than read per scorer so every grant in a
/// ranking pass is judged against the same instant.
pub fn score_criteria(
    grant: &Grant,
    profile: &NormalizedProfile,
    now: DateTime<Utc>,
) -> CriterionScores {
    CriterionScores {
        org_type: score_org_type(grant, profile),
        industry: score_industry(grant, profile),
        location: score_location(grant, profile),
        funding_range: score_funding_range(grant, profile),
        deadline: score_deadline(grant, profile, now),
        purpose: score_purpose(grant),
    }
}

/// Substring containment in either direction, the fuzziness used for all
/// categorical label comparisons ("tech" matches "technology" and vice versa).
#[inline]
fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Organisation-type eligibility.
///
/// Tiers: exact eligible-type match 100, overlap with a preferred org type
/// 80, overlap with the profile's own type 60, otherwise 0. An empty
/// eligible set scores 0: a grant that names nobody matches nobody.
pub fn score_org_type(grant: &Grant, profile: &NormalizedProfile) -> u8 {
    let eligible: Vec<String> = grant.eligible_org_types.iter().map(|t| fold(t)).collect();

    if eligible.iter().any(|t| *t == profile.org_type) {
        return 100;
    }

    if eligible
        .iter()
        .any(|t| profile.preferred_org_types.iter().any(|p| overlaps(t, p)))
    {
        return 80;
    }

    if eligible.iter().any(|t| overlaps(t, &profile.org_type)) {
        return 60;
    }

    0
}

/// Industry focus alignment. Unknown on either side is assumed compatible.
pub fn score_industry(grant: &Grant, profile: &NormalizedProfile) -> u8 {
    let (grant_industry, profile_industry) = match (&grant.industry_focus, &profile.industry) {
        (Some(g), Some(p)) => (fold(g), p.as_str()),
        _ => return 50,
    };

    if grant_industry == profile_industry {
        return 100;
    }

    if profile
        .preferred_industries
        .iter()
        .any(|p| overlaps(&grant_industry, p))
    {
        return 85;
    }

    if overlaps(&grant_industry, profile_industry) {
        return 70;
    }

    30
}

/// Location eligibility.
///
/// A grant whose location text signals broad/national eligibility scores 80
/// even when it doesn't mention the profile's region.
pub fn score_location(grant: &Grant, profile: &NormalizedProfile) -> u8 {
    let (grant_location, profile_location) = match (&grant.location, &profile.location) {
        (Some(g), Some(p)) => (fold(g), p.as_str()),
        _ => return 50,
    };

    if grant_location == profile_location {
        return 100;
    }

    if profile
        .preferred_locations
        .iter()
        .any(|p| overlaps(&grant_location, p))
    {
        return 85;
    }

    if is_broad_location(&grant_location) {
        return 80;
    }

    if overlaps(&grant_location, profile_location) {
        return 70;
    }

    30
}

/// Marker text for nationally/unrestricted-eligible grants. Matched against
/// the folded location label; the equality markers are deliberately not
/// substring checks ("any" is inside "Germany").
fn is_broad_location(location: &str) -> bool {
    location.contains("national")
        || location.contains("nationwide")
        || matches!(location, "any" | "all" | "unrestricted")
}

/// Funding amount fit.
///
/// Compares the grant's midpoint against the profile's preferred range,
/// with tolerance bands of 20% and 50% of the range width beyond either
/// bound.
pub fn score_funding_range(grant: &Grant, profile: &NormalizedProfile) -> u8 {
    if grant.amount_min.is_none() && grant.amount_max.is_none() {
        return 50;
    }

    let lower = grant.amount_min.unwrap_or(0.0);
    let upper = grant.amount_max.unwrap_or(MAX_AMOUNT_SENTINEL);
    let midpoint = (lower + upper) / 2.0;

    let width = profile.amount_max - profile.amount_min;

    if midpoint >= profile.amount_min && midpoint <= profile.amount_max {
        100
    } else if within_band(midpoint, profile, width * 0.2) {
        80
    } else if within_band(midpoint, profile, width * 0.5) {
        60
    } else {
        20
    }
}

#[inline]
fn within_band(midpoint: f64, profile: &NormalizedProfile, tolerance: f64) -> bool {
    midpoint >= profile.amount_min - tolerance && midpoint <= profile.amount_max + tolerance
}

/// Deadline urgency against the profile's horizon.
///
/// An already-passed deadline is a hard fail (0), not a degraded tier.
pub fn score_deadline(grant: &Grant, profile: &NormalizedProfile, now: DateTime<Utc>) -> u8 {
    let deadline = match grant.deadline {
        Some(deadline) => deadline,
        None => return 50,
    };

    if deadline < now {
        return 0;
    }

    let days_left = (deadline - now).num_days();
    let horizon = profile.max_deadline_days;

    if days_left <= horizon {
        100
    } else if days_left * 2 <= horizon * 3 {
        80
    } else if days_left <= horizon * 2 {
        60
    } else {
        30
    }
}

/// Funding-purpose placeholder.
///
/// TODO: replace the fixed 70 with a real comparison against the
/// organisation's project descriptions once those are available to the
/// engine; today only the presence of any stated purpose is rewarded.
pub fn score_purpose(grant: &Grant) -> u8 {
    if grant.funding_purposes.is_empty() {
        50
    } else {
        70
    }
}
