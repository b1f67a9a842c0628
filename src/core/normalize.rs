use crate::models::OrganizationProfile;

/// Sentinel for an unbounded funding amount.
///
/// Used wherever an upper bound is missing so midpoint arithmetic stays
/// total; one billion sits comfortably above any grant in the catalogue.
pub const MAX_AMOUNT_SENTINEL: f64 = 1_000_000_000.0;

/// A profile pre-folded for comparison.
///
/// All labels are trimmed and lowercased once per ranking pass so the
/// per-criterion scorers can compare without re-allocating, and the
/// optional amount bounds are replaced with sentinel defaults.
#[derive(Debug, Clone)]
pub struct NormalizedProfile {
    pub org_type: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub preferred_industries: Vec<String>,
    pub preferred_locations: Vec<String>,
    pub preferred_org_types: Vec<String>,
    pub amount_min: f64,
    pub amount_max: f64,
    pub max_deadline_days: i64,
}

/// Fold a raw profile into comparison-ready form.
pub fn normalize_profile(profile: &OrganizationProfile) -> NormalizedProfile {
    NormalizedProfile {
        org_type: fold(&profile.org_type),
        industry: profile.industry.as_deref().map(fold),
        location: profile.location.as_deref().map(fold),
        preferred_industries: fold_all(&profile.preferred_industries),
        preferred_locations: fold_all(&profile.preferred_locations),
        preferred_org_types: fold_all(&profile.preferred_org_types),
        amount_min: profile.preferred_amount_min.unwrap_or(0.0),
        amount_max: profile.preferred_amount_max.unwrap_or(MAX_AMOUNT_SENTINEL),
        max_deadline_days: profile.max_deadline_days,
    }
}

#[inline]
pub fn fold(label: &str) -> String {
    label.trim().to_lowercase()
}

fn fold_all(labels: &[String]) -> Vec<String> {
    labels.iter().map(|label| fold(label)).collect()
}
