use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A funding opportunity as stored by the grants dashboard.
///
/// All attributes except the identifier are optional in the upstream data;
/// the scorers define explicit neutral fallbacks for anything missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grant {
    pub id: String,
    #[serde(rename = "eligibleOrgTypes", default)]
    pub eligible_org_types: Vec<String>,
    #[serde(rename = "industryFocus", default)]
    pub industry_focus: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "amountMin", default)]
    pub amount_min: Option<f64>,
    #[serde(rename = "amountMax", default)]
    pub amount_max: Option<f64>,
    #[serde(default, deserialize_with = "lenient_deadline")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(rename = "fundingPurposes", default)]
    pub funding_purposes: Vec<String>,
}

/// An applicant organisation's identity and matching preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationProfile {
    #[serde(rename = "orgType")]
    pub org_type: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "preferredIndustries", default)]
    pub preferred_industries: Vec<String>,
    #[serde(rename = "preferredLocations", default)]
    pub preferred_locations: Vec<String>,
    #[serde(rename = "preferredOrgTypes", default)]
    pub preferred_org_types: Vec<String>,
    #[serde(rename = "preferredAmountMin", default)]
    pub preferred_amount_min: Option<f64>,
    #[serde(rename = "preferredAmountMax", default)]
    pub preferred_amount_max: Option<f64>,
    #[serde(rename = "maxDeadlineDays", default = "default_max_deadline_days")]
    pub max_deadline_days: i64,
}

fn default_max_deadline_days() -> i64 {
    30
}

/// Priority bucket derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Result of scoring one grant against one profile.
///
/// Ephemeral: built per request, never persisted. `reasons` is never empty;
/// when no criterion clears the explanation threshold a generic fallback
/// reason is emitted instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "grantId")]
    pub grant_id: String,
    pub score: u8,
    pub reasons: Vec<String>,
    pub priority: Priority,
}

/// Percentage weights allocated across the six criteria.
///
/// The aggregator does not require the weights to sum to 100; a caller
/// constructing a custom vector is responsible for that. Per-weight bounds
/// are validated once at configuration load, not here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub org_type: u8,
    pub industry: u8,
    pub location: u8,
    pub funding_range: u8,
    pub deadline: u8,
    pub purpose: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            org_type: 25,
            industry: 20,
            location: 15,
            funding_range: 20,
            deadline: 10,
            purpose: 10,
        }
    }
}

impl ScoringWeights {
    /// Merge a partial override over the defaults. Criteria absent from the
    /// override keep their default weight.
    pub fn with_overrides(overrides: &WeightOverrides) -> Self {
        let defaults = Self::default();
        Self {
            org_type: overrides.org_type.unwrap_or(defaults.org_type),
            industry: overrides.industry.unwrap_or(defaults.industry),
            location: overrides.location.unwrap_or(defaults.location),
            funding_range: overrides.funding_range.unwrap_or(defaults.funding_range),
            deadline: overrides.deadline.unwrap_or(defaults.deadline),
            purpose: overrides.purpose.unwrap_or(defaults.purpose),
        }
    }
}

/// Partial weight override supplied by a caller.
///
/// Recognized keys are exactly: organisationType, industryFocus, location,
/// fundingRange, deadline, purpose.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightOverrides {
    #[serde(rename = "organisationType", default)]
    pub org_type: Option<u8>,
    #[serde(rename = "industryFocus", default)]
    pub industry: Option<u8>,
    #[serde(default)]
    pub location: Option<u8>,
    #[serde(rename = "fundingRange", default)]
    pub funding_range: Option<u8>,
    #[serde(default)]
    pub deadline: Option<u8>,
    #[serde(default)]
    pub purpose: Option<u8>,
}

/// Deserialize a grant deadline, treating malformed dates as missing.
///
/// Date validation belongs to the ingestion layer; by the time a grant
/// reaches the engine an unparseable deadline is downgraded to "no deadline"
/// with a warning rather than failing the whole record.
fn lenient_deadline<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|text| match parse_deadline(&text) {
        Some(deadline) => Some(deadline),
        None => {
            tracing::warn!("Unparseable grant deadline '{}', treating as missing", text);
            None
        }
    }))
}

/// Parse a deadline from RFC 3339 or a bare date.
///
/// Bare dates are interpreted as end-of-day UTC so a grant stays open
/// through its published closing date.
fn parse_deadline(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .map(|naive| naive.and_utc())
}
