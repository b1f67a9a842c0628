use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Weight vector as configured, in integer percentages.
///
/// Validated once at load; the engine never re-checks weights on the hot
/// path. The defaults sum to 100 and a deployment overriding them is
/// expected to keep that property.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeightsConfig {
    #[serde(default = "default_org_type_weight")]
    #[validate(range(max = 100))]
    pub org_type: u8,
    #[serde(default = "default_industry_weight")]
    #[validate(range(max = 100))]
    pub industry: u8,
    #[serde(default = "default_location_weight")]
    #[validate(range(max = 100))]
    pub location: u8,
    #[serde(default = "default_funding_range_weight")]
    #[validate(range(max = 100))]
    pub funding_range: u8,
    #[serde(default = "default_deadline_weight")]
    #[validate(range(max = 100))]
    pub deadline: u8,
    #[serde(default = "default_purpose_weight")]
    #[validate(range(max = 100))]
    pub purpose: u8,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            org_type: default_org_type_weight(),
            industry: default_industry_weight(),
            location: default_location_weight(),
            funding_range: default_funding_range_weight(),
            deadline: default_deadline_weight(),
            purpose: default_purpose_weight(),
        }
    }
}

fn default_org_type_weight() -> u8 { 25 }
fn default_industry_weight() -> u8 { 20 }
fn default_location_weight() -> u8 { 15 }
fn default_funding_range_weight() -> u8 { 20 }
fn default_deadline_weight() -> u8 { 10 }
fn default_purpose_weight() -> u8 { 10 }

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            org_type: config.org_type,
            industry: config.industry,
            location: config.location,
            funding_range: config.funding_range,
            deadline: config.deadline,
            purpose: config.purpose,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> usize { 20 }
fn default_max_limit() -> usize { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FUNDMATCH_)
    ///
    /// An out-of-range weight is rejected here, at startup; nothing inside
    /// the scoring pipeline re-validates configuration at request time.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. FUNDMATCH__SCORING__WEIGHTS__DEADLINE -> scoring.weights.deadline
            .add_source(
                Environment::with_prefix("FUNDMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate_weights()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FUNDMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate_weights()?;
        Ok(settings)
    }

    fn validate_weights(&self) -> Result<(), ConfigError> {
        self.scoring
            .weights
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid scoring weights: {}", e)))
    }
}
