// Model exports
pub mod domain;

pub use domain::{
    Grant, MatchResult, OrganizationProfile, Priority, ScoringWeights, WeightOverrides,
};
