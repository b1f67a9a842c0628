//! Fundmatch - grant-to-profile matching and ranking engine
//!
//! This library provides the scoring engine behind the grants dashboard's
//! recommendations. Each candidate grant is scored against an organisation's
//! profile along six weighted criteria, explained with short reason strings,
//! and bucketed into a priority, then the collection is ranked best-first.
//!
//! The engine is pure and stateless: it performs no I/O and owns no storage.
//! Grant and profile records come from the repository interfaces in
//! [`repositories`]; HTTP routing, persistence, and UI concerns live in the
//! rest of the application.

pub mod config;
pub mod core;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use crate::core::{CriterionScores, RankingEngine};
pub use crate::models::{
    Grant, MatchResult, OrganizationProfile, Priority, ScoringWeights, WeightOverrides,
};
