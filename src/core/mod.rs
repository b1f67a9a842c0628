// Core engine exports
pub mod criteria;
pub mod engine;
pub mod normalize;
pub mod reasons;
pub mod scoring;

pub use criteria::{score_criteria, CriterionScores};
pub use engine::RankingEngine;
pub use normalize::{normalize_profile, NormalizedProfile};
pub use reasons::{classify_priority, generate_reasons};
pub use scoring::combine_scores;
