// Repository interfaces for the engine's external collaborators.
//
// Grant and profile storage is owned by the rest of the dashboard; the
// engine only states the capabilities it consumes.
pub mod memory;

use thiserror::Error;

use crate::models::{Grant, OrganizationProfile};

pub use memory::{InMemoryGrantRepository, InMemoryProfileRepository};

/// Errors a repository implementation can surface.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Source of candidate grants.
#[allow(async_fn_in_trait)]
pub trait GrantRepository {
    async fn fetch_grants(&self) -> Result<Vec<Grant>, RepositoryError>;
}

/// Source of organisation profiles, keyed by organisation id.
#[allow(async_fn_in_trait)]
pub trait ProfileRepository {
    async fn fetch_profile(&self, org_id: &str) -> Result<OrganizationProfile, RepositoryError>;
}
