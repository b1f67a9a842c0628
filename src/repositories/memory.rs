use std::collections::HashMap;

use crate::models::{Grant, OrganizationProfile};
use crate::repositories::{GrantRepository, ProfileRepository, RepositoryError};

/// In-memory grant source.
///
/// Reference implementation of [`GrantRepository`], used by the integration
/// tests and available to callers as a test double.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGrantRepository {
    grants: Vec<Grant>,
}

impl InMemoryGrantRepository {
    pub fn new(grants: Vec<Grant>) -> Self {
        Self { grants }
    }
}

impl GrantRepository for InMemoryGrantRepository {
    async fn fetch_grants(&self) -> Result<Vec<Grant>, RepositoryError> {
        Ok(self.grants.clone())
    }
}

/// In-memory profile source keyed by organisation id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: HashMap<String, OrganizationProfile>,
}

impl InMemoryProfileRepository {
    pub fn new(profiles: HashMap<String, OrganizationProfile>) -> Self {
        Self { profiles }
    }

    pub fn insert(&mut self, org_id: impl Into<String>, profile: OrganizationProfile) {
        self.profiles.insert(org_id.into(), profile);
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    async fn fetch_profile(&self, org_id: &str) -> Result<OrganizationProfile, RepositoryError> {
        self.profiles
            .get(org_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("profile for org {}", org_id)))
    }
}
