//! Visibility lookup for the ability resolver.

use std::sync::Arc;

use ability_resolver_sdk::{AppVisibility, ResourceProvider, ResourceProviderError};
use async_trait::async_trait;
use uuid::Uuid;

use super::error::DomainError;
use super::repo::AppsRepository;

/// [`ResourceProvider`] reading `is_public` from the catalog.
pub struct CatalogResourceProvider {
    repo: Arc<dyn AppsRepository>,
}

impl CatalogResourceProvider {
    #[must_use]
    pub fn new(repo: Arc<dyn AppsRepository>) -> Self {
        Self { repo }
    }
}

impl From<DomainError> for ResourceProviderError {
    fn from(e: DomainError) -> Self {
        Self::Internal(e.to_string())
    }
}

#[async_trait]
impl ResourceProvider for CatalogResourceProvider {
    async fn app_visibility(
        &self,
        app_id: Uuid,
    ) -> Result<Option<AppVisibility>, ResourceProviderError> {
        let app = self.repo.find_app(app_id).await?;
        Ok(app.map(|app| AppVisibility {
            app_id: app.id,
            is_public: app.is_public,
        }))
    }
}
