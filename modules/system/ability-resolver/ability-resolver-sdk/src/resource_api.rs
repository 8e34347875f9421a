//! Resource visibility lookup consumed by the ability resolver.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ResourceProviderError;
use crate::models::AppVisibility;

/// Supplies the visibility of applications.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    /// Look up an application's visibility.
    ///
    /// Returns `Ok(None)` when the application does not exist.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the backing store cannot be reached
    /// - `Internal` for unexpected errors
    async fn app_visibility(
        &self,
        app_id: Uuid,
    ) -> Result<Option<AppVisibility>, ResourceProviderError>;
}
