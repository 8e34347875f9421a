use async_trait::async_trait;
use uuid::Uuid;

use super::error::DomainError;
use super::models::{App, AppVersion, NewApp};

/// Storage for applications and their versions.
///
/// Pure data access: no derived state is computed here. See
/// [`super::lifecycle`] for the post-create and post-load derivations.
///
/// # Errors
///
/// All methods may fail with `Internal` on storage failures.
#[async_trait]
pub trait AppsRepository: Send + Sync {
    /// # Errors
    ///
    /// - `SlugConflict` if `new_app.slug` is already taken
    async fn insert_app(&self, new_app: NewApp) -> Result<App, DomainError>;

    /// # Errors
    ///
    /// - storage failures only; a missing app is `Ok(None)`
    async fn find_app(&self, app_id: Uuid) -> Result<Option<App>, DomainError>;

    /// # Errors
    ///
    /// - `AppNotFound` if the app does not exist
    /// - `SlugConflict` if another app holds `slug`
    async fn set_slug(&self, app_id: Uuid, slug: &str) -> Result<App, DomainError>;

    /// # Errors
    ///
    /// - `AppNotFound` if the app does not exist
    async fn insert_version(&self, app_id: Uuid, name: &str) -> Result<AppVersion, DomainError>;

    /// Bump `updated_at` of a version to now.
    ///
    /// # Errors
    ///
    /// - `VersionNotFound` if the version does not exist
    async fn touch_version(&self, version_id: Uuid) -> Result<AppVersion, DomainError>;

    /// All versions of an app, in insertion order.
    ///
    /// # Errors
    ///
    /// - storage failures only; an unknown app has no versions
    async fn list_versions(&self, app_id: Uuid) -> Result<Vec<AppVersion>, DomainError>;
}
