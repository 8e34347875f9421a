//! Derived application state.
//!
//! These run explicitly around repository calls. Callers that bypass
//! [`create_app`] or [`load_app`] must invoke the individual derivations
//! themselves.

use tracing::debug;
use uuid::Uuid;

use super::error::DomainError;
use super::models::{App, AppVersion, LoadedApp, NewApp};
use super::repo::AppsRepository;

/// Insert an application and run the post-create derivations.
///
/// # Errors
///
/// - `Validation` for an empty name
/// - `SlugConflict` if the requested or derived slug is taken
/// - repository errors
pub async fn create_app<R>(repo: &R, new_app: NewApp) -> Result<App, DomainError>
where
    R: AppsRepository + ?Sized,
{
    if new_app.name.trim().is_empty() {
        return Err(DomainError::validation("name", "must not be empty"));
    }
    let app = repo.insert_app(new_app).await?;
    assign_slug_after_create(repo, app).await
}

/// An app created without a slug takes its own id as slug.
///
/// # Errors
///
/// - repository errors from persisting the slug
pub async fn assign_slug_after_create<R>(repo: &R, app: App) -> Result<App, DomainError>
where
    R: AppsRepository + ?Sized,
{
    if app.slug.as_deref().is_some_and(|s| !s.is_empty()) {
        return Ok(app);
    }
    debug!(app_id = %app.id, "assigning id as slug");
    repo.set_slug(app.id, &app.id.to_string()).await
}

/// Read an application together with its editing version.
///
/// # Errors
///
/// - repository errors
pub async fn load_app<R>(repo: &R, app_id: Uuid) -> Result<Option<LoadedApp>, DomainError>
where
    R: AppsRepository + ?Sized,
{
    let Some(app) = repo.find_app(app_id).await? else {
        return Ok(None);
    };
    let editing_version = resolve_editing_version(repo, app.id).await?;
    Ok(Some(LoadedApp {
        app,
        editing_version,
    }))
}

/// The most recently updated version of an app.
///
/// # Errors
///
/// - repository errors
pub async fn resolve_editing_version<R>(
    repo: &R,
    app_id: Uuid,
) -> Result<Option<AppVersion>, DomainError>
where
    R: AppsRepository + ?Sized,
{
    let versions = repo.list_versions(app_id).await?;
    Ok(editing_version(&versions).cloned())
}

/// Pick the version with the greatest `updated_at`. On a tie the one listed
/// last wins.
#[must_use]
pub fn editing_version(versions: &[AppVersion]) -> Option<&AppVersion> {
    versions.iter().max_by_key(|v| v.updated_at)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn version(name: &str, age_secs: i64) -> AppVersion {
        let at = Utc::now() - Duration::seconds(age_secs);
        AppVersion {
            id: Uuid::new_v4(),
            app_id: Uuid::nil(),
            name: name.to_owned(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn editing_version_is_most_recently_updated() {
        let versions = vec![version("v1", 30), version("v2", 10), version("v3", 20)];

        assert_eq!(editing_version(&versions).map(|v| v.name.as_str()), Some("v2"));
    }

    #[test]
    fn editing_version_of_nothing_is_none() {
        assert!(editing_version(&[]).is_none());
    }

    #[test]
    fn editing_version_tie_prefers_last_listed() {
        let first = version("first", 5);
        let mut second = version("second", 0);
        second.updated_at = first.updated_at;

        let versions = vec![first, second];
        assert_eq!(
            editing_version(&versions).map(|v| v.name.as_str()),
            Some("second")
        );
    }
}
