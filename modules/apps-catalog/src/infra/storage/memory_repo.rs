//! In-memory [`AppsRepository`] for development and tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{App, AppVersion, NewApp};
use crate::domain::repo::AppsRepository;

/// Process-local application store.
///
/// Timestamps come from a strictly increasing clock so that "most recently
/// updated" is well defined even for writes within the same instant.
pub struct InMemoryAppsRepository {
    apps: DashMap<Uuid, App>,
    slugs: DashMap<String, Uuid>,
    versions: DashMap<Uuid, Vec<AppVersion>>,
    clock: Mutex<DateTime<Utc>>,
}

impl Default for InMemoryAppsRepository {
    fn default() -> Self {
        Self {
            apps: DashMap::new(),
            slugs: DashMap::new(),
            versions: DashMap::new(),
            clock: Mutex::new(DateTime::<Utc>::MIN_UTC),
        }
    }
}

impl InMemoryAppsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn tick(&self) -> DateTime<Utc> {
        let mut last = self.clock.lock();
        let now = Utc::now().max(*last + Duration::microseconds(1));
        *last = now;
        now
    }

    fn reserve_slug(&self, slug: &str, app_id: Uuid) -> Result<(), DomainError> {
        match self.slugs.entry(slug.to_owned()) {
            Entry::Occupied(e) if *e.get() != app_id => Err(DomainError::SlugConflict {
                slug: slug.to_owned(),
            }),
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(e) => {
                e.insert(app_id);
                Ok(())
            }
        }
    }
}

#[async_trait]
impl AppsRepository for InMemoryAppsRepository {
    async fn insert_app(&self, new_app: NewApp) -> Result<App, DomainError> {
        let id = Uuid::new_v4();
        let slug = new_app.slug.filter(|s| !s.is_empty());
        if let Some(slug) = &slug {
            self.reserve_slug(slug, id)?;
        }

        let now = self.tick();
        let app = App {
            id,
            name: new_app.name,
            slug,
            app_type: new_app.app_type,
            is_public: new_app.is_public,
            is_maintenance_on: false,
            icon: new_app.icon,
            organization_id: new_app.organization_id,
            current_version_id: None,
            user_id: new_app.user_id,
            workflow_enabled: false,
            creation_mode: new_app.creation_mode,
            created_at: now,
            updated_at: now,
        };
        self.apps.insert(id, app.clone());
        Ok(app)
    }

    async fn find_app(&self, app_id: Uuid) -> Result<Option<App>, DomainError> {
        Ok(self.apps.get(&app_id).map(|a| a.value().clone()))
    }

    async fn set_slug(&self, app_id: Uuid, slug: &str) -> Result<App, DomainError> {
        if !self.apps.contains_key(&app_id) {
            return Err(DomainError::AppNotFound { app_id });
        }
        self.reserve_slug(slug, app_id)?;

        let now = self.tick();
        let mut app = self
            .apps
            .get_mut(&app_id)
            .ok_or(DomainError::AppNotFound { app_id })?;
        let previous = app.slug.replace(slug.to_owned());
        app.updated_at = now;
        let updated = app.clone();
        drop(app);

        if let Some(previous) = previous.filter(|p| p != slug) {
            self.slugs.remove(&previous);
        }
        Ok(updated)
    }

    async fn insert_version(&self, app_id: Uuid, name: &str) -> Result<AppVersion, DomainError> {
        if !self.apps.contains_key(&app_id) {
            return Err(DomainError::AppNotFound { app_id });
        }
        let now = self.tick();
        let version = AppVersion {
            id: Uuid::new_v4(),
            app_id,
            name: name.to_owned(),
            created_at: now,
            updated_at: now,
        };
        self.versions
            .entry(app_id)
            .or_default()
            .push(version.clone());
        Ok(version)
    }

    async fn touch_version(&self, version_id: Uuid) -> Result<AppVersion, DomainError> {
        let now = self.tick();
        for mut entry in self.versions.iter_mut() {
            if let Some(version) = entry.value_mut().iter_mut().find(|v| v.id == version_id) {
                version.updated_at = now;
                return Ok(version.clone());
            }
        }
        Err(DomainError::VersionNotFound { version_id })
    }

    async fn list_versions(&self, app_id: Uuid) -> Result<Vec<AppVersion>, DomainError> {
        Ok(self
            .versions
            .get(&app_id)
            .map(|v| v.value().clone())
            .unwrap_or_default())
    }
}
