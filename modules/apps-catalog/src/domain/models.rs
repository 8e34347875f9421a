use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabledb_security::OrganizationId;
use uuid::Uuid;

/// How an application came into existence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreationMode {
    /// Imported from a git repository.
    Git,
    #[default]
    Default,
}

/// A stored application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub id: Uuid,
    pub name: String,
    /// Unique across all applications once assigned.
    pub slug: Option<String>,
    pub app_type: String,
    pub is_public: bool,
    pub is_maintenance_on: bool,
    pub icon: Option<String>,
    pub organization_id: OrganizationId,
    /// Released version, if any. Unrelated to the editing version.
    pub current_version_id: Option<Uuid>,
    pub user_id: Uuid,
    pub workflow_enabled: bool,
    pub creation_mode: CreationMode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for [`App`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApp {
    pub name: String,
    pub slug: Option<String>,
    pub app_type: String,
    pub is_public: bool,
    pub icon: Option<String>,
    pub organization_id: OrganizationId,
    pub user_id: Uuid,
    pub creation_mode: CreationMode,
}

impl NewApp {
    /// A public, front-end app with no explicit slug.
    #[must_use]
    pub fn new(name: impl Into<String>, organization_id: OrganizationId, user_id: Uuid) -> Self {
        Self {
            name: name.into(),
            slug: None,
            app_type: "front-end".to_owned(),
            is_public: true,
            icon: None,
            organization_id,
            user_id,
            creation_mode: CreationMode::Default,
        }
    }

    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    #[must_use]
    pub fn with_creation_mode(mut self, mode: CreationMode) -> Self {
        self.creation_mode = mode;
        self
    }
}

/// A version (draft or release) of an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppVersion {
    pub id: Uuid,
    pub app_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An application read together with its derived editing version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedApp {
    pub app: App,
    /// Most recently updated version, `None` for an app without versions.
    pub editing_version: Option<AppVersion>,
}
