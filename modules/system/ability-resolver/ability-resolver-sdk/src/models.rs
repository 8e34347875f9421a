//! Request models for the ability resolver.

use serde::{Deserialize, Serialize};
use tabledb_security::OrganizationId;
use uuid::Uuid;

/// Visibility of an application as seen by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppVisibility {
    pub app_id: Uuid,
    pub is_public: bool,
}

/// A data query together with the application that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQueryRef {
    pub data_query_id: Uuid,
    pub app: AppVisibility,
}

/// The resource a request targets.
///
/// The resolver only reads `is_public`, either directly from the application
/// or through the data query's owning application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceContext {
    App(AppVisibility),
    DataQuery(DataQueryRef),
}

impl ResourceContext {
    /// The application the resource resolves to.
    #[must_use]
    pub const fn app(&self) -> &AppVisibility {
        match self {
            Self::App(app) => app,
            Self::DataQuery(query) => &query.app,
        }
    }

    #[must_use]
    pub const fn is_public(&self) -> bool {
        self.app().is_public
    }
}

/// Per-request context supplied alongside the principal.
///
/// Both fields are optional; absence is valid input and simply fails the
/// conditions that need it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<OrganizationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<ResourceContext>,
}

impl RequestContext {
    /// No organization and no resource.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A request bound to `organization_id`.
    #[must_use]
    pub fn scoped(organization_id: OrganizationId) -> Self {
        Self {
            organization_id: Some(organization_id),
            resource: None,
        }
    }

    #[must_use]
    pub fn with_organization(mut self, organization_id: OrganizationId) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    #[must_use]
    pub fn with_resource(mut self, resource: ResourceContext) -> Self {
        self.resource = Some(resource);
        self
    }
}

/// Unresolved reference to the targeted resource.
///
/// Used with [`crate::AbilityResolverClient::resolve_target`] when the caller
/// has identifiers only and the resolver should look the visibility up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceTarget {
    App { app_id: Uuid },
    DataQuery { data_query_id: Uuid, app_id: Uuid },
}

impl ResourceTarget {
    #[must_use]
    pub const fn app_id(&self) -> Uuid {
        match self {
            Self::App { app_id } | Self::DataQuery { app_id, .. } => *app_id,
        }
    }

    /// Attach the looked-up visibility of the owning application.
    #[must_use]
    pub const fn with_visibility(self, app: AppVisibility) -> ResourceContext {
        match self {
            Self::App { .. } => ResourceContext::App(app),
            Self::DataQuery { data_query_id, .. } => ResourceContext::DataQuery(DataQueryRef {
                data_query_id,
                app,
            }),
        }
    }
}
