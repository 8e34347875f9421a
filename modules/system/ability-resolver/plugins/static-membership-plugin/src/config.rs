//! Configuration for the static membership plugin.

use serde::Deserialize;
use uuid::Uuid;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticMembershipPluginConfig {
    /// Group memberships known to the plugin.
    pub memberships: Vec<MembershipConfig>,
}

/// Groups a subject belongs to within one organization.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MembershipConfig {
    pub subject_id: Uuid,
    pub organization_id: Uuid,
    pub groups: Vec<String>,
}
