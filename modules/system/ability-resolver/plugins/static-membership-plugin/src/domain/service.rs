//! Service implementation for the static membership plugin.

use std::collections::{HashMap, HashSet};

use tabledb_security::{OrganizationId, Principal};
use uuid::Uuid;

use crate::config::StaticMembershipPluginConfig;

/// Static membership service.
///
/// Entries for the same subject and organization are merged. Anonymous
/// principals belong to no group.
#[derive(Debug, Default)]
pub struct Service {
    memberships: HashMap<(Uuid, OrganizationId), HashSet<String>>,
}

impl Service {
    #[must_use]
    pub fn from_config(cfg: &StaticMembershipPluginConfig) -> Self {
        let mut memberships: HashMap<(Uuid, OrganizationId), HashSet<String>> = HashMap::new();
        for entry in &cfg.memberships {
            memberships
                .entry((entry.subject_id, OrganizationId::new(entry.organization_id)))
                .or_default()
                .extend(entry.groups.iter().cloned());
        }
        tracing::debug!(entries = memberships.len(), "Loaded static memberships");
        Self { memberships }
    }

    /// Whether `principal` is in `group` within `organization_id`.
    #[must_use]
    pub fn is_member(
        &self,
        principal: &Principal,
        group: &str,
        organization_id: OrganizationId,
    ) -> bool {
        if principal.is_anonymous() {
            return false;
        }
        self.memberships
            .get(&(principal.subject_id(), organization_id))
            .is_some_and(|groups| groups.contains(group))
    }
}
