//! Oracle implementation for the static membership plugin.

use ability_resolver_sdk::{MembershipError, MembershipOracle};
use async_trait::async_trait;
use tabledb_security::{OrganizationId, Principal};

use super::service::Service;

#[async_trait]
impl MembershipOracle for Service {
    async fn has_group(
        &self,
        principal: &Principal,
        group: &str,
        organization_id: Option<OrganizationId>,
    ) -> Result<bool, MembershipError> {
        // Memberships are configured per organization only.
        Ok(organization_id.is_some_and(|org| self.is_member(principal, group, org)))
    }
}
