//! Local (in-process) client for the ability resolver.

use std::sync::Arc;

use ability_resolver_sdk::{Ability, AbilityResolverClient, RequestContext, ResourceTarget};
use async_trait::async_trait;
use tabledb_security::{OrganizationId, Principal};

use super::Service;

/// Local client wrapping the service.
pub struct AbilityResolverLocalClient {
    svc: Arc<Service>,
}

impl AbilityResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

#[async_trait]
impl AbilityResolverClient for AbilityResolverLocalClient {
    async fn resolve(&self, principal: &Principal, ctx: &RequestContext) -> Ability {
        self.svc.resolve(principal, ctx).await
    }

    async fn resolve_target(
        &self,
        principal: &Principal,
        organization_id: Option<OrganizationId>,
        target: Option<ResourceTarget>,
    ) -> Ability {
        self.svc
            .resolve_target(principal, organization_id, target)
            .await
    }
}
