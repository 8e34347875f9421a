//! Public API trait for the ability resolver.

use async_trait::async_trait;
use tabledb_security::{OrganizationId, Principal};

use crate::ability::Ability;
use crate::models::{RequestContext, ResourceTarget};

/// Public API trait for the ability resolver.
///
/// Consumed by request handlers before they touch the table subsystem:
///
/// ```ignore
/// let ability = resolver.resolve(&principal, &ctx).await;
///
/// if !ability.can(Action::ProxyPostgrest) {
///     return Err(forbidden());
/// }
/// ```
///
/// Resolution never fails. Indeterminate inputs (membership lookup errors,
/// unknown resources) only ever remove grants.
#[async_trait]
pub trait AbilityResolverClient: Send + Sync {
    /// Compute the ability for `principal` in `ctx`.
    async fn resolve(&self, principal: &Principal, ctx: &RequestContext) -> Ability;

    /// Compute the ability for a resource known only by identifiers.
    ///
    /// Visibility is looked up through the configured
    /// [`crate::ResourceProvider`]. An unknown resource, or one that cannot
    /// be looked up, is treated as absent.
    async fn resolve_target(
        &self,
        principal: &Principal,
        organization_id: Option<OrganizationId>,
        target: Option<ResourceTarget>,
    ) -> Ability;
}
