//! Membership oracle consumed by the ability resolver.

use async_trait::async_trait;
use tabledb_security::{OrganizationId, Principal};

use crate::error::MembershipError;

/// Answers whether a principal belongs to a group within an organization.
///
/// The organization is absent for unscoped requests; the oracle decides what
/// membership means then. Implementations must not mutate anything on behalf
/// of the resolver.
/// The resolver converts every error into "not a member".
#[async_trait]
pub trait MembershipOracle: Send + Sync {
    /// Check group membership.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the membership store cannot be reached
    /// - `Internal` for unexpected errors
    async fn has_group(
        &self,
        principal: &Principal,
        group: &str,
        organization_id: Option<OrganizationId>,
    ) -> Result<bool, MembershipError>;
}
