//! Well-known group names.

/// Members of this group administer every table of their organization.
pub const ADMIN: &str = "admin";
