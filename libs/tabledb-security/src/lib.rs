#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod groups;
pub mod organization;
pub mod principal;

pub use organization::{OrganizationId, ParseOrganizationIdError};
pub use principal::{Principal, PrincipalBuilder};
