#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Membership Plugin
//!
//! A [`ability_resolver_sdk::MembershipOracle`] backed by a fixed list of
//! `(subject, organization) -> groups` entries. Intended for development and
//! tests; production deployments plug in an oracle over the user store.
//!
//! ## Configuration
//!
//! ```yaml
//! static_membership_plugin:
//!   memberships:
//!     - subject_id: "11111111-1111-1111-1111-111111111111"
//!       organization_id: "22222222-2222-2222-2222-222222222222"
//!       groups: ["admin", "all_users"]
//! ```

pub mod config;
pub mod domain;

pub use config::{MembershipConfig, StaticMembershipPluginConfig};
pub use domain::Service;
