#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Ability Resolver SDK
//!
//! This crate provides the public API for the `ability_resolver` module:
//!
//! - [`AbilityResolverClient`] - Public API trait for consumers
//! - [`MembershipOracle`] - Group membership lookup consumed by the resolver
//! - [`ResourceProvider`] - Application visibility lookup consumed by the resolver
//! - [`Action`], [`ActionTier`] - The closed set of table-subsystem actions
//! - [`Ability`] - Immutable per-request grant set
//! - [`RequestContext`], [`ResourceContext`], [`ResourceTarget`] - Request models
//!
//! ## Usage
//!
//! ```ignore
//! use ability_resolver_sdk::{AbilityResolverClient, Action, RequestContext};
//!
//! let ability = resolver
//!     .resolve(&principal, &RequestContext::scoped(organization_id))
//!     .await;
//!
//! if !ability.can(Action::DropTable) {
//!     return Err(forbidden());
//! }
//! ```

pub mod ability;
pub mod action;
pub mod api;
pub mod error;
pub mod models;
pub mod plugin_api;
pub mod resource_api;

// Re-export main types at crate root
pub use ability::{Ability, Subject};
pub use action::{Action, ActionTier, UnknownAction};
pub use api::AbilityResolverClient;
pub use error::{MembershipError, ResourceProviderError};
pub use models::{AppVisibility, DataQueryRef, RequestContext, ResourceContext, ResourceTarget};
pub use plugin_api::MembershipOracle;
pub use resource_api::ResourceProvider;
