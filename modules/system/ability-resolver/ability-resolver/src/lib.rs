//! Ability Resolver Module
//!
//! Computes, per request, which table-subsystem actions a principal may
//! perform. Classifies the request context into situation flags (one
//! membership lookup), then folds an ordered table of grant rules into an
//! immutable [`ability_resolver_sdk::Ability`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use config::AbilityResolverConfig;
pub use module::AbilityResolver;
