#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Application catalog.
//!
//! Owns the application and application-version records the ability
//! resolver reads visibility from. Derived state is computed by explicit
//! functions in [`domain::lifecycle`] that callers invoke after writes and
//! reads, rather than by storage-level hooks:
//!
//! - after create: an app without a slug gets its id as slug
//! - after load: the editing version is the most recently updated version

pub mod domain;
pub mod infra;

pub use domain::error::DomainError;
pub use domain::lifecycle::{
    assign_slug_after_create, create_app, editing_version, load_app, resolve_editing_version,
};
pub use domain::models::{App, AppVersion, CreationMode, LoadedApp, NewApp};
pub use domain::repo::AppsRepository;
pub use domain::resource_provider::CatalogResourceProvider;
pub use infra::storage::InMemoryAppsRepository;
