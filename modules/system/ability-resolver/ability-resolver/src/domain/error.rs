//! Domain errors for the ability resolver.
//!
//! Resolution itself never fails; these cover module setup only.

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
