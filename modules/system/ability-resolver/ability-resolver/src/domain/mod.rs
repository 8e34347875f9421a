//! Domain layer for the ability resolver.

pub mod builder;
pub mod classifier;
pub mod error;
pub mod local_client;
pub mod rules;
pub mod service;
pub mod throttle;

pub use builder::build_ability;
pub use classifier::{ContextClassifier, SituationFlags};
pub use error::DomainError;
pub use local_client::AbilityResolverLocalClient;
pub use rules::{GRANT_RULES, GrantRule, fired_rules};
pub use service::Service;
