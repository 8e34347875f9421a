//! Configuration for the ability resolver.

use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use tabledb_security::groups;

use crate::domain::DomainError;

/// Environment variable prefix, e.g. `ABILITY_RESOLVER__MEMBERSHIP_TIMEOUT_MS=500`.
pub const ENV_PREFIX: &str = "ABILITY_RESOLVER__";

/// Configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AbilityResolverConfig {
    /// Group whose members receive the administrative tier.
    pub admin_group: String,

    /// Upper bound on the membership lookup. Expiry counts as "not a member".
    pub membership_timeout_ms: u64,

    /// Minimum interval between repeated membership failure warnings.
    pub failure_log_throttle_ms: u64,
}

impl Default for AbilityResolverConfig {
    fn default() -> Self {
        Self {
            admin_group: groups::ADMIN.to_owned(),
            membership_timeout_ms: 2_000,
            failure_log_throttle_ms: 10_000,
        }
    }
}

impl AbilityResolverConfig {
    /// Load from defaults, an optional YAML file, then `ABILITY_RESOLVER__*`
    /// environment variables (later sources win).
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if a source cannot be parsed or the result fails validation
    pub fn load(path: Option<&Path>) -> Result<Self, DomainError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let cfg: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| DomainError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    ///
    /// - `InvalidConfig` on an empty admin group or a zero timeout
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.admin_group.trim().is_empty() {
            return Err(DomainError::InvalidConfig(
                "admin_group must not be empty".to_owned(),
            ));
        }
        if self.membership_timeout_ms == 0 {
            return Err(DomainError::InvalidConfig(
                "membership_timeout_ms must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn membership_timeout(&self) -> Duration {
        Duration::from_millis(self.membership_timeout_ms)
    }

    #[must_use]
    pub fn failure_log_throttle(&self) -> Duration {
        Duration::from_millis(self.failure_log_throttle_ms)
    }
}
