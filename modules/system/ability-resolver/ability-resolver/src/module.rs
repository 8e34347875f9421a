//! Ability resolver module.

use std::sync::{Arc, OnceLock};

use ability_resolver_sdk::{AbilityResolverClient, MembershipOracle, ResourceProvider};
use tracing::info;

use crate::config::AbilityResolverConfig;
use crate::domain::{AbilityResolverLocalClient, Service};

/// Ability resolver module.
///
/// This module:
/// 1. Validates its configuration
/// 2. Wires the membership oracle (and optional resource provider) into the service
/// 3. Hands out the [`AbilityResolverClient`] consumed by request handlers
#[derive(Default)]
pub struct AbilityResolver {
    service: OnceLock<Arc<Service>>,
}

impl AbilityResolver {
    pub const MODULE_NAME: &'static str = "ability-resolver";

    /// Initialize the module and return its client.
    ///
    /// # Errors
    ///
    /// - invalid configuration
    /// - the module was already initialized
    #[tracing::instrument(skip_all, fields(admin_group = %cfg.admin_group))]
    pub fn init(
        &self,
        cfg: &AbilityResolverConfig,
        oracle: Arc<dyn MembershipOracle>,
        resources: Option<Arc<dyn ResourceProvider>>,
    ) -> anyhow::Result<Arc<dyn AbilityResolverClient>> {
        info!(
            membership_timeout_ms = cfg.membership_timeout_ms,
            "Initializing {} module",
            Self::MODULE_NAME
        );
        cfg.validate()?;

        let mut svc = Service::new(oracle, cfg);
        if let Some(provider) = resources {
            svc = svc.with_resource_provider(provider);
        }
        let svc = Arc::new(svc);
        self.service
            .set(svc.clone())
            .map_err(|_| anyhow::anyhow!("{} module already initialized", Self::MODULE_NAME))?;

        let api: Arc<dyn AbilityResolverClient> = Arc::new(AbilityResolverLocalClient::new(svc));

        info!("{} module initialized successfully", Self::MODULE_NAME);

        Ok(api)
    }

    /// Client for an initialized module.
    #[must_use]
    pub fn client(&self) -> Option<Arc<dyn AbilityResolverClient>> {
        self.service.get().map(|svc| {
            let api: Arc<dyn AbilityResolverClient> =
                Arc::new(AbilityResolverLocalClient::new(svc.clone()));
            api
        })
    }
}
