//! Domain service for the ability resolver.

use std::sync::Arc;

use ability_resolver_sdk::{
    Ability, MembershipOracle, RequestContext, ResourceContext, ResourceProvider, ResourceTarget,
};
use tabledb_security::{OrganizationId, Principal};
use tracing::{debug, warn};

use super::builder::build_ability;
use super::classifier::ContextClassifier;
use super::rules::fired_rules;
use crate::config::AbilityResolverConfig;

/// Ability resolver service.
///
/// Stateless per request: every call classifies its own context and builds a
/// fresh [`Ability`]. Safe to share across tasks.
pub struct Service {
    classifier: ContextClassifier,
    resources: Option<Arc<dyn ResourceProvider>>,
}

impl Service {
    #[must_use]
    pub fn new(oracle: Arc<dyn MembershipOracle>, cfg: &AbilityResolverConfig) -> Self {
        Self {
            classifier: ContextClassifier::new(oracle, cfg),
            resources: None,
        }
    }

    /// Attach the provider used by [`Self::resolve_target`].
    #[must_use]
    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(provider);
        self
    }

    /// Resolve the ability for a fully described request.
    #[tracing::instrument(
        skip_all,
        fields(subject_id = %principal.subject_id(), organization_id = ?ctx.organization_id)
    )]
    pub async fn resolve(&self, principal: &Principal, ctx: &RequestContext) -> Ability {
        let flags = self.classifier.classify(principal, ctx).await;
        let ability = build_ability(&flags);
        debug!(
            is_org_admin = flags.is_org_admin,
            is_public_resource_request = flags.is_public_resource_request,
            is_authenticated_scoped_request = flags.is_authenticated_scoped_request,
            rules = ?fired_rules(&flags),
            granted = ability.granted_actions().count(),
            "resolved ability"
        );
        ability
    }

    /// Resolve the ability for a resource known only by identifiers.
    #[tracing::instrument(skip_all, fields(target = ?target))]
    pub async fn resolve_target(
        &self,
        principal: &Principal,
        organization_id: Option<OrganizationId>,
        target: Option<ResourceTarget>,
    ) -> Ability {
        let resource = match target {
            Some(target) => self.lookup(target).await,
            None => None,
        };
        let ctx = RequestContext {
            organization_id,
            resource,
        };
        self.resolve(principal, &ctx).await
    }

    /// Unknown or unreadable resources resolve to "no resource".
    async fn lookup(&self, target: ResourceTarget) -> Option<ResourceContext> {
        let Some(provider) = &self.resources else {
            warn!("no resource provider configured; ignoring target");
            return None;
        };

        match provider.app_visibility(target.app_id()).await {
            Ok(Some(app)) => Some(target.with_visibility(app)),
            Ok(None) => {
                debug!(app_id = %target.app_id(), "target application not found");
                None
            }
            Err(e) => {
                warn!(
                    app_id = %target.app_id(),
                    error = %e,
                    "application visibility lookup failed; treating as absent"
                );
                None
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use ability_resolver_sdk::{Action, AppVisibility, MembershipError, ResourceProviderError};
    use async_trait::async_trait;
    use tracing_test::traced_test;
    use uuid::Uuid;

    use super::*;

    struct NeverAdmin;

    #[async_trait]
    impl MembershipOracle for NeverAdmin {
        async fn has_group(
            &self,
            _principal: &Principal,
            _group: &str,
            _organization_id: Option<OrganizationId>,
        ) -> Result<bool, MembershipError> {
            Ok(false)
        }
    }

    /// Provider that knows one application.
    struct OneApp(AppVisibility);

    #[async_trait]
    impl ResourceProvider for OneApp {
        async fn app_visibility(
            &self,
            app_id: Uuid,
        ) -> Result<Option<AppVisibility>, ResourceProviderError> {
            Ok((app_id == self.0.app_id).then_some(self.0))
        }
    }

    struct BrokenProvider;

    #[async_trait]
    impl ResourceProvider for BrokenProvider {
        async fn app_visibility(
            &self,
            _app_id: Uuid,
        ) -> Result<Option<AppVisibility>, ResourceProviderError> {
            Err(ResourceProviderError::Unavailable("db down".to_owned()))
        }
    }

    fn service() -> Service {
        Service::new(Arc::new(NeverAdmin), &AbilityResolverConfig::default())
    }

    fn public_app() -> AppVisibility {
        AppVisibility {
            app_id: Uuid::new_v4(),
            is_public: true,
        }
    }

    #[tokio::test]
    async fn resolve_target_looks_up_public_app() {
        let app = public_app();
        let svc = service().with_resource_provider(Arc::new(OneApp(app)));

        let ability = svc
            .resolve_target(
                &Principal::anonymous(),
                None,
                Some(ResourceTarget::DataQuery {
                    data_query_id: Uuid::new_v4(),
                    app_id: app.app_id,
                }),
            )
            .await;

        assert!(ability.can(Action::ProxyPostgrest));
        assert!(!ability.can(Action::CreateTable));
    }

    #[tokio::test]
    async fn resolve_target_unknown_app_denies_proxy() {
        let svc = service().with_resource_provider(Arc::new(OneApp(public_app())));

        let ability = svc
            .resolve_target(
                &Principal::anonymous(),
                None,
                Some(ResourceTarget::App {
                    app_id: Uuid::new_v4(),
                }),
            )
            .await;

        assert!(!ability.can(Action::ProxyPostgrest));
        assert!(ability.can(Action::ViewTables));
    }

    #[tokio::test]
    async fn resolve_target_provider_failure_denies_proxy() {
        let svc = service().with_resource_provider(Arc::new(BrokenProvider));

        let ability = svc
            .resolve_target(
                &Principal::anonymous(),
                None,
                Some(ResourceTarget::App {
                    app_id: Uuid::new_v4(),
                }),
            )
            .await;

        assert!(!ability.can(Action::ProxyPostgrest));
        assert!(ability.can(Action::JoinTables));
    }

    #[tokio::test]
    async fn resolve_target_without_provider_ignores_target() {
        let app = public_app();

        let ability = service()
            .resolve_target(
                &Principal::anonymous(),
                None,
                Some(ResourceTarget::App { app_id: app.app_id }),
            )
            .await;

        assert!(!ability.can(Action::ProxyPostgrest));
    }

    #[tokio::test]
    #[traced_test]
    async fn resolve_logs_fired_rules() {
        let ability = service()
            .resolve(&Principal::anonymous(), &RequestContext::new())
            .await;

        assert!(ability.can(Action::ViewTables));
        assert!(logs_contain("resolved ability"));
        assert!(logs_contain("\"discovery\""));
        assert!(!logs_contain("org_admin"));
    }
}
