//! Context classification.
//!
//! Turns the raw request context into the three booleans the grant rules are
//! gated on. The admin check is the only step that talks to anything outside
//! the process; everything else is a pure read of the inputs.

use std::sync::Arc;
use std::time::Duration;

use ability_resolver_sdk::{MembershipOracle, RequestContext};
use tabledb_security::{OrganizationId, Principal};
use tracing::warn;

use super::throttle::ThrottledLog;
use crate::config::AbilityResolverConfig;

/// Decision-relevant facts about one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SituationFlags {
    /// No organization scope, and the targeted resource is public.
    pub is_public_resource_request: bool,
    /// A non-anonymous principal inside an organization scope.
    pub is_authenticated_scoped_request: bool,
    /// The membership oracle confirmed the principal is an organization admin.
    pub is_org_admin: bool,
}

/// `is_public_resource_request`: unscoped request for a public resource.
#[must_use]
pub fn is_public_resource_request(ctx: &RequestContext) -> bool {
    ctx.organization_id.is_none() && ctx.resource.is_some_and(|r| r.is_public())
}

/// `is_authenticated_scoped_request`: a known principal bound to an organization.
#[must_use]
pub fn is_authenticated_scoped_request(principal: &Principal, ctx: &RequestContext) -> bool {
    !principal.is_anonymous() && ctx.organization_id.is_some()
}

/// Derives [`SituationFlags`], performing at most one membership lookup.
pub struct ContextClassifier {
    oracle: Arc<dyn MembershipOracle>,
    admin_group: String,
    membership_timeout: Duration,
    failure_log: ThrottledLog,
}

impl ContextClassifier {
    #[must_use]
    pub fn new(oracle: Arc<dyn MembershipOracle>, cfg: &AbilityResolverConfig) -> Self {
        Self {
            oracle,
            admin_group: cfg.admin_group.clone(),
            membership_timeout: cfg.membership_timeout(),
            failure_log: ThrottledLog::new(cfg.failure_log_throttle()),
        }
    }

    /// Classify a request.
    ///
    /// Never fails: an erroring or slow membership lookup yields
    /// `is_org_admin = false`.
    pub async fn classify(&self, principal: &Principal, ctx: &RequestContext) -> SituationFlags {
        SituationFlags {
            is_public_resource_request: is_public_resource_request(ctx),
            is_authenticated_scoped_request: is_authenticated_scoped_request(principal, ctx),
            is_org_admin: self.is_org_admin(principal, ctx.organization_id).await,
        }
    }

    async fn is_org_admin(
        &self,
        principal: &Principal,
        organization_id: Option<OrganizationId>,
    ) -> bool {
        if principal.is_anonymous() {
            return false;
        }

        let lookup = self
            .oracle
            .has_group(principal, &self.admin_group, organization_id);

        match tokio::time::timeout(self.membership_timeout, lookup).await {
            Ok(Ok(is_member)) => is_member,
            Ok(Err(e)) => {
                if self.failure_log.should_log() {
                    warn!(
                        subject_id = %principal.subject_id(),
                        organization_id = ?organization_id,
                        error = %e,
                        "membership lookup failed; treating as non-admin"
                    );
                }
                false
            }
            Err(_) => {
                if self.failure_log.should_log() {
                    warn!(
                        subject_id = %principal.subject_id(),
                        organization_id = ?organization_id,
                        timeout = ?self.membership_timeout,
                        "membership lookup timed out; treating as non-admin"
                    );
                }
                false
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use ability_resolver_sdk::{AppVisibility, MembershipError, ResourceContext};
    use async_trait::async_trait;
    use tracing_test::traced_test;
    use uuid::Uuid;

    use super::*;

    /// Oracle returning a fixed answer and counting calls.
    struct FixedOracle {
        answer: bool,
        calls: AtomicUsize,
    }

    impl FixedOracle {
        fn new(answer: bool) -> Arc<Self> {
            Arc::new(Self {
                answer,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl MembershipOracle for FixedOracle {
        async fn has_group(
            &self,
            _principal: &Principal,
            _group: &str,
            _organization_id: Option<OrganizationId>,
        ) -> Result<bool, MembershipError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer)
        }
    }

    struct FailingOracle;

    #[async_trait]
    impl MembershipOracle for FailingOracle {
        async fn has_group(
            &self,
            _principal: &Principal,
            _group: &str,
            _organization_id: Option<OrganizationId>,
        ) -> Result<bool, MembershipError> {
            Err(MembershipError::Unavailable("connection refused".to_owned()))
        }
    }

    /// Oracle that never answers in time.
    struct SlowOracle;

    #[async_trait]
    impl MembershipOracle for SlowOracle {
        async fn has_group(
            &self,
            _principal: &Principal,
            _group: &str,
            _organization_id: Option<OrganizationId>,
        ) -> Result<bool, MembershipError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(true)
        }
    }

    fn org() -> OrganizationId {
        OrganizationId::new(Uuid::new_v4())
    }

    fn app(is_public: bool) -> ResourceContext {
        ResourceContext::App(AppVisibility {
            app_id: Uuid::new_v4(),
            is_public,
        })
    }

    fn classifier(oracle: Arc<dyn MembershipOracle>) -> ContextClassifier {
        ContextClassifier::new(oracle, &AbilityResolverConfig::default())
    }

    #[test]
    fn public_resource_requires_missing_organization() {
        let unscoped = RequestContext::new().with_resource(app(true));
        let scoped = unscoped.with_organization(org());

        assert!(is_public_resource_request(&unscoped));
        assert!(!is_public_resource_request(&scoped));
    }

    #[test]
    fn public_resource_requires_resource() {
        assert!(!is_public_resource_request(&RequestContext::new()));
        assert!(!is_public_resource_request(
            &RequestContext::new().with_resource(app(false))
        ));
    }

    #[test]
    fn authenticated_scoped_requires_both() {
        let user = Principal::user(Uuid::new_v4());
        let scoped = RequestContext::scoped(org());

        assert!(is_authenticated_scoped_request(&user, &scoped));
        assert!(!is_authenticated_scoped_request(
            &Principal::anonymous(),
            &scoped
        ));
        assert!(!is_authenticated_scoped_request(
            &user,
            &RequestContext::new()
        ));
    }

    #[tokio::test]
    async fn anonymous_principal_skips_oracle() {
        let oracle = FixedOracle::new(true);
        let flags = classifier(oracle.clone())
            .classify(&Principal::anonymous(), &RequestContext::scoped(org()))
            .await;

        assert!(!flags.is_org_admin);
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unscoped_user_still_consults_oracle() {
        for answer in [true, false] {
            let oracle = FixedOracle::new(answer);
            let flags = classifier(oracle.clone())
                .classify(&Principal::user(Uuid::new_v4()), &RequestContext::new())
                .await;

            assert_eq!(flags.is_org_admin, answer);
            assert!(!flags.is_authenticated_scoped_request);
            assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn scoped_user_consults_oracle_once() {
        let oracle = FixedOracle::new(true);
        let flags = classifier(oracle.clone())
            .classify(
                &Principal::user(Uuid::new_v4()),
                &RequestContext::scoped(org()),
            )
            .await;

        assert_eq!(
            flags,
            SituationFlags {
                is_public_resource_request: false,
                is_authenticated_scoped_request: true,
                is_org_admin: true,
            }
        );
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn oracle_error_is_not_admin() {
        let flags = classifier(Arc::new(FailingOracle))
            .classify(
                &Principal::user(Uuid::new_v4()),
                &RequestContext::scoped(org()),
            )
            .await;

        assert!(!flags.is_org_admin);
        assert!(flags.is_authenticated_scoped_request);
    }

    #[tokio::test]
    #[traced_test]
    async fn repeated_oracle_errors_warn_once_per_interval() {
        let classifier = classifier(Arc::new(FailingOracle));
        let user = Principal::user(Uuid::new_v4());
        let ctx = RequestContext::scoped(org());

        classifier.classify(&user, &ctx).await;
        classifier.classify(&user, &ctx).await;

        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|l| l.contains("membership lookup failed"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("expected one warning, got {n}")),
            }
        });
    }

    #[tokio::test]
    #[traced_test]
    async fn slow_oracle_times_out_as_non_admin() {
        let cfg = AbilityResolverConfig {
            membership_timeout_ms: 20,
            ..AbilityResolverConfig::default()
        };
        let classifier = ContextClassifier::new(Arc::new(SlowOracle), &cfg);

        let flags = classifier
            .classify(
                &Principal::user(Uuid::new_v4()),
                &RequestContext::scoped(org()),
            )
            .await;

        assert!(!flags.is_org_admin);
        assert!(logs_contain("membership lookup timed out"));
    }
}
