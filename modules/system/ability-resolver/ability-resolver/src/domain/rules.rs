//! Grant rules.
//!
//! Rules are evaluated in table order and are purely additive: a later rule
//! never revokes what an earlier one granted. Each rule owns exactly one
//! [`ActionTier`] and grants every action of that tier when its condition
//! holds, so an action is only reachable through the rule of its tier.

use ability_resolver_sdk::{Action, ActionTier};

use super::classifier::SituationFlags;

/// A pure mapping from situation flags to the actions it grants.
#[derive(Debug, Clone, Copy)]
pub struct GrantRule {
    pub name: &'static str,
    pub tier: ActionTier,
    pub applies: fn(&SituationFlags) -> bool,
}

impl GrantRule {
    #[must_use]
    pub fn fires(&self, flags: &SituationFlags) -> bool {
        (self.applies)(flags)
    }

    /// Actions this rule grants for `flags`; empty when the condition fails.
    #[must_use]
    pub fn grants(&self, flags: &SituationFlags) -> Vec<Action> {
        if self.fires(flags) {
            Action::in_tier(self.tier).collect()
        } else {
            Vec::new()
        }
    }
}

fn org_admin(flags: &SituationFlags) -> bool {
    flags.is_org_admin
}

fn public_or_authenticated(flags: &SituationFlags) -> bool {
    flags.is_public_resource_request || flags.is_authenticated_scoped_request
}

fn always(_: &SituationFlags) -> bool {
    true
}

/// The ordered rule table.
pub const GRANT_RULES: [GrantRule; 3] = [
    GrantRule {
        name: "org_admin",
        tier: ActionTier::Administrative,
        applies: org_admin,
    },
    GrantRule {
        name: "data_access",
        tier: ActionTier::DataAccess,
        applies: public_or_authenticated,
    },
    GrantRule {
        name: "discovery",
        tier: ActionTier::Discovery,
        applies: always,
    },
];

/// Names of the rules whose condition holds for `flags`, in table order.
#[must_use]
pub fn fired_rules(flags: &SituationFlags) -> Vec<&'static str> {
    GRANT_RULES
        .iter()
        .filter(|rule| rule.fires(flags))
        .map(|rule| rule.name)
        .collect()
}
