//! Immutable grant set returned by the resolver.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::action::Action;

/// Scope a grant applies to.
///
/// Grants in the table subsystem are never record-scoped: the resolver
/// answers whether an action class is allowed at all for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    All,
}

/// The set of `(action, subject)` pairs granted for one resolution.
///
/// Built once per request and never mutated afterwards. Queries are pure
/// lookups into the grant set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    grants: BTreeSet<(Action, Subject)>,
}

impl Ability {
    /// An ability that grants nothing.
    #[must_use]
    pub fn deny_all() -> Self {
        Self::default()
    }

    /// Freeze a collection of grants into an ability.
    #[must_use]
    pub fn from_grants(grants: impl IntoIterator<Item = (Action, Subject)>) -> Self {
        Self {
            grants: grants.into_iter().collect(),
        }
    }

    /// Whether `action` is granted on every record.
    #[must_use]
    pub fn can(&self, action: Action) -> bool {
        self.can_on(action, Subject::All)
    }

    #[must_use]
    pub fn can_on(&self, action: Action, subject: Subject) -> bool {
        self.grants.contains(&(action, subject))
    }

    /// Query by wire name. Unrecognized names are denied.
    #[must_use]
    pub fn can_named(&self, action: &str) -> bool {
        action.parse::<Action>().is_ok_and(|a| self.can(a))
    }

    /// Granted actions in declaration order.
    pub fn granted_actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.grants.iter().map(|(action, _)| *action)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}
