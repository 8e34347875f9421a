//! Ability builder.

use ability_resolver_sdk::{Ability, Subject};

use super::classifier::SituationFlags;
use super::rules::GRANT_RULES;

/// Fold the rule table over `flags` into an immutable [`Ability`].
///
/// Single pass, no I/O, cannot fail.
#[must_use]
pub fn build_ability(flags: &SituationFlags) -> Ability {
    Ability::from_grants(
        GRANT_RULES
            .iter()
            .flat_map(|rule| rule.grants(flags))
            .map(|action| (action, Subject::All)),
    )
}
