//! Actions recognized by the table subsystem.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operation kinds the table subsystem recognizes.
///
/// The set is closed. Each action belongs to exactly one [`ActionTier`]
/// and is denied unless the rule for that tier grants it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Forward data operations to the underlying store.
    ProxyPostgrest,
    ViewTables,
    ViewTable,
    CreateTable,
    RenameTable,
    DropTable,
    AddColumn,
    DropColumn,
    BulkUpload,
    JoinTables,
    EditColumn,
    AddForeignKey,
    UpdateForeignKey,
    DeleteForeignKey,
}

/// Trust tier an action is gated by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionTier {
    /// Structural/schema-mutating actions. Organization admins only.
    Administrative,
    /// Data-level passthrough. Public resources or authenticated, scoped callers.
    DataAccess,
    /// Schema discovery. Always granted.
    Discovery,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::ProxyPostgrest,
        Self::ViewTables,
        Self::ViewTable,
        Self::CreateTable,
        Self::RenameTable,
        Self::DropTable,
        Self::AddColumn,
        Self::DropColumn,
        Self::BulkUpload,
        Self::JoinTables,
        Self::EditColumn,
        Self::AddForeignKey,
        Self::UpdateForeignKey,
        Self::DeleteForeignKey,
    ];

    /// Wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProxyPostgrest => "proxyPostgrest",
            Self::ViewTables => "viewTables",
            Self::ViewTable => "viewTable",
            Self::CreateTable => "createTable",
            Self::RenameTable => "renameTable",
            Self::DropTable => "dropTable",
            Self::AddColumn => "addColumn",
            Self::DropColumn => "dropColumn",
            Self::BulkUpload => "bulkUpload",
            Self::JoinTables => "joinTables",
            Self::EditColumn => "editColumn",
            Self::AddForeignKey => "addForeignKey",
            Self::UpdateForeignKey => "updateForeignKey",
            Self::DeleteForeignKey => "deleteForeignKey",
        }
    }

    /// The tier whose rule may grant this action.
    ///
    /// Exhaustive on purpose: a new action does not compile until it is
    /// placed in a tier.
    #[must_use]
    pub const fn tier(self) -> ActionTier {
        match self {
            Self::CreateTable
            | Self::RenameTable
            | Self::DropTable
            | Self::AddColumn
            | Self::DropColumn
            | Self::BulkUpload
            | Self::EditColumn
            | Self::AddForeignKey
            | Self::UpdateForeignKey
            | Self::DeleteForeignKey => ActionTier::Administrative,
            Self::ProxyPostgrest => ActionTier::DataAccess,
            Self::ViewTables | Self::ViewTable | Self::JoinTables => ActionTier::Discovery,
        }
    }

    /// Actions belonging to `tier`, in declaration order.
    pub fn in_tier(tier: ActionTier) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |a| a.tier() == tier)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a name that is not a known [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_owned()))
    }
}
