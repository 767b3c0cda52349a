//! Change actions, impact levels, and the per-resource change record.
//!
//! These are the leaf types of the summarizer: one [`ChangeRecord`] per
//! planned resource change, carrying exactly one classified [`ChangeAction`].
//! The [`ImpactLevel`] is never stored; it is always derived from the action
//! so the two can never disagree.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The classified action a change record represents.
///
/// The declaration order is the fixed display order used by renderers when
/// grouping records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    /// A new resource will be created.
    Create,
    /// An existing resource will be modified in place.
    Update,
    /// An existing resource will be destroyed.
    Delete,
    /// An existing resource will be destroyed and recreated.
    Replace,
    /// The resource is left untouched.
    #[serde(rename = "no-op")]
    NoOp,
    /// The resource is only read (data sources).
    Read,
}

/// Risk tier derived from a change action, used to prioritize review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    /// Additive or inert changes.
    Low,
    /// In-place modifications.
    Medium,
    /// Destructive changes (deletions and replacements).
    High,
}

impl ChangeAction {
    /// All actions in display order.
    pub const ALL: [Self; 6] = [
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Replace,
        Self::NoOp,
        Self::Read,
    ];

    /// Names accepted by [`Self::from_name`].
    pub const NAMES: [&'static str; 6] = ["create", "update", "delete", "replace", "no-op", "read"];

    /// Returns the canonical lowercase name of this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Replace => "replace",
            Self::NoOp => "no-op",
            Self::Read => "read",
        }
    }

    /// Looks up an action by its canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            "replace" => Some(Self::Replace),
            "no-op" => Some(Self::NoOp),
            "read" => Some(Self::Read),
            _ => None,
        }
    }

    /// Returns the impact level this action implies.
    ///
    /// Deletions and replacements are high impact, in-place updates are
    /// medium, everything else is low.
    #[must_use]
    pub const fn impact(self) -> ImpactLevel {
        match self {
            Self::Delete | Self::Replace => ImpactLevel::High,
            Self::Update => ImpactLevel::Medium,
            Self::Create | Self::NoOp | Self::Read => ImpactLevel::Low,
        }
    }

    /// Returns true if this action destroys an existing resource.
    #[must_use]
    pub const fn is_destructive(self) -> bool {
        matches!(self, Self::Delete | Self::Replace)
    }
}

impl ImpactLevel {
    /// All levels in ascending severity order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Names accepted by [`Self::from_name`].
    pub const NAMES: [&'static str; 3] = ["low", "medium", "high"];

    /// Returns the canonical lowercase name of this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Looks up a level by its canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One planned change to one resource.
///
/// Constructed once by the analyzer from a raw plan entry and immutable
/// afterward; renderers only ever take shared references.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRecord {
    /// Stable resource address, unique within one plan.
    pub address: String,
    /// Resource type (e.g. `aws_instance`).
    pub resource_type: String,
    /// Resource name within its type.
    pub resource_name: String,
    /// The classified action.
    pub action: ChangeAction,
    /// Resource attributes before the change, if the resource existed.
    pub before: Option<Value>,
    /// Resource attributes after the change, if the resource will exist.
    pub after: Option<Value>,
}

impl ChangeRecord {
    /// Returns the impact level of this change, derived from its action.
    #[must_use]
    pub const fn impact(&self) -> ImpactLevel {
        self.action.impact()
    }

    /// Returns a one-line prose description of this change.
    #[must_use]
    pub fn description(&self) -> String {
        match self.action {
            ChangeAction::Create => {
                format!("This will create a new {} resource.", self.resource_type)
            }
            ChangeAction::Update => {
                format!("This will update the existing {} resource.", self.resource_type)
            }
            ChangeAction::Delete => {
                format!("This will permanently delete the {} resource.", self.resource_type)
            }
            ChangeAction::Replace => format!(
                "This will destroy and recreate the {} resource.",
                self.resource_type
            ),
            ChangeAction::NoOp => {
                format!("This {} resource will remain unchanged.", self.resource_type)
            }
            ChangeAction::Read => {
                format!("This will read the {} data source.", self.resource_type)
            }
        }
    }
}
