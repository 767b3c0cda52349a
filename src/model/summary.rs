//! Aggregated plan summary types.
//!
//! A [`PlanSummary`] is built once per analysis from the final list of
//! classified change records. All counts are derived in the constructor, so
//! the numeric invariants (action counts, impact counts, and the per-type
//! breakdown each summing to the total) hold by construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::change::{ChangeAction, ChangeRecord, ImpactLevel};

/// Per-action counts for one resource type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeActionCounts {
    /// Resources of this type to create.
    #[serde(default)]
    pub create: usize,
    /// Resources of this type to update in place.
    #[serde(default)]
    pub update: usize,
    /// Resources of this type to delete.
    #[serde(default)]
    pub delete: usize,
    /// Resources of this type to replace.
    #[serde(default)]
    pub replace: usize,
    /// Resources of this type left untouched.
    #[serde(default, rename = "no-op")]
    pub no_op: usize,
    /// Data sources of this type to read.
    #[serde(default)]
    pub read: usize,
}

impl TypeActionCounts {
    /// Increments the counter for `action`.
    pub const fn record(&mut self, action: ChangeAction) {
        match action {
            ChangeAction::Create => self.create += 1,
            ChangeAction::Update => self.update += 1,
            ChangeAction::Delete => self.delete += 1,
            ChangeAction::Replace => self.replace += 1,
            ChangeAction::NoOp => self.no_op += 1,
            ChangeAction::Read => self.read += 1,
        }
    }

    /// Returns the count for `action`.
    #[must_use]
    pub const fn count(&self, action: ChangeAction) -> usize {
        match action {
            ChangeAction::Create => self.create,
            ChangeAction::Update => self.update,
            ChangeAction::Delete => self.delete,
            ChangeAction::Replace => self.replace,
            ChangeAction::NoOp => self.no_op,
            ChangeAction::Read => self.read,
        }
    }

    /// Returns the total number of resources of this type.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.create + self.update + self.delete + self.replace + self.no_op + self.read
    }
}

/// Counts of change records per impact level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactCounts {
    /// Destructive changes (deletions and replacements).
    pub high: usize,
    /// In-place modifications.
    pub medium: usize,
    /// Additive or inert changes.
    pub low: usize,
}

impl ImpactCounts {
    /// Increments the counter for `level`.
    pub const fn record(&mut self, level: ImpactLevel) {
        match level {
            ImpactLevel::High => self.high += 1,
            ImpactLevel::Medium => self.medium += 1,
            ImpactLevel::Low => self.low += 1,
        }
    }

    /// Returns the count for `level`.
    #[must_use]
    pub const fn count(&self, level: ImpactLevel) -> usize {
        match level {
            ImpactLevel::High => self.high,
            ImpactLevel::Medium => self.medium,
            ImpactLevel::Low => self.low,
        }
    }

    /// Returns the total across all levels.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// The aggregate result of analyzing an entire plan.
///
/// Read-only after construction; renderers take shared references.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanSummary {
    /// Total number of change records.
    pub total_resources: usize,
    /// Resources to create.
    pub resources_to_create: usize,
    /// Resources to update in place.
    pub resources_to_update: usize,
    /// Resources to delete.
    pub resources_to_delete: usize,
    /// Resources to destroy and recreate.
    pub resources_to_replace: usize,
    /// Resources left untouched.
    pub resources_no_change: usize,
    /// Data sources to read.
    pub resources_read: usize,
    /// Per-resource-type, per-action counts, keyed by type name ascending.
    pub breakdown: BTreeMap<String, TypeActionCounts>,
    /// Counts per impact level.
    pub impact: ImpactCounts,
    /// All change records in input order.
    pub changes: Vec<ChangeRecord>,
}

impl PlanSummary {
    /// Builds a summary from a list of classified change records.
    ///
    /// The records keep their input order; every count is folded from them
    /// in a single pass.
    #[must_use]
    pub fn from_changes(changes: Vec<ChangeRecord>) -> Self {
        let mut summary = Self {
            total_resources: changes.len(),
            ..Self::default()
        };

        for change in &changes {
            match change.action {
                ChangeAction::Create => summary.resources_to_create += 1,
                ChangeAction::Update => summary.resources_to_update += 1,
                ChangeAction::Delete => summary.resources_to_delete += 1,
                ChangeAction::Replace => summary.resources_to_replace += 1,
                ChangeAction::NoOp => summary.resources_no_change += 1,
                ChangeAction::Read => summary.resources_read += 1,
            }

            summary
                .breakdown
                .entry(change.resource_type.clone())
                .or_default()
                .record(change.action);

            summary.impact.record(change.impact());
        }

        summary.changes = changes;
        summary
    }

    /// Returns the count for a single action.
    #[must_use]
    pub const fn action_count(&self, action: ChangeAction) -> usize {
        match action {
            ChangeAction::Create => self.resources_to_create,
            ChangeAction::Update => self.resources_to_update,
            ChangeAction::Delete => self.resources_to_delete,
            ChangeAction::Replace => self.resources_to_replace,
            ChangeAction::NoOp => self.resources_no_change,
            ChangeAction::Read => self.resources_read,
        }
    }

    /// Returns true if the plan contains no change records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_resources == 0
    }

    /// Returns true if any record destroys an existing resource.
    #[must_use]
    pub const fn has_destructive_changes(&self) -> bool {
        self.resources_to_delete + self.resources_to_replace > 0
    }

    /// Returns all changes for a specific resource type.
    #[must_use]
    pub fn changes_of_type(&self, resource_type: &str) -> Vec<&ChangeRecord> {
        self.changes
            .iter()
            .filter(|c| c.resource_type == resource_type)
            .collect()
    }

    /// Returns all changes with a specific action.
    #[must_use]
    pub fn changes_with_action(&self, action: ChangeAction) -> Vec<&ChangeRecord> {
        self.changes.iter().filter(|c| c.action == action).collect()
    }

    /// Returns all changes at a specific impact level.
    #[must_use]
    pub fn changes_with_impact(&self, level: ImpactLevel) -> Vec<&ChangeRecord> {
        self.changes.iter().filter(|c| c.impact() == level).collect()
    }
}
