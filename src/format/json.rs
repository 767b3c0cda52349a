//! JSON renderer: machine-readable serialization of a summary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};
use crate::model::{ChangeAction, ImpactCounts, ImpactLevel, PlanSummary, TypeActionCounts};

/// Wire shape of a serialized summary.
///
/// Deserializable so consumers (and the round-trip tests) can read the
/// output back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryJson {
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
    /// Per-type, per-action counts.
    pub resource_breakdown: BTreeMap<String, TypeActionCounts>,
    /// Counts per impact level.
    pub impact_analysis: ImpactCounts,
    /// All change records in input order.
    pub changes: Vec<ChangeJson>,
}

/// Wire shape of one change record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeJson {
    /// Stable resource address.
    pub address: String,
    /// Resource type.
    pub resource_type: String,
    /// Resource name.
    pub resource_name: String,
    /// Classified action.
    pub action: ChangeAction,
    /// Impact level derived from the action.
    pub impact_level: ImpactLevel,
}

impl From<&PlanSummary> for SummaryJson {
    fn from(summary: &PlanSummary) -> Self {
        Self {
            total_resources: summary.total_resources,
            resources_to_create: summary.resources_to_create,
            resources_to_update: summary.resources_to_update,
            resources_to_delete: summary.resources_to_delete,
            resources_to_replace: summary.resources_to_replace,
            resources_no_change: summary.resources_no_change,
            resources_read: summary.resources_read,
            resource_breakdown: summary.breakdown.clone(),
            impact_analysis: summary.impact,
            changes: summary
                .changes
                .iter()
                .map(|c| ChangeJson {
                    address: c.address.clone(),
                    resource_type: c.resource_type.clone(),
                    resource_name: c.resource_name.clone(),
                    action: c.action,
                    impact_level: c.impact(),
                })
                .collect(),
        }
    }
}

/// Renders the summary as pretty-printed JSON.
pub fn render(summary: &PlanSummary) -> Result<String> {
    serde_json::to_string_pretty(&SummaryJson::from(summary))
        .map_err(|e| RenderError::Serialization { message: e.to_string() }.into())
}
