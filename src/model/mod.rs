//! Core data model for classified plan changes.
//!
//! This module contains the normalized representation of planned changes:
//! actions, impact levels, per-resource change records, and the aggregated
//! plan summary.

mod change;
mod summary;

pub use change::{ChangeAction, ChangeRecord, ImpactLevel};
pub use summary::{ImpactCounts, PlanSummary, TypeActionCounts};
