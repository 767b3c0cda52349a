//! Record filtering options for the analyzer.
//!
//! Filters act on classified change records before aggregation, so a
//! filtered summary's counts describe only the retained records and every
//! numeric invariant still holds.

use std::collections::BTreeSet;

use crate::model::{ChangeAction, ChangeRecord, ImpactLevel};

/// Caller-supplied analysis options.
///
/// An explicit, immutable parameter object: repeated or concurrent analyses
/// with different options cannot interfere through shared state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Resource types to drop before aggregation.
    pub exclude_resource_types: BTreeSet<String>,
    /// When non-empty, a whitelist applied after the exclude set.
    pub include_resource_types: BTreeSet<String>,
    /// When non-empty, only records with these actions are retained.
    pub include_actions: BTreeSet<ChangeAction>,
    /// Minimum impact level a record must reach to be retained.
    pub min_impact_level: Option<ImpactLevel>,
}

impl AnalyzerOptions {
    /// Returns true if no filter is configured.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.exclude_resource_types.is_empty()
            && self.include_resource_types.is_empty()
            && self.include_actions.is_empty()
            && self.min_impact_level.is_none()
    }

    /// Returns true if `record` survives every configured filter.
    ///
    /// Order: exclude-by-type, then the include whitelist, then action
    /// filtering, then the impact threshold.
    #[must_use]
    pub fn retains(&self, record: &ChangeRecord) -> bool {
        if self.exclude_resource_types.contains(&record.resource_type) {
            return false;
        }

        if !self.include_resource_types.is_empty()
            && !self.include_resource_types.contains(&record.resource_type)
        {
            return false;
        }

        if !self.include_actions.is_empty() && !self.include_actions.contains(&record.action) {
            return false;
        }

        if let Some(minimum) = self.min_impact_level {
            if record.impact() < minimum {
                return false;
            }
        }

        true
    }
}
