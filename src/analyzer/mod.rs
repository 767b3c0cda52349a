//! Plan analysis: classification and aggregation.
//!
//! The analyzer walks the raw change entries of a [`PlanDocument`], builds
//! one classified [`ChangeRecord`] per entry, applies the configured filters,
//! and folds the retained records into a [`PlanSummary`].

mod classify;
mod filter;

pub use classify::{classify_actions, split_address};
pub use filter::AnalyzerOptions;

use tracing::{debug, info};

use crate::error::{AnalyzeError, Result};
use crate::model::{ChangeRecord, PlanSummary};
use crate::plan::{PlanDocument, RawChange};

/// Analyzer for Terraform plan documents.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: AnalyzerOptions,
}

impl Analyzer {
    /// Creates an analyzer with no filters configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with the given options.
    #[must_use]
    pub const fn with_options(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    /// Analyzes a plan document into a summary.
    ///
    /// A document with zero entries is valid and yields an all-zero summary.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::MalformedRecord`] if any entry lacks an
    /// address or an action list. Analysis aborts on the first violation;
    /// no partial summary is returned.
    pub fn analyze(&self, document: &PlanDocument) -> Result<PlanSummary> {
        if let Some(version) = &document.terraform_version {
            debug!("Analyzing plan produced by Terraform {version}");
        }

        let mut changes = Vec::with_capacity(document.resource_changes.len());
        for (index, entry) in document.resource_changes.iter().enumerate() {
            let record = Self::build_record(index, entry)?;
            if self.options.retains(&record) {
                changes.push(record);
            } else {
                debug!("Filtered out {}", record.address);
            }
        }

        let summary = PlanSummary::from_changes(changes);
        info!(
            "Analyzed {} resource changes ({} create, {} update, {} delete, {} replace)",
            summary.total_resources,
            summary.resources_to_create,
            summary.resources_to_update,
            summary.resources_to_delete,
            summary.resources_to_replace,
        );
        Ok(summary)
    }

    /// Builds a classified change record from one raw entry.
    fn build_record(index: usize, entry: &RawChange) -> Result<ChangeRecord> {
        let address = entry
            .address
            .as_deref()
            .filter(|a| !a.is_empty())
            .ok_or_else(|| AnalyzeError::malformed(index, None, "missing address"))?;

        let change = entry
            .change
            .as_ref()
            .ok_or_else(|| AnalyzeError::malformed(index, Some(address), "missing change block"))?;

        let actions = change
            .actions
            .as_deref()
            .ok_or_else(|| AnalyzeError::malformed(index, Some(address), "missing action list"))?;

        let action = classify_actions(actions);

        // Declared fields win; address splitting is only a fallback for
        // plain top-level addresses.
        let (resource_type, resource_name) = match (&entry.resource_type, &entry.name) {
            (Some(t), Some(n)) => (t.clone(), n.clone()),
            (Some(t), None) => (t.clone(), split_address(address).1),
            (None, Some(n)) => (split_address(address).0, n.clone()),
            (None, None) => split_address(address),
        };

        Ok(ChangeRecord {
            address: address.to_string(),
            resource_type,
            resource_name,
            action,
            before: change.before.clone(),
            after: change.after.clone(),
        })
    }
}
