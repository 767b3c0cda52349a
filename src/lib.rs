//! # tfsum
//!
//! Classify and summarize Terraform plan output.
//!
//! tfsum ingests a plan rendered as JSON (`terraform show -json plan.tfplan`),
//! classifies each planned change into a single action with a derived impact
//! level, aggregates the results, and renders the summary in one of several
//! textual formats.
//!
//! ## Architecture
//!
//! The pipeline has two pure stages over in-memory data:
//!
//! 1. **Analyzer**: raw plan document in, [`model::PlanSummary`] out, with
//!    optional type/action/impact filters applied before aggregation.
//! 2. **Formatter**: summary plus render options in, string out, via a fixed
//!    mapping from format name to renderer.
//!
//! ## Modules
//!
//! - [`plan`]: raw plan document deserialization
//! - [`model`]: change records and the aggregated summary
//! - [`analyzer`]: classification, filtering, and aggregation
//! - [`format`]: format dispatch and the individual renderers
//! - [`config`]: `tfsum.yaml` loading and validation
//! - [`cli`]: command-line interface
//!
//! ## Example
//!
//! ```
//! use tfsum::{Analyzer, PlanDocument, RenderOptions, render};
//!
//! let document = PlanDocument::from_json(r#"{
//!     "resource_changes": [
//!         {"address": "aws_instance.web", "change": {"actions": ["create"]}}
//!     ]
//! }"#)?;
//!
//! let summary = Analyzer::new().analyze(&document)?;
//! assert_eq!(summary.resources_to_create, 1);
//!
//! let output = render(&summary, &RenderOptions::default())?;
//! assert!(output.contains("To Create: 1"));
//! # Ok::<(), tfsum::TfsumError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod plan;

pub use analyzer::{Analyzer, AnalyzerOptions};
pub use config::{ConfigParser, TfsumConfig};
pub use error::{Result, TfsumError};
pub use format::{render, DisplayOptions, OutputFormat, RenderOptions, SummaryJson};
pub use model::{ChangeAction, ChangeRecord, ImpactLevel, PlanSummary};
pub use plan::PlanDocument;
