//! Raw plan document parsing.
//!
//! This module deserializes Terraform plan JSON into the raw document model
//! the analyzer consumes.

mod document;

pub use document::{ChangeBlock, PlanDocument, RawChange};
