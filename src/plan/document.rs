//! Raw Terraform plan document model.
//!
//! These types mirror the subset of `terraform show -json` output the
//! summarizer consumes. Required fields are modeled as `Option` so a missing
//! address or action list surfaces as a malformed-record error naming the
//! offending entry, not an opaque deserialization failure.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{AnalyzeError, Result};

/// A parsed Terraform plan document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanDocument {
    /// Terraform version that produced the plan, when present.
    #[serde(default)]
    pub terraform_version: Option<String>,
    /// Raw change entries. A missing or empty list is a valid empty plan.
    #[serde(default)]
    pub resource_changes: Vec<RawChange>,
}

/// One raw change entry from the plan document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawChange {
    /// Resource address. Required; validated by the analyzer.
    #[serde(default)]
    pub address: Option<String>,
    /// Declared resource type, when present.
    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,
    /// Declared resource name, when present.
    #[serde(default)]
    pub name: Option<String>,
    /// The change block with action verbs and payloads.
    #[serde(default)]
    pub change: Option<ChangeBlock>,
}

/// The `change` block of a raw entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeBlock {
    /// Ordered list of low-level action verbs.
    #[serde(default)]
    pub actions: Option<Vec<String>>,
    /// Resource attributes before the change.
    #[serde(default)]
    pub before: Option<Value>,
    /// Resource attributes after the change.
    #[serde(default)]
    pub after: Option<Value>,
}

impl PlanDocument {
    /// Parses a plan document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: Self = serde_json::from_str(json).map_err(|e| AnalyzeError::InvalidJson {
            message: e.to_string(),
        })?;
        debug!(
            "Parsed plan document with {} change entries",
            document.resource_changes.len()
        );
        Ok(document)
    }

    /// Parses a plan document from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let document: Self =
            serde_json::from_slice(bytes).map_err(|e| AnalyzeError::InvalidJson {
                message: e.to_string(),
            })?;
        Ok(document)
    }

    /// Returns true if the document contains no change entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resource_changes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_document() {
        let json = r#"{
            "terraform_version": "1.9.0",
            "resource_changes": [
                {
                    "address": "aws_instance.web",
                    "type": "aws_instance",
                    "name": "web",
                    "change": {
                        "actions": ["create"],
                        "before": null,
                        "after": {"instance_type": "t3.micro"}
                    }
                }
            ]
        }"#;

        let document = PlanDocument::from_json(json).unwrap();
        assert_eq!(document.terraform_version.as_deref(), Some("1.9.0"));
        assert_eq!(document.resource_changes.len(), 1);

        let entry = &document.resource_changes[0];
        assert_eq!(entry.address.as_deref(), Some("aws_instance.web"));
        assert_eq!(entry.resource_type.as_deref(), Some("aws_instance"));

        let change = entry.change.as_ref().unwrap();
        assert_eq!(change.actions.as_deref(), Some(&["create".to_string()][..]));
        assert!(change.before.is_none());
        assert!(change.after.is_some());
    }

    #[test]
    fn test_missing_resource_changes_is_empty_document() {
        let document = PlanDocument::from_json("{}").unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let result = PlanDocument::from_json("not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_slice_matches_from_json() {
        let json = r#"{"resource_changes": []}"#;
        let document = PlanDocument::from_slice(json.as_bytes()).unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "format_version": "1.2",
            "planned_values": {"root_module": {}},
            "resource_changes": [
                {"address": "aws_s3_bucket.logs", "change": {"actions": ["no-op"]}}
            ]
        }"#;
        let document = PlanDocument::from_json(json).unwrap();
        assert_eq!(document.resource_changes.len(), 1);
    }
}
