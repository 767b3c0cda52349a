//! Configuration specification types.
//!
//! These structs map to the optional `tfsum.yaml` file. String-valued filter
//! options are validated into the core enums at conversion time, so a bad
//! impact level or action name is rejected before any analysis starts.

use serde::{Deserialize, Serialize};

use crate::analyzer::AnalyzerOptions;
use crate::error::{ConfigError, Result};
use crate::format::{DisplayOptions, OutputFormat};
use crate::model::{ChangeAction, ImpactLevel};

/// The root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TfsumConfig {
    /// Default output format when the CLI does not pass one.
    #[serde(default)]
    pub default_format: Option<String>,
    /// Resource types to drop before aggregation.
    #[serde(default)]
    pub exclude_resource_types: Vec<String>,
    /// Whitelist of resource types, applied after the exclude set.
    #[serde(default)]
    pub include_resource_types: Vec<String>,
    /// Minimum impact level a record must reach (`low`, `medium`, `high`).
    #[serde(default)]
    pub min_impact_level: Option<String>,
    /// Actions to retain (subset of the six action names).
    #[serde(default)]
    pub include_actions: Vec<String>,
    /// Display toggles.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display toggles as they appear in the configuration file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Use emoji section markers.
    #[serde(default = "default_true")]
    pub use_emojis: bool,
    /// Show resource addresses in detailed listings.
    #[serde(default = "default_true")]
    pub show_addresses: bool,
    /// Show impact markers in detailed listings.
    #[serde(default = "default_true")]
    pub show_impact: bool,
    /// Include the per-type breakdown section.
    #[serde(default = "default_true")]
    pub group_by_type: bool,
    /// Sort records by address within each action group.
    #[serde(default)]
    pub sort_by_action: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            use_emojis: true,
            show_addresses: true,
            show_impact: true,
            group_by_type: true,
            sort_by_action: false,
        }
    }
}

impl TfsumConfig {
    /// Converts the configured filters into validated analyzer options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFilterValue`] if `min_impact_level` or
    /// any entry of `include_actions` is outside the enumerated sets.
    pub fn analyzer_options(&self) -> Result<AnalyzerOptions> {
        let min_impact_level = self
            .min_impact_level
            .as_deref()
            .map(|name| {
                ImpactLevel::from_name(name).ok_or_else(|| {
                    ConfigError::invalid_filter("min_impact_level", name, &ImpactLevel::NAMES)
                })
            })
            .transpose()?;

        let mut include_actions = std::collections::BTreeSet::new();
        for name in &self.include_actions {
            let action = ChangeAction::from_name(name).ok_or_else(|| {
                ConfigError::invalid_filter("include_actions", name, &ChangeAction::NAMES)
            })?;
            include_actions.insert(action);
        }

        Ok(AnalyzerOptions {
            exclude_resource_types: self.exclude_resource_types.iter().cloned().collect(),
            include_resource_types: self.include_resource_types.iter().cloned().collect(),
            include_actions,
            min_impact_level,
        })
    }

    /// Converts the display toggles into renderer options.
    #[must_use]
    pub const fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            use_emojis: self.display.use_emojis,
            show_addresses: self.display.show_addresses,
            show_impact: self.display.show_impact,
            group_by_type: self.display.group_by_type,
            sort_by_action: self.display.sort_by_action,
        }
    }

    /// Resolves the output format: an explicit CLI value wins over the
    /// configured default, and the text format is the final fallback.
    ///
    /// # Errors
    ///
    /// Returns an unsupported-format error for unrecognized names.
    pub fn resolve_format(&self, cli_format: Option<&str>) -> Result<OutputFormat> {
        match cli_format.or(self.default_format.as_deref()) {
            Some(name) => OutputFormat::resolve(name),
            None => Ok(OutputFormat::Text),
        }
    }
}
