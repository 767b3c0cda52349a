//! Output formatting: format dispatch and renderers.
//!
//! The engine maps a [`PlanSummary`] onto one of several textual
//! representations. Dispatch is a fixed mapping from format name to renderer
//! function; the narrative aliases (`natural`, `narrative`, `human`) resolve
//! to the same renderer, and `rich` is the text renderer with styling turned
//! on rather than a separate data path.
//!
//! Every renderer is a pure function of `(summary, options)`: deterministic,
//! safe on zero-change summaries, and read-only over the summary.

mod json;
mod narrative;
mod table;
mod text;

pub use json::SummaryJson;

use crate::error::{RenderError, Result};
use crate::model::{ChangeAction, ChangeRecord, PlanSummary};

/// Recognized output format names, including narrative aliases.
pub const RECOGNIZED_FORMATS: [&str; 7] =
    ["text", "natural", "narrative", "human", "json", "table", "rich"];

/// The output formats the engine can render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Dense symbolic summary (default).
    #[default]
    Text,
    /// Natural-language prose.
    Narrative,
    /// Machine-readable JSON.
    Json,
    /// Grid layout.
    Table,
    /// Text summary with styling markers.
    Rich,
}

impl OutputFormat {
    /// Resolves a format name, including the narrative aliases.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedFormat`] naming the requested value
    /// and the recognized set; never falls back silently.
    pub fn resolve(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "natural" | "narrative" | "human" => Ok(Self::Narrative),
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            "rich" => Ok(Self::Rich),
            _ => Err(RenderError::unsupported(name, &RECOGNIZED_FORMATS).into()),
        }
    }

    /// Returns the canonical name of this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Narrative => "narrative",
            Self::Json => "json",
            Self::Table => "table",
            Self::Rich => "rich",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Presentation toggles shared by the textual renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Use emoji section markers instead of ASCII ones.
    pub use_emojis: bool,
    /// Show resource addresses in detailed listings.
    pub show_addresses: bool,
    /// Show impact markers in detailed listings.
    pub show_impact: bool,
    /// Include the per-type breakdown section.
    pub group_by_type: bool,
    /// Sort records by address within each action group.
    pub sort_by_action: bool,
}

impl Default for DisplayOptions {
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

/// Options for one rendering call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Target output format.
    pub format: OutputFormat,
    /// Enumerate every change record grouped by action.
    pub detailed: bool,
    /// Presentation toggles.
    pub display: DisplayOptions,
}

/// Renders a summary into the format selected by `options`.
///
/// # Errors
///
/// Returns an error if JSON serialization of the summary fails.
pub fn render(summary: &PlanSummary, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Text => Ok(text::render(summary, options, false)),
        OutputFormat::Rich => Ok(text::render(summary, options, true)),
        OutputFormat::Narrative => Ok(narrative::render(summary, options)),
        OutputFormat::Json => json::render(summary),
        OutputFormat::Table => Ok(table::render(summary, options)),
    }
}

/// Groups the summary's records by action in fixed display order.
///
/// Only non-empty groups are returned. Within a group records keep input
/// order unless `sort_by_action` asks for address order.
pub(crate) fn group_by_action<'a>(
    summary: &'a PlanSummary,
    options: &RenderOptions,
) -> Vec<(ChangeAction, Vec<&'a ChangeRecord>)> {
    ChangeAction::ALL
        .iter()
        .filter_map(|&action| {
            let mut records = summary.changes_with_action(action);
            if records.is_empty() {
                return None;
            }
            if options.display.sort_by_action {
                records.sort_by(|a, b| a.address.cmp(&b.address));
            }
            Some((action, records))
        })
        .collect()
}
