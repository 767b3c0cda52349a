//! Dense text renderer, with optional styling for the rich format.

use colored::{Color, Colorize};
use std::fmt::Write;

use crate::model::{ChangeAction, ImpactLevel, PlanSummary};

use super::{group_by_action, RenderOptions};

/// Renders the symbolic text summary. `styled` enables color markers and is
/// the only difference between the `text` and `rich` formats.
#[must_use]
pub fn render(summary: &PlanSummary, options: &RenderOptions, styled: bool) -> String {
    let mut output = String::new();
    let display = &options.display;

    let header = if display.use_emojis {
        "\u{1f4cb} Terraform Plan Summary"
    } else {
        "Terraform Plan Summary"
    };
    let _ = writeln!(output, "{header}");
    let _ = writeln!(output, "{}", "=".repeat(40));
    output.push('\n');

    let overview = if display.use_emojis { "\u{1f50d} Overview:" } else { "Overview:" };
    let _ = writeln!(output, "{overview}");
    let _ = writeln!(output, "  \u{2022} Total Resources: {}", summary.total_resources);
    let _ = writeln!(
        output,
        "  \u{2022} To Create: {}",
        tinted(summary.resources_to_create, Color::Green, styled)
    );
    let _ = writeln!(
        output,
        "  \u{2022} To Update: {}",
        tinted(summary.resources_to_update, Color::Yellow, styled)
    );
    let _ = writeln!(
        output,
        "  \u{2022} To Delete: {}",
        tinted(summary.resources_to_delete, Color::Red, styled)
    );
    let _ = writeln!(
        output,
        "  \u{2022} To Replace: {}",
        tinted(summary.resources_to_replace, Color::Red, styled)
    );
    let _ = writeln!(output, "  \u{2022} No Changes: {}", summary.resources_no_change);
    if summary.resources_read > 0 {
        let _ = writeln!(output, "  \u{2022} To Read: {}", summary.resources_read);
    }
    output.push('\n');

    if display.group_by_type && !summary.breakdown.is_empty() {
        let breakdown = if display.use_emojis {
            "\u{1f4ca} Resource Breakdown:"
        } else {
            "Resource Breakdown:"
        };
        let _ = writeln!(output, "{breakdown}");
        for (resource_type, counts) in &summary.breakdown {
            let mut parts = Vec::new();
            for action in ChangeAction::ALL {
                let count = counts.count(action);
                if count > 0 {
                    parts.push(format!("{count} {action}"));
                }
            }
            let actions = if parts.is_empty() {
                "no changes".to_string()
            } else {
                parts.join(", ")
            };
            let _ = writeln!(
                output,
                "  \u{2022} {resource_type}: {} resources ({actions})",
                counts.total()
            );
        }
        output.push('\n');
    }

    let impact = if display.use_emojis {
        "\u{26a0}\u{fe0f}  Potential Impact:"
    } else {
        "Potential Impact:"
    };
    let _ = writeln!(output, "{impact}");
    let _ = writeln!(
        output,
        "  \u{2022} High Impact: {} resources (deletions/replacements)",
        tinted(summary.impact.high, Color::Red, styled)
    );
    let _ = writeln!(
        output,
        "  \u{2022} Medium Impact: {} resources (updates)",
        tinted(summary.impact.medium, Color::Yellow, styled)
    );
    let _ = writeln!(
        output,
        "  \u{2022} Low Impact: {} resources (creations)",
        tinted(summary.impact.low, Color::Green, styled)
    );

    if options.detailed {
        output.push('\n');
        let _ = writeln!(output, "{}", "=".repeat(60));
        output.push('\n');
        render_detailed(&mut output, summary, options, styled);
    }

    output
}

/// Appends the per-record listing grouped by action in fixed order.
fn render_detailed(output: &mut String, summary: &PlanSummary, options: &RenderOptions, styled: bool) {
    let display = &options.display;
    let header = if display.use_emojis {
        "\u{1f50d} Detailed Resource Changes:"
    } else {
        "Detailed Resource Changes:"
    };
    let _ = writeln!(output, "{header}");
    output.push('\n');

    for (action, records) in group_by_action(summary, options) {
        let marker = action_marker(action, display.use_emojis);
        let heading = format!(
            "{marker} {} ({} resources):",
            action.as_str().to_uppercase(),
            records.len()
        );
        let heading = if styled {
            heading.color(action_color(action)).to_string()
        } else {
            heading
        };
        let _ = writeln!(output, "{heading}");

        for record in records {
            let label = if display.show_addresses {
                record.address.clone()
            } else {
                format!("{} {}", record.resource_type, record.resource_name)
            };
            if display.show_impact {
                let _ = writeln!(
                    output,
                    "  {} {label}",
                    impact_marker(record.impact(), display.use_emojis)
                );
            } else {
                let _ = writeln!(output, "  \u{2022} {label}");
            }
        }
        output.push('\n');
    }
}

/// Marker shown before an action group heading.
const fn action_marker(action: ChangeAction, use_emojis: bool) -> &'static str {
    if use_emojis {
        match action {
            ChangeAction::Create => "\u{1f7e2}",
            ChangeAction::Update => "\u{1f7e1}",
            ChangeAction::Delete => "\u{1f534}",
            ChangeAction::Replace => "\u{1f7e0}",
            ChangeAction::NoOp => "\u{26aa}",
            ChangeAction::Read => "\u{1f535}",
        }
    } else {
        match action {
            ChangeAction::Create => "+",
            ChangeAction::Update => "~",
            ChangeAction::Delete => "-",
            ChangeAction::Replace => "\u{b1}",
            ChangeAction::NoOp => ".",
            ChangeAction::Read => "?",
        }
    }
}

/// Marker shown before a record in the detailed listing.
const fn impact_marker(level: ImpactLevel, use_emojis: bool) -> &'static str {
    if use_emojis {
        match level {
            ImpactLevel::High => "\u{1f534}",
            ImpactLevel::Medium => "\u{1f7e1}",
            ImpactLevel::Low => "\u{1f7e2}",
        }
    } else {
        match level {
            ImpactLevel::High => "[high]",
            ImpactLevel::Medium => "[med] ",
            ImpactLevel::Low => "[low] ",
        }
    }
}

const fn action_color(action: ChangeAction) -> Color {
    match action {
        ChangeAction::Create => Color::Green,
        ChangeAction::Update => Color::Yellow,
        ChangeAction::Delete | ChangeAction::Replace => Color::Red,
        ChangeAction::NoOp | ChangeAction::Read => Color::White,
    }
}

fn tinted(value: usize, color: Color, styled: bool) -> String {
    if styled {
        value.to_string().color(color).to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DisplayOptions;
    use crate::model::ChangeRecord;

    fn record(address: &str, action: ChangeAction) -> ChangeRecord {
        let (resource_type, resource_name) = address
            .split_once('.')
            .map_or((address, address), |(t, n)| (t, n));
        ChangeRecord {
            address: address.to_string(),
            resource_type: resource_type.to_string(),
            resource_name: resource_name.to_string(),
            action,
            before: None,
            after: None,
        }
    }

    fn sample_summary() -> PlanSummary {
        PlanSummary::from_changes(vec![
            record("aws_instance.web", ChangeAction::Create),
            record("aws_security_group.web_sg", ChangeAction::Create),
            record("aws_instance.old", ChangeAction::Delete),
            record("aws_subnet.private", ChangeAction::Update),
        ])
    }

    #[test]
    fn test_basic_summary_sections() {
        let output = render(&sample_summary(), &RenderOptions::default(), false);
        assert!(output.contains("Terraform Plan Summary"));
        assert!(output.contains("Total Resources: 4"));
        assert!(output.contains("To Create: 2"));
        assert!(output.contains("To Delete: 1"));
        assert!(output.contains("Resource Breakdown:"));
        assert!(output.contains("aws_instance: 2 resources (1 create, 1 delete)"));
        assert!(output.contains("High Impact: 1 resources"));
    }

    #[test]
    fn test_detailed_listing_groups_by_action() {
        let options = RenderOptions {
            detailed: true,
            ..RenderOptions::default()
        };
        let output = render(&sample_summary(), &options, false);
        assert!(output.contains("CREATE (2 resources):"));
        assert!(output.contains("UPDATE (1 resources):"));
        assert!(output.contains("DELETE (1 resources):"));
        assert!(output.contains("aws_instance.web"));
        assert!(output.contains("aws_instance.old"));

        let create_pos = output.find("CREATE").unwrap();
        let update_pos = output.find("UPDATE").unwrap();
        let delete_pos = output.find("DELETE").unwrap();
        assert!(create_pos < update_pos && update_pos < delete_pos);
    }

    #[test]
    fn test_emoji_toggle() {
        let options = RenderOptions {
            display: DisplayOptions {
                use_emojis: false,
                ..DisplayOptions::default()
            },
            ..RenderOptions::default()
        };
        let output = render(&sample_summary(), &options, false);
        assert!(output.contains("Overview:"));
        assert!(!output.contains('\u{1f4cb}'));
    }

    #[test]
    fn test_breakdown_section_toggle() {
        let options = RenderOptions {
            display: DisplayOptions {
                group_by_type: false,
                ..DisplayOptions::default()
            },
            ..RenderOptions::default()
        };
        let output = render(&sample_summary(), &options, false);
        assert!(!output.contains("Resource Breakdown:"));
    }

    #[test]
    fn test_hidden_addresses_show_type_and_name() {
        let options = RenderOptions {
            detailed: true,
            display: DisplayOptions {
                show_addresses: false,
                ..DisplayOptions::default()
            },
            ..RenderOptions::default()
        };
        let output = render(&sample_summary(), &options, false);
        assert!(!output.contains("aws_instance.web"));
        assert!(output.contains("aws_instance web"));
    }

    #[test]
    fn test_zero_summary_renders() {
        let summary = PlanSummary::from_changes(vec![]);
        let options = RenderOptions {
            detailed: true,
            ..RenderOptions::default()
        };
        let output = render(&summary, &options, false);
        assert!(output.contains("Total Resources: 0"));
        assert!(output.contains("High Impact: 0 resources"));
    }

    #[test]
    fn test_rich_output_contains_same_sections() {
        let output = render(&sample_summary(), &RenderOptions::default(), true);
        assert!(output.contains("Terraform Plan Summary"));
        assert!(output.contains("Potential Impact"));
    }
}
