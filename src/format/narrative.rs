//! Natural-language renderer.
//!
//! Produces prose sentences instead of symbolic tallies: a plural-aware lead
//! sentence, a per-type breakdown, an impact assessment with fixed
//! explanatory clauses, and a recommendations section that only appears when
//! destructive changes are present.

use std::fmt::Write;

use crate::model::{ChangeAction, PlanSummary, TypeActionCounts};

use super::{group_by_action, RenderOptions};

/// Renders the natural-language summary.
#[must_use]
pub fn render(summary: &PlanSummary, options: &RenderOptions) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Terraform Plan Summary");
    let _ = writeln!(output, "{}", "=".repeat(50));
    output.push('\n');

    let _ = writeln!(output, "{}", lead_sentence(summary));
    output.push('\n');

    if !summary.breakdown.is_empty() {
        let _ = writeln!(output, "{}", breakdown_section(summary));
        output.push('\n');
    }

    let _ = writeln!(output, "{}", impact_section(summary, options));
    output.push('\n');

    if options.detailed {
        let _ = writeln!(output, "{}", detailed_section(summary, options));
    }

    output
}

/// Builds the lead sentence stating overall counts.
fn lead_sentence(summary: &PlanSummary) -> String {
    if summary.is_empty() {
        return "No changes are planned. Your infrastructure is already in the desired state."
            .to_string();
    }

    let mut phrases = Vec::new();
    push_phrase(
        &mut phrases,
        summary.resources_to_create,
        "1 new resource will be created",
        "new resources will be created",
    );
    push_phrase(
        &mut phrases,
        summary.resources_to_update,
        "1 existing resource will be modified",
        "existing resources will be modified",
    );
    push_phrase(
        &mut phrases,
        summary.resources_to_delete,
        "1 resource will be destroyed",
        "resources will be destroyed",
    );
    push_phrase(
        &mut phrases,
        summary.resources_to_replace,
        "1 resource will be replaced",
        "resources will be replaced",
    );
    push_phrase(
        &mut phrases,
        summary.resources_no_change,
        "1 resource will remain unchanged",
        "resources will remain unchanged",
    );
    push_phrase(
        &mut phrases,
        summary.resources_read,
        "1 data source will be read",
        "data sources will be read",
    );

    format!("In total, {}.", join_with_and(&phrases))
}

/// Builds the "Resource Changes by Type" section.
fn breakdown_section(summary: &PlanSummary) -> String {
    let mut output = String::from("Resource Changes by Type:");

    for (resource_type, counts) in &summary.breakdown {
        let phrases = type_phrases(counts);
        let actions = if phrases.is_empty() {
            "no changes".to_string()
        } else {
            join_with_and(&phrases)
        };
        let total = counts.total();
        let noun = if total == 1 { "resource" } else { "resources" };
        let _ = write!(output, "\n  \u{2022} {resource_type}: {total} {noun} ({actions})");
    }

    output
}

/// Sub-phrases for one resource type, zero counts omitted.
fn type_phrases(counts: &TypeActionCounts) -> Vec<String> {
    let mut phrases = Vec::new();
    push_phrase(&mut phrases, counts.create, "1 creation", "creations");
    push_phrase(&mut phrases, counts.update, "1 update", "updates");
    push_phrase(&mut phrases, counts.delete, "1 deletion", "deletions");
    push_phrase(&mut phrases, counts.replace, "1 replacement", "replacements");
    push_phrase(&mut phrases, counts.no_op, "1 no-change", "no-changes");
    push_phrase(&mut phrases, counts.read, "1 read", "reads");
    phrases
}

/// Builds the "Impact Assessment" section, with recommendations only when
/// destructive changes are present.
fn impact_section(summary: &PlanSummary, options: &RenderOptions) -> String {
    let mut output = String::from("Impact Assessment:");

    let high = summary.impact.high;
    if high > 0 {
        let clause = if high == 1 {
            "1 resource will be destroyed or replaced".to_string()
        } else {
            format!("{high} resources will be destroyed or replaced")
        };
        let _ = write!(output, "\n  \u{2022} High Impact: {clause}");
    }

    let medium = summary.impact.medium;
    if medium > 0 {
        let clause = if medium == 1 {
            "1 resource will be modified".to_string()
        } else {
            format!("{medium} resources will be modified")
        };
        let _ = write!(output, "\n  \u{2022} Medium Impact: {clause}");
    }

    let low = summary.impact.low;
    if low > 0 {
        let clause = if low == 1 {
            "1 new resource will be created".to_string()
        } else {
            format!("{low} new resources will be created")
        };
        let _ = write!(output, "\n  \u{2022} Low Impact: {clause}");
    }

    if summary.has_destructive_changes() {
        let header = if options.display.use_emojis {
            "\u{26a0}\u{fe0f}  Recommendations:"
        } else {
            "Recommendations:"
        };
        let _ = write!(output, "\n\n{header}");
        let destructive = summary.resources_to_delete + summary.resources_to_replace;
        let review = if destructive == 1 {
            "Review the resource that will be destroyed to ensure no data loss".to_string()
        } else {
            format!("Review the {destructive} resources that will be destroyed to ensure no data loss")
        };
        let _ = write!(output, "\n  \u{2022} {review}");
        let _ = write!(
            output,
            "\n  \u{2022} Consider backing up any important data before applying"
        );
    }

    output
}

/// Builds the detailed per-record prose listing.
fn detailed_section(summary: &PlanSummary, options: &RenderOptions) -> String {
    let mut output = String::from("Detailed Changes:");
    let _ = write!(output, "\n{}\n", "=".repeat(30));

    for (action, records) in group_by_action(summary, options) {
        let _ = write!(output, "\n{}", group_heading(action));
        for record in records {
            if options.display.show_addresses {
                let _ = write!(output, "\n  \u{2022} {} ({})", record.address, record.resource_type);
            } else {
                let _ = write!(output, "\n  \u{2022} {} {}", record.resource_type, record.resource_name);
            }
            let _ = write!(output, "\n    {}", record.description());
        }
        output.push('\n');
    }

    output
}

const fn group_heading(action: ChangeAction) -> &'static str {
    match action {
        ChangeAction::Create => "Resources to be Created:",
        ChangeAction::Update => "Resources to be Modified:",
        ChangeAction::Delete => "Resources to be Destroyed:",
        ChangeAction::Replace => "Resources to be Replaced:",
        ChangeAction::NoOp => "Resources with No Changes:",
        ChangeAction::Read => "Data Sources to be Read:",
    }
}

/// Pushes a count phrase, omitting zero counts and pluralizing the rest.
fn push_phrase(phrases: &mut Vec<String>, count: usize, singular: &str, plural_noun: &str) {
    match count {
        0 => {}
        1 => phrases.push(singular.to_string()),
        n => phrases.push(format!("{n} {plural_noun}")),
    }
}

/// Joins phrases with commas and a final "and".
fn join_with_and(phrases: &[String]) -> String {
    match phrases {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{DisplayOptions, RenderOptions};
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
    fn test_lead_sentence_plural_aware() {
        let summary = sample_summary();
        let lead = lead_sentence(&summary);
        assert_eq!(
            lead,
            "In total, 2 new resources will be created, \
             1 existing resource will be modified, and 1 resource will be destroyed."
        );
    }

    #[test]
    fn test_lead_sentence_singular() {
        let summary = PlanSummary::from_changes(vec![record("aws_instance.web", ChangeAction::Create)]);
        assert_eq!(lead_sentence(&summary), "In total, 1 new resource will be created.");
    }

    #[test]
    fn test_lead_sentence_two_phrases_uses_plain_and() {
        let summary = PlanSummary::from_changes(vec![
            record("aws_instance.web", ChangeAction::Create),
            record("aws_instance.old", ChangeAction::Delete),
        ]);
        assert_eq!(
            lead_sentence(&summary),
            "In total, 1 new resource will be created and 1 resource will be destroyed."
        );
    }

    #[test]
    fn test_zero_changes_sentence() {
        let summary = PlanSummary::from_changes(vec![]);
        assert!(lead_sentence(&summary).starts_with("No changes are planned."));
    }

    #[test]
    fn test_breakdown_omits_zero_subphrases() {
        let summary = sample_summary();
        let section = breakdown_section(&summary);
        assert!(section.contains("aws_instance: 2 resources (1 creation and 1 deletion)"));
        assert!(section.contains("aws_security_group: 1 resource (1 creation)"));
        assert!(section.contains("aws_subnet: 1 resource (1 update)"));
        assert!(!section.contains("0 "));
    }

    #[test]
    fn test_impact_section_clauses() {
        let section = impact_section(&sample_summary(), &RenderOptions::default());
        assert!(section.contains("High Impact: 1 resource will be destroyed or replaced"));
        assert!(section.contains("Medium Impact: 1 resource will be modified"));
        assert!(section.contains("Low Impact: 2 new resources will be created"));
    }

    #[test]
    fn test_recommendations_only_with_destructive_changes() {
        let with_delete = render(&sample_summary(), &RenderOptions::default());
        assert!(with_delete.contains("Recommendations:"));
        assert!(with_delete.contains("Review the resource that will be destroyed"));

        let creates_only = PlanSummary::from_changes(vec![
            record("aws_instance.web", ChangeAction::Create),
            record("aws_subnet.private", ChangeAction::Update),
        ]);
        let output = render(&creates_only, &RenderOptions::default());
        assert!(!output.contains("Recommendations:"));
    }

    #[test]
    fn test_replace_counts_as_destructive() {
        let summary = PlanSummary::from_changes(vec![record("aws_instance.db", ChangeAction::Replace)]);
        let output = render(&summary, &RenderOptions::default());
        assert!(output.contains("Recommendations:"));
        assert!(output.contains("1 resource will be replaced"));
    }

    #[test]
    fn test_detailed_enumerates_every_record_exactly_once() {
        let summary = sample_summary();
        let options = RenderOptions {
            detailed: true,
            ..RenderOptions::default()
        };
        let output = render(&summary, &options);

        for change in &summary.changes {
            assert_eq!(
                output.matches(change.address.as_str()).count(),
                1,
                "{} should appear exactly once",
                change.address
            );
        }

        let created = output.find("Resources to be Created:").unwrap();
        let modified = output.find("Resources to be Modified:").unwrap();
        let destroyed = output.find("Resources to be Destroyed:").unwrap();
        assert!(created < modified && modified < destroyed);
    }

    #[test]
    fn test_emoji_toggle_in_recommendations() {
        let options = RenderOptions {
            display: DisplayOptions {
                use_emojis: false,
                ..DisplayOptions::default()
            },
            ..RenderOptions::default()
        };
        let output = render(&sample_summary(), &options);
        assert!(output.contains("Recommendations:"));
        assert!(!output.contains('\u{26a0}'));
    }

    #[test]
    fn test_join_with_and() {
        let one = vec!["a".to_string()];
        let two = vec!["a".to_string(), "b".to_string()];
        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(join_with_and(&one), "a");
        assert_eq!(join_with_and(&two), "a and b");
        assert_eq!(join_with_and(&three), "a, b, and c");
    }
}
