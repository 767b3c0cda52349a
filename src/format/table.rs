//! Table renderer: overview, breakdown, and impact grids.

use tabled::{Table, Tabled};

use crate::model::PlanSummary;

use super::{group_by_action, RenderOptions};

/// Overview metric row.
#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
}

/// Per-resource-type breakdown row.
#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Resource Type")]
    resource_type: String,
    #[tabled(rename = "Total")]
    total: usize,
    #[tabled(rename = "Create")]
    create: usize,
    #[tabled(rename = "Update")]
    update: usize,
    #[tabled(rename = "Delete")]
    delete: usize,
    #[tabled(rename = "Replace")]
    replace: usize,
    #[tabled(rename = "No-op")]
    no_op: usize,
    #[tabled(rename = "Read")]
    read: usize,
}

/// Impact analysis row.
#[derive(Tabled)]
struct ImpactRow {
    #[tabled(rename = "Impact Level")]
    level: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
}

/// Per-record row for the detailed listing.
#[derive(Tabled)]
struct ChangeRow {
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Resource Type")]
    resource_type: String,
    #[tabled(rename = "Action")]
    action: &'static str,
    #[tabled(rename = "Impact")]
    impact: &'static str,
}

/// Renders the summary as a set of grids.
#[must_use]
pub fn render(summary: &PlanSummary, options: &RenderOptions) -> String {
    let overview = Table::new([
        MetricRow { metric: "Total Resources", count: summary.total_resources },
        MetricRow { metric: "To Create", count: summary.resources_to_create },
        MetricRow { metric: "To Update", count: summary.resources_to_update },
        MetricRow { metric: "To Delete", count: summary.resources_to_delete },
        MetricRow { metric: "To Replace", count: summary.resources_to_replace },
        MetricRow { metric: "No Changes", count: summary.resources_no_change },
    ])
    .to_string();

    let breakdown = if summary.breakdown.is_empty() {
        "No resource changes found.".to_string()
    } else {
        let rows: Vec<BreakdownRow> = summary
            .breakdown
            .iter()
            .map(|(resource_type, counts)| BreakdownRow {
                resource_type: resource_type.clone(),
                total: counts.total(),
                create: counts.create,
                update: counts.update,
                delete: counts.delete,
                replace: counts.replace,
                no_op: counts.no_op,
                read: counts.read,
            })
            .collect();
        Table::new(rows).to_string()
    };

    let impact = Table::new([
        ImpactRow { level: "High Impact", count: summary.impact.high },
        ImpactRow { level: "Medium Impact", count: summary.impact.medium },
        ImpactRow { level: "Low Impact", count: summary.impact.low },
    ])
    .to_string();

    let mut output = format!(
        "Terraform Plan Summary\n\
         ======================\n\
         \n\
         Overview:\n\
         {overview}\n\
         \n\
         Resource Breakdown:\n\
         {breakdown}\n\
         \n\
         Impact Analysis:\n\
         {impact}\n"
    );

    if options.detailed && !summary.changes.is_empty() {
        // Rows follow the fixed action group order shared by the other
        // detailed listings.
        let rows: Vec<ChangeRow> = group_by_action(summary, options)
            .into_iter()
            .flat_map(|(action, records)| {
                records.into_iter().map(move |record| ChangeRow {
                    address: record.address.clone(),
                    resource_type: record.resource_type.clone(),
                    action: action.as_str(),
                    impact: record.impact().as_str(),
                })
            })
            .collect();
        let changes = Table::new(rows).to_string();
        output.push_str(&format!("\nDetailed Resource Changes:\n{changes}\n"));
    }

    output
}
