//! Table rendering for interactive terminals.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use super::RoiReport;
use crate::formatting::{format_currency, format_number, format_percent, OutputFormatter};
use crate::plans::PlanTier;

pub fn render_terminal(report: &RoiReport, formatter: &dyn OutputFormatter) -> String {
    let profile = &report.profile;
    let outcome = &report.outcome;

    let mut table = new_table(["Metric", "Value"]);
    add_section(
        &mut table,
        "Business inputs",
        vec![
            ("Technicians", profile.technician_count.to_string()),
            (
                "Jobs per technician / month",
                format_number(profile.jobs_per_technician_per_month),
            ),
            (
                "Revenue per job",
                format_currency(profile.avg_revenue_per_job),
            ),
            ("Plan cost / month", format_currency(profile.plan_monthly_cost)),
        ],
    );
    add_section(
        &mut table,
        "Time savings",
        vec![
            (
                "Hours saved / month",
                format_number(outcome.time_saved_hours_per_month as f64),
            ),
            (
                "Value of time saved",
                format_currency(outcome.time_savings_value as f64),
            ),
        ],
    );
    add_section(
        &mut table,
        "Financial outcome",
        vec![
            (
                "Monthly revenue",
                format_currency(outcome.monthly_revenue as f64),
            ),
            (
                "Recovered revenue",
                format_currency(outcome.recovered_revenue as f64),
            ),
            ("Cash flow gain", format_currency(outcome.cashflow_gain as f64)),
            (
                "Gross monthly benefit",
                format_currency(outcome.gross_monthly_benefit as f64),
            ),
        ],
    );

    let net = outcome.net_monthly_benefit as f64;
    let mut out = String::new();
    out.push_str(&formatter.header("ROI Calculator"));
    out.push_str(&format!(
        " {}\n",
        formatter.dim(&format!("({} model)", report.assumptions.time_savings_model))
    ));
    out.push_str(&table.to_string());
    out.push('\n');
    out.push_str(&format!(
        "{} {}\n",
        formatter.bold("Net monthly benefit:"),
        formatter.signed(&format_currency(net), net)
    ));
    out.push_str(&format!(
        "{} {}\n",
        formatter.bold("Annual net benefit:"),
        formatter.signed(&format_currency(outcome.annual_net_benefit as f64), net)
    ));
    out.push_str(&format!(
        "{} {}\n",
        formatter.bold("Payback:"),
        report.payback.describe()
    ));
    out.push_str(&format!(
        "{} {}\n",
        formatter.bold("ROI:"),
        formatter.signed(
            &format_percent(outcome.roi_percent as f64),
            outcome.roi_percent as f64
        )
    ));
    out
}

pub fn render_plans_table(plans: &[PlanTier]) -> String {
    let mut table = new_table(["Id", "Plan", "Price / month", "Max technicians"]);
    for tier in plans {
        table.add_row(vec![
            Cell::new(tier.id),
            Cell::new(tier.name),
            Cell::new(format_currency(tier.monthly_price)).set_alignment(CellAlignment::Right),
            Cell::new(tier.max_technicians).set_alignment(CellAlignment::Right),
        ]);
    }
    table.to_string()
}

fn add_section(table: &mut Table, title: &str, rows: Vec<(&str, String)>) {
    table.add_row(vec![Cell::new(title), Cell::new("")]);
    for (metric, value) in rows {
        table.add_row(vec![
            Cell::new(format!("  {metric}")),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
}

fn new_table<const N: usize>(header: [&str; N]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}
