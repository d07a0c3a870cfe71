//! CSV export.
//!
//! Layout: a `Metric,Value,Unit` header, then three groups of rows
//! (business inputs, time savings, financial outcome) separated by a blank
//! line. Values are raw numbers without grouping separators so spreadsheets
//! read them as numbers.

use crate::core::{BusinessProfile, FinancialOutcome};

pub const CSV_HEADER: [&str; 3] = ["Metric", "Value", "Unit"];

const UNIT_CURRENCY: &str = "INR";
const UNIT_COUNT: &str = "count";
const UNIT_HOURS: &str = "hours";
const UNIT_MINUTES: &str = "minutes";
const UNIT_MONTHS: &str = "months";
const UNIT_PERCENT: &str = "%";

type Row = (&'static str, String, &'static str);

/// Render `profile` and `outcome` as CSV with `\n` line endings.
pub fn generate_csv(profile: &BusinessProfile, outcome: &FinancialOutcome) -> String {
    let groups = [
        input_rows(profile),
        time_savings_rows(outcome),
        outcome_rows(outcome),
    ];

    let mut out = String::new();
    push_record(&mut out, &CSV_HEADER);
    for (index, rows) in groups.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for (metric, value, unit) in rows {
            push_record(&mut out, &[*metric, value.as_str(), *unit]);
        }
    }
    out
}

fn input_rows(profile: &BusinessProfile) -> Vec<Row> {
    let mut rows = vec![
        (
            "Technicians",
            profile.technician_count.to_string(),
            UNIT_COUNT,
        ),
        (
            "Jobs per technician per month",
            number(profile.jobs_per_technician_per_month),
            UNIT_COUNT,
        ),
        (
            "Average revenue per job",
            number(profile.avg_revenue_per_job),
            UNIT_CURRENCY,
        ),
        (
            "Admin hours per week (all staff)",
            number(profile.admin_hours_per_week_all_staff),
            UNIT_HOURS,
        ),
    ];
    if let Some(minutes) = profile.minutes_saved_per_job {
        rows.push(("Minutes saved per job", number(minutes), UNIT_MINUTES));
    }
    rows.push((
        "Plan cost per month",
        number(profile.plan_monthly_cost),
        UNIT_CURRENCY,
    ));
    rows
}

fn time_savings_rows(outcome: &FinancialOutcome) -> Vec<Row> {
    vec![
        (
            "Hours saved per month",
            outcome.time_saved_hours_per_month.to_string(),
            UNIT_HOURS,
        ),
        (
            "Value of time saved",
            outcome.time_savings_value.to_string(),
            UNIT_CURRENCY,
        ),
    ]
}

fn outcome_rows(outcome: &FinancialOutcome) -> Vec<Row> {
    vec![
        (
            "Total jobs per month",
            outcome.total_jobs_per_month.to_string(),
            UNIT_COUNT,
        ),
        (
            "Monthly revenue",
            outcome.monthly_revenue.to_string(),
            UNIT_CURRENCY,
        ),
        (
            "Recovered revenue",
            outcome.recovered_revenue.to_string(),
            UNIT_CURRENCY,
        ),
        (
            "Cash flow gain",
            outcome.cashflow_gain.to_string(),
            UNIT_CURRENCY,
        ),
        (
            "Net monthly benefit",
            outcome.net_monthly_benefit.to_string(),
            UNIT_CURRENCY,
        ),
        (
            "Annual net benefit",
            outcome.annual_net_benefit.to_string(),
            UNIT_CURRENCY,
        ),
        (
            "Payback period",
            format!("{:.1}", outcome.payback_months),
            UNIT_MONTHS,
        ),
        ("ROI", outcome.roi_percent.to_string(), UNIT_PERCENT),
    ]
}

/// Plain decimal rendering: integers without a fraction, otherwise as-is.
fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn push_record(out: &mut String, fields: &[&str]) {
    let encoded: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    out.push_str(&encoded.join(","));
    out.push('\n');
}

/// Quote a field when it contains a separator, quote or line break.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
