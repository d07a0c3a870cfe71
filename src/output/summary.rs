//! Plain-text summary for copy-paste sharing.

use crate::core::{BusinessProfile, FinancialOutcome};
use crate::formatting::{format_currency, format_number, format_percent};

pub const CALL_TO_ACTION: &str =
    "Start your free trial today and put these savings to work for your field team.";

/// Render the fixed summary template for `profile` and `outcome`.
pub fn generate_summary(profile: &BusinessProfile, outcome: &FinancialOutcome) -> String {
    let mut out = String::from("ROI Summary\n===========\n\n");

    out.push_str("Business Inputs\n");
    item(&mut out, "Technicians", profile.technician_count.to_string());
    item(
        &mut out,
        "Jobs per technician per month",
        format_number(profile.jobs_per_technician_per_month),
    );
    item(
        &mut out,
        "Total jobs per month",
        format_number(outcome.total_jobs_per_month as f64),
    );
    item(
        &mut out,
        "Average revenue per job",
        format_currency(profile.avg_revenue_per_job),
    );
    item(
        &mut out,
        "Monthly revenue",
        format_currency(outcome.monthly_revenue as f64),
    );
    if let Some(minutes) = profile.minutes_saved_per_job {
        item(&mut out, "Minutes saved per job", format_number(minutes));
    }
    item(
        &mut out,
        "Admin hours per week (all staff)",
        format_number(profile.admin_hours_per_week_all_staff),
    );
    item(
        &mut out,
        "Plan cost per month",
        format_currency(profile.plan_monthly_cost),
    );

    out.push_str("\nTime Savings\n");
    item(
        &mut out,
        "Hours saved per month",
        format_number(outcome.time_saved_hours_per_month as f64),
    );
    item(
        &mut out,
        "Value of time saved",
        format_currency(outcome.time_savings_value as f64),
    );

    out.push_str("\nFinancial Outcome\n");
    item(
        &mut out,
        "Recovered revenue",
        format_currency(outcome.recovered_revenue as f64),
    );
    item(
        &mut out,
        "Cash flow gain",
        format_currency(outcome.cashflow_gain as f64),
    );
    item(
        &mut out,
        "Net monthly benefit",
        format_currency(outcome.net_monthly_benefit as f64),
    );
    item(
        &mut out,
        "Annual net benefit",
        format_currency(outcome.annual_net_benefit as f64),
    );
    item(
        &mut out,
        "Payback period",
        outcome.payback_status(profile).describe(),
    );
    item(
        &mut out,
        "Return on investment",
        format_percent(outcome.roi_percent as f64),
    );

    out.push('\n');
    out.push_str(CALL_TO_ACTION);
    out.push('\n');
    out
}

/// Append one `- label: value` line.
fn item(out: &mut String, label: &str, value: String) {
    out.push_str("- ");
    out.push_str(label);
    out.push_str(": ");
    out.push_str(&value);
    out.push('\n');
}
