use serde::{Deserialize, Serialize};
use std::fmt;

use crate::plans::PlanTier;

/// Jobs each technician completes per month when seeding from a plan tier.
pub const DEFAULT_JOBS_PER_TECHNICIAN: f64 = 30.0;
/// Average revenue per job (INR) when seeding from a plan tier.
pub const DEFAULT_AVG_REVENUE_PER_JOB: f64 = 1200.0;
/// Weekly admin hours across all staff when seeding from a plan tier.
pub const DEFAULT_ADMIN_HOURS_PER_WEEK: f64 = 20.0;
/// Minutes of paperwork saved per job when seeding from a plan tier.
pub const DEFAULT_MINUTES_SAVED_PER_JOB: f64 = 15.0;

/// How monthly time savings are derived.
///
/// Each model reads its own input field from [`BusinessProfile`]:
/// - `AdminHoursFraction` uses `admin_hours_per_week_all_staff`
/// - `PerJobMinutes` uses `minutes_saved_per_job`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSavingsModel {
    /// A fixed fraction of weekly admin hours, scaled to a month
    #[default]
    AdminHoursFraction,
    /// Minutes saved on every job, summed over the month's jobs
    PerJobMinutes,
}

impl TimeSavingsModel {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeSavingsModel::AdminHoursFraction => "admin_hours_fraction",
            TimeSavingsModel::PerJobMinutes => "per_job_minutes",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "admin_hours_fraction" | "admin_hours" => Some(TimeSavingsModel::AdminHoursFraction),
            "per_job_minutes" | "per_job" => Some(TimeSavingsModel::PerJobMinutes),
            _ => None,
        }
    }
}

impl fmt::Display for TimeSavingsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating scale of one organization, as entered in the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub technician_count: u32,
    pub jobs_per_technician_per_month: f64,
    pub avg_revenue_per_job: f64,
    #[serde(default)]
    pub admin_hours_per_week_all_staff: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes_saved_per_job: Option<f64>,
    #[serde(default)]
    pub plan_monthly_cost: f64,
}

impl BusinessProfile {
    /// Seed a profile from a plan tier: the tier's technician ceiling and
    /// price, plus typical per-job figures.
    pub fn from_plan(tier: &PlanTier) -> Self {
        Self {
            technician_count: tier.max_technicians,
            jobs_per_technician_per_month: DEFAULT_JOBS_PER_TECHNICIAN,
            avg_revenue_per_job: DEFAULT_AVG_REVENUE_PER_JOB,
            admin_hours_per_week_all_staff: DEFAULT_ADMIN_HOURS_PER_WEEK,
            minutes_saved_per_job: Some(DEFAULT_MINUTES_SAVED_PER_JOB),
            plan_monthly_cost: tier.monthly_price,
        }
    }
}

/// Derived financial figures for one [`BusinessProfile`].
///
/// Counts, hours and money are rounded to whole units; `payback_months`
/// carries one decimal place. `payback_months == 0.0` is a sentinel for
/// "no payback" and is ambiguous on its own, see [`PaybackStatus`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialOutcome {
    pub total_jobs_per_month: u64,
    pub monthly_revenue: i64,
    pub time_saved_hours_per_month: u64,
    pub time_savings_value: i64,
    pub recovered_revenue: i64,
    pub cashflow_gain: i64,
    pub gross_monthly_benefit: i64,
    pub net_monthly_benefit: i64,
    pub annual_net_benefit: i64,
    /// Plan cost over net monthly benefit, rounded to one decimal. A positive
    /// ratio below 0.05 reports as 0.1, so 0.0 only ever means "no payback".
    pub payback_months: f64,
    pub roi_percent: i64,
}

impl FinancialOutcome {
    pub fn payback_status(&self, profile: &BusinessProfile) -> PaybackStatus {
        PaybackStatus::classify(profile.plan_monthly_cost, self.payback_months)
    }
}

/// Disambiguated payback result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PaybackStatus {
    /// The plan pays for itself after this many months
    Months { months: f64 },
    /// Net benefit never exceeds the plan cost
    NeverPaysBack,
    /// Nothing to pay back
    FreePlan,
}

impl PaybackStatus {
    pub fn classify(plan_monthly_cost: f64, payback_months: f64) -> Self {
        if plan_monthly_cost <= 0.0 {
            PaybackStatus::FreePlan
        } else if payback_months > 0.0 {
            PaybackStatus::Months {
                months: payback_months,
            }
        } else {
            PaybackStatus::NeverPaysBack
        }
    }

    pub fn describe(&self) -> String {
        match self {
            PaybackStatus::Months { months } => format!("{months:.1} months"),
            PaybackStatus::NeverPaysBack => "Not recoverable at current inputs".to_string(),
            PaybackStatus::FreePlan => "Immediate (no plan cost)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plans::find_plan;

    #[test]
    fn test_time_savings_model_parse_accepts_cli_spellings() {
        assert_eq!(
            TimeSavingsModel::parse("admin-hours-fraction"),
            Some(TimeSavingsModel::AdminHoursFraction)
        );
        assert_eq!(
            TimeSavingsModel::parse("PER_JOB_MINUTES"),
            Some(TimeSavingsModel::PerJobMinutes)
        );
        assert_eq!(TimeSavingsModel::parse("hourly"), None);
    }

    #[test]
    fn test_from_plan_uses_tier_ceiling_and_price() {
        let tier = find_plan("growth").unwrap();
        let profile = BusinessProfile::from_plan(tier);
        assert_eq!(profile.technician_count, tier.max_technicians);
        assert_eq!(profile.plan_monthly_cost, tier.monthly_price);
        assert_eq!(profile.minutes_saved_per_job, Some(15.0));
    }

    #[test]
    fn test_payback_status_separates_free_plan_from_never() {
        assert_eq!(PaybackStatus::classify(0.0, 0.0), PaybackStatus::FreePlan);
        assert_eq!(
            PaybackStatus::classify(2999.0, 0.0),
            PaybackStatus::NeverPaysBack
        );
        assert_eq!(
            PaybackStatus::classify(2999.0, 0.7),
            PaybackStatus::Months { months: 0.7 }
        );
    }

    #[test]
    fn test_payback_status_describe() {
        assert_eq!(
            PaybackStatus::Months { months: 2.0 }.describe(),
            "2.0 months"
        );
        assert_eq!(
            PaybackStatus::NeverPaysBack.describe(),
            "Not recoverable at current inputs"
        );
    }

    #[test]
    fn test_profile_deserializes_without_optional_fields() {
        let json = r#"{
            "technician_count": 3,
            "jobs_per_technician_per_month": 25,
            "avg_revenue_per_job": 900
        }"#;
        let profile: BusinessProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.technician_count, 3);
        assert_eq!(profile.admin_hours_per_week_all_staff, 0.0);
        assert_eq!(profile.minutes_saved_per_job, None);
        assert_eq!(profile.plan_monthly_cost, 0.0);
    }
}
