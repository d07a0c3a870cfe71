//! Presentation transforms over a computed outcome.
//!
//! Everything here is pure: functions return strings and leave clipboard,
//! file and terminal side effects to the caller.

pub mod csv;
pub mod json;
pub mod summary;
pub mod terminal;

pub use csv::{generate_csv, CSV_HEADER};
pub use json::generate_json;
pub use summary::{generate_summary, CALL_TO_ACTION};
pub use terminal::{render_plans_table, render_terminal};

use serde::Serialize;

use crate::config::RoiAssumptions;
use crate::core::{BusinessProfile, FinancialOutcome, InvalidInputError, PaybackStatus};
use crate::model::compute_outcome;

/// A computed outcome bundled with everything that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct RoiReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    pub assumptions: RoiAssumptions,
    pub profile: BusinessProfile,
    pub outcome: FinancialOutcome,
    pub payback: PaybackStatus,
}

impl RoiReport {
    pub fn compute(
        profile: BusinessProfile,
        assumptions: RoiAssumptions,
    ) -> Result<Self, InvalidInputError> {
        let outcome = compute_outcome(&profile, &assumptions)?;
        let payback = outcome.payback_status(&profile);
        Ok(Self {
            plan: None,
            assumptions,
            profile,
            outcome,
            payback,
        })
    }

    pub fn with_plan(mut self, plan_id: impl Into<String>) -> Self {
        self.plan = Some(plan_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_carries_payback_status() {
        let profile = BusinessProfile {
            technician_count: 1,
            jobs_per_technician_per_month: 1.0,
            avg_revenue_per_job: 100.0,
            admin_hours_per_week_all_staff: 0.0,
            minutes_saved_per_job: None,
            plan_monthly_cost: 0.0,
        };
        let report = RoiReport::compute(profile, RoiAssumptions::default())
            .unwrap()
            .with_plan("starter");
        assert_eq!(report.payback, PaybackStatus::FreePlan);
        assert_eq!(report.plan.as_deref(), Some("starter"));
    }

    #[test]
    fn test_report_propagates_invalid_input() {
        let profile = BusinessProfile {
            technician_count: 0,
            jobs_per_technician_per_month: 1.0,
            avg_revenue_per_job: 100.0,
            admin_hours_per_week_all_staff: 0.0,
            minutes_saved_per_job: None,
            plan_monthly_cost: 0.0,
        };
        assert!(RoiReport::compute(profile, RoiAssumptions::default()).is_err());
    }
}
