//! The ROI model.
//!
//! [`compute_outcome`] is a pure function of a [`BusinessProfile`] and a set
//! of [`RoiAssumptions`]. All arithmetic runs on unrounded `f64` values;
//! rounding is applied once, when the [`FinancialOutcome`] is assembled.
//!
//! ```
//! use roicalc::config::RoiAssumptions;
//! use roicalc::core::BusinessProfile;
//! use roicalc::model::compute_outcome;
//!
//! let profile = BusinessProfile {
//!     technician_count: 10,
//!     jobs_per_technician_per_month: 30.0,
//!     avg_revenue_per_job: 1200.0,
//!     admin_hours_per_week_all_staff: 20.0,
//!     minutes_saved_per_job: None,
//!     plan_monthly_cost: 2999.0,
//! };
//! let outcome = compute_outcome(&profile, &RoiAssumptions::default()).unwrap();
//! assert_eq!(outcome.monthly_revenue, 360_000);
//! ```

mod validation;

pub use validation::validate_profile;

use tracing::debug;

use crate::config::RoiAssumptions;
use crate::core::{BusinessProfile, FinancialOutcome, InvalidInputError, TimeSavingsModel};

const MONTHS_PER_YEAR: f64 = 12.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Compute the financial outcome of `profile` under `assumptions`.
///
/// Fails with [`InvalidInputError`] when the profile or the assumptions hold
/// values the model cannot use.
pub fn compute_outcome(
    profile: &BusinessProfile,
    assumptions: &RoiAssumptions,
) -> Result<FinancialOutcome, InvalidInputError> {
    assumptions.validate()?;
    validate_profile(profile, assumptions.time_savings_model)?;

    let outcome = RawOutcome::compute(profile, assumptions).finish()?;
    debug!(
        model = %assumptions.time_savings_model,
        monthly_revenue = outcome.monthly_revenue,
        net_monthly_benefit = outcome.net_monthly_benefit,
        roi_percent = outcome.roi_percent,
        payback_months = outcome.payback_months,
        "Computed ROI outcome"
    );
    Ok(outcome)
}

/// [`compute_outcome`] with the default (full) assumptions.
pub fn compute_with_defaults(
    profile: &BusinessProfile,
) -> Result<FinancialOutcome, InvalidInputError> {
    compute_outcome(profile, &RoiAssumptions::default())
}

/// Monthly hours saved under the selected model.
///
/// Callers must have validated the profile for `assumptions.time_savings_model`.
pub fn time_saved_hours(profile: &BusinessProfile, assumptions: &RoiAssumptions) -> f64 {
    match assumptions.time_savings_model {
        TimeSavingsModel::AdminHoursFraction => {
            profile.admin_hours_per_week_all_staff
                * assumptions.admin_time_reduction
                * assumptions.weeks_per_month
        }
        TimeSavingsModel::PerJobMinutes => {
            total_jobs(profile) * profile.minutes_saved_per_job.unwrap_or(0.0) / MINUTES_PER_HOUR
        }
    }
}

fn total_jobs(profile: &BusinessProfile) -> f64 {
    f64::from(profile.technician_count) * profile.jobs_per_technician_per_month
}

/// Unrounded intermediate figures.
#[derive(Debug, Clone, Copy)]
struct RawOutcome {
    plan_monthly_cost: f64,
    total_jobs_per_month: f64,
    monthly_revenue: f64,
    time_saved_hours_per_month: f64,
    time_savings_value: f64,
    recovered_revenue: f64,
    cashflow_gain: f64,
    gross_monthly_benefit: f64,
    net_monthly_benefit: f64,
}

impl RawOutcome {
    fn compute(profile: &BusinessProfile, assumptions: &RoiAssumptions) -> Self {
        let total_jobs_per_month = total_jobs(profile);
        let monthly_revenue = total_jobs_per_month * profile.avg_revenue_per_job;
        let time_saved_hours_per_month = time_saved_hours(profile, assumptions);
        let time_savings_value = time_saved_hours_per_month * assumptions.hourly_labor_rate;
        let recovered_revenue = monthly_revenue * assumptions.revenue_recovery_rate;
        let cashflow_gain = monthly_revenue * assumptions.cashflow_gain_rate;
        let gross_monthly_benefit = time_savings_value + recovered_revenue + cashflow_gain;
        let net_monthly_benefit = gross_monthly_benefit - profile.plan_monthly_cost;

        Self {
            plan_monthly_cost: profile.plan_monthly_cost,
            total_jobs_per_month,
            monthly_revenue,
            time_saved_hours_per_month,
            time_savings_value,
            recovered_revenue,
            cashflow_gain,
            gross_monthly_benefit,
            net_monthly_benefit,
        }
    }

    fn payback_months(&self) -> f64 {
        if self.net_monthly_benefit <= 0.0 || self.plan_monthly_cost <= 0.0 {
            return 0.0;
        }
        // Keep 0.0 reserved for "no payback": a tiny positive ratio shows as 0.1
        round_to_tenth(self.plan_monthly_cost / self.net_monthly_benefit).max(0.1)
    }

    fn roi_percent(&self) -> f64 {
        if self.plan_monthly_cost <= 0.0 {
            return 0.0;
        }
        let annual_net = self.net_monthly_benefit * MONTHS_PER_YEAR;
        let annual_cost = self.plan_monthly_cost * MONTHS_PER_YEAR;
        annual_net / annual_cost * 100.0
    }

    fn finish(self) -> Result<FinancialOutcome, InvalidInputError> {
        Ok(FinancialOutcome {
            total_jobs_per_month: round_count("total_jobs_per_month", self.total_jobs_per_month)?,
            monthly_revenue: round_whole("monthly_revenue", self.monthly_revenue)?,
            time_saved_hours_per_month: round_count(
                "time_saved_hours_per_month",
                self.time_saved_hours_per_month,
            )?,
            time_savings_value: round_whole("time_savings_value", self.time_savings_value)?,
            recovered_revenue: round_whole("recovered_revenue", self.recovered_revenue)?,
            cashflow_gain: round_whole("cashflow_gain", self.cashflow_gain)?,
            gross_monthly_benefit: round_whole(
                "gross_monthly_benefit",
                self.gross_monthly_benefit,
            )?,
            net_monthly_benefit: round_whole("net_monthly_benefit", self.net_monthly_benefit)?,
            annual_net_benefit: round_whole(
                "annual_net_benefit",
                self.net_monthly_benefit * MONTHS_PER_YEAR,
            )?,
            payback_months: finite_figure("payback_months", self.payback_months())?,
            roi_percent: round_whole("roi_percent", self.roi_percent())?,
        })
    }
}

/// Exclusive bound for figures stored as whole numbers: 2^63.
const WHOLE_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn finite_figure(field: &'static str, value: f64) -> Result<f64, InvalidInputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInputError::Overflow { field })
    }
}

fn round_whole(field: &'static str, value: f64) -> Result<i64, InvalidInputError> {
    let rounded = finite_figure(field, value)?.round();
    if rounded.abs() >= WHOLE_LIMIT {
        return Err(InvalidInputError::Overflow { field });
    }
    Ok(rounded as i64)
}

fn round_count(field: &'static str, value: f64) -> Result<u64, InvalidInputError> {
    round_whole(field, value).map(|whole| whole.max(0) as u64)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_profile() -> BusinessProfile {
        BusinessProfile {
            technician_count: 10,
            jobs_per_technician_per_month: 30.0,
            avg_revenue_per_job: 1200.0,
            admin_hours_per_week_all_staff: 20.0,
            minutes_saved_per_job: Some(15.0),
            plan_monthly_cost: 2999.0,
        }
    }

    #[test]
    fn test_full_model_reference_scenario() {
        let outcome = compute_with_defaults(&scenario_profile()).unwrap();
        assert_eq!(outcome.total_jobs_per_month, 300);
        assert_eq!(outcome.monthly_revenue, 360_000);
        // 20 * 0.5 * 4.345 = 43.45
        assert_eq!(outcome.time_saved_hours_per_month, 43);
        assert_eq!(outcome.time_savings_value, 8_690);
        assert_eq!(outcome.recovered_revenue, 18_000);
        assert_eq!(outcome.cashflow_gain, 18_000);
        assert_eq!(outcome.gross_monthly_benefit, 44_690);
        assert_eq!(outcome.net_monthly_benefit, 41_691);
        assert_eq!(outcome.annual_net_benefit, 500_292);
        assert_eq!(outcome.payback_months, 0.1);
        assert_eq!(outcome.roi_percent, 1_390);
    }

    #[test]
    fn test_simple_model_uses_per_job_minutes_only() {
        let outcome = compute_outcome(&scenario_profile(), &RoiAssumptions::simple()).unwrap();
        // 300 jobs * 15 min / 60 = 75 h, * 200 = 15000
        assert_eq!(outcome.time_saved_hours_per_month, 75);
        assert_eq!(outcome.time_savings_value, 15_000);
        assert_eq!(outcome.recovered_revenue, 0);
        assert_eq!(outcome.cashflow_gain, 0);
        assert_eq!(outcome.net_monthly_benefit, 12_001);
        // 2999 / 12001 = 0.2499
        assert_eq!(outcome.payback_months, 0.2);
        // 12001 / 2999 = 400.17%
        assert_eq!(outcome.roi_percent, 400);
    }

    #[test]
    fn test_zero_cost_plan_has_zero_roi_and_payback() {
        let profile = BusinessProfile {
            technician_count: 1,
            jobs_per_technician_per_month: 1.0,
            avg_revenue_per_job: 100.0,
            admin_hours_per_week_all_staff: 0.0,
            minutes_saved_per_job: None,
            plan_monthly_cost: 0.0,
        };
        let outcome = compute_with_defaults(&profile).unwrap();
        assert_eq!(outcome.roi_percent, 0);
        assert_eq!(outcome.payback_months, 0.0);
        assert_eq!(outcome.net_monthly_benefit, 10);
    }

    #[test]
    fn test_cost_above_benefit_never_pays_back() {
        let profile = BusinessProfile {
            technician_count: 1,
            jobs_per_technician_per_month: 1.0,
            avg_revenue_per_job: 100.0,
            admin_hours_per_week_all_staff: 0.0,
            minutes_saved_per_job: None,
            plan_monthly_cost: 999.0,
        };
        let outcome = compute_with_defaults(&profile).unwrap();
        assert_eq!(outcome.net_monthly_benefit, -989);
        assert_eq!(outcome.payback_months, 0.0);
        // -989 / 999 = -99%
        assert_eq!(outcome.roi_percent, -99);
    }

    #[test]
    fn test_tiny_positive_payback_is_not_zero() {
        let profile = BusinessProfile {
            plan_monthly_cost: 1.0,
            ..scenario_profile()
        };
        let outcome = compute_with_defaults(&profile).unwrap();
        assert_eq!(outcome.payback_months, 0.1);
    }

    #[test]
    fn test_zero_technicians_is_invalid_input() {
        let profile = BusinessProfile {
            technician_count: 0,
            ..scenario_profile()
        };
        assert!(matches!(
            compute_with_defaults(&profile),
            Err(InvalidInputError::BelowMinimum {
                field: "technician_count",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_assumptions_rejected_before_profile() {
        let assumptions = RoiAssumptions {
            hourly_labor_rate: f64::NAN,
            ..Default::default()
        };
        let err = compute_outcome(&scenario_profile(), &assumptions).unwrap_err();
        assert_eq!(err.field(), Some("hourly_labor_rate"));
    }

    #[test]
    fn test_fractional_jobs_round_at_the_end() {
        let profile = BusinessProfile {
            technician_count: 3,
            jobs_per_technician_per_month: 2.5,
            avg_revenue_per_job: 99.9,
            ..scenario_profile()
        };
        let outcome = compute_with_defaults(&profile).unwrap();
        // 7.5 jobs -> 8, revenue 749.25 -> 749
        assert_eq!(outcome.total_jobs_per_month, 8);
        assert_eq!(outcome.monthly_revenue, 749);
    }

    #[test]
    fn test_huge_revenue_overflows_instead_of_saturating() {
        let profile = BusinessProfile {
            avg_revenue_per_job: 1e307,
            ..scenario_profile()
        };
        assert_eq!(
            compute_with_defaults(&profile),
            Err(InvalidInputError::Overflow {
                field: "monthly_revenue"
            })
        );
    }

    #[test]
    fn test_revenue_beyond_whole_range_is_rejected() {
        // finite, but 300 jobs * 1e17 = 3e19 does not fit in i64
        let profile = BusinessProfile {
            avg_revenue_per_job: 1e17,
            ..scenario_profile()
        };
        let err = compute_with_defaults(&profile).unwrap_err();
        assert_eq!(err.field(), Some("monthly_revenue"));
    }

    #[test]
    fn test_subnormal_plan_cost_overflows_roi() {
        let profile = BusinessProfile {
            plan_monthly_cost: 1e-320,
            ..scenario_profile()
        };
        assert_eq!(
            compute_with_defaults(&profile),
            Err(InvalidInputError::Overflow {
                field: "roi_percent"
            })
        );
    }

    #[test]
    fn test_round_whole_accepts_large_finite_values() {
        assert_eq!(round_whole("x", 1e18), Ok(1_000_000_000_000_000_000));
        assert_eq!(round_whole("x", -2.5), Ok(-3));
        assert!(round_whole("x", f64::NAN).is_err());
    }

    #[test]
    fn test_time_saved_hours_by_model() {
        let profile = scenario_profile();
        let admin = time_saved_hours(&profile, &RoiAssumptions::default());
        assert!((admin - 43.45).abs() < 1e-9);
        let per_job = time_saved_hours(&profile, &RoiAssumptions::simple());
        assert!((per_job - 75.0).abs() < 1e-9);
    }
}
