use serde::{Deserialize, Serialize};

use crate::core::{InvalidInputError, TimeSavingsModel};

/// Economic constants behind every ROI figure.
///
/// Defaults reproduce the landing-page calculator: ₹200 per hour of labour,
/// 5% of revenue recovered from missed invoices, 5% cash-flow gain from
/// faster collection, half of all admin time saved, 4.345 weeks per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiAssumptions {
    #[serde(default)]
    pub time_savings_model: TimeSavingsModel,

    #[serde(default = "default_hourly_labor_rate")]
    pub hourly_labor_rate: f64,

    #[serde(default = "default_revenue_recovery_rate")]
    pub revenue_recovery_rate: f64,

    #[serde(default = "default_cashflow_gain_rate")]
    pub cashflow_gain_rate: f64,

    /// Fraction of weekly admin hours removed (0.0-1.0)
    #[serde(default = "default_admin_time_reduction")]
    pub admin_time_reduction: f64,

    #[serde(default = "default_weeks_per_month")]
    pub weeks_per_month: f64,
}

impl Default for RoiAssumptions {
    fn default() -> Self {
        Self {
            time_savings_model: TimeSavingsModel::default(),
            hourly_labor_rate: default_hourly_labor_rate(),
            revenue_recovery_rate: default_revenue_recovery_rate(),
            cashflow_gain_rate: default_cashflow_gain_rate(),
            admin_time_reduction: default_admin_time_reduction(),
            weeks_per_month: default_weeks_per_month(),
        }
    }
}

impl RoiAssumptions {
    /// Time savings only: per-job minutes, no revenue recovery or cash-flow gain.
    pub fn simple() -> Self {
        Self {
            time_savings_model: TimeSavingsModel::PerJobMinutes,
            revenue_recovery_rate: 0.0,
            cashflow_gain_rate: 0.0,
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: TimeSavingsModel) -> Self {
        self.time_savings_model = model;
        self
    }

    /// Check every constant is usable before it reaches the model.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        non_negative("hourly_labor_rate", self.hourly_labor_rate)?;
        non_negative("revenue_recovery_rate", self.revenue_recovery_rate)?;
        non_negative("cashflow_gain_rate", self.cashflow_gain_rate)?;

        finite("admin_time_reduction", self.admin_time_reduction)?;
        if !(0.0..=1.0).contains(&self.admin_time_reduction) {
            return Err(InvalidInputError::OutOfRange {
                field: "admin_time_reduction",
                min: 0.0,
                max: 1.0,
                value: self.admin_time_reduction,
            });
        }

        finite("weeks_per_month", self.weeks_per_month)?;
        // A month has between 4 and 5 weeks; zero would erase all savings
        if self.weeks_per_month <= 0.0 || self.weeks_per_month > 5.0 {
            return Err(InvalidInputError::OutOfRange {
                field: "weeks_per_month",
                min: 0.0,
                max: 5.0,
                value: self.weeks_per_month,
            });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), InvalidInputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidInputError::NonFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), InvalidInputError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(InvalidInputError::BelowMinimum {
            field,
            min: 0.0,
            value,
        });
    }
    Ok(())
}

pub fn default_hourly_labor_rate() -> f64 {
    200.0
}
pub fn default_revenue_recovery_rate() -> f64 {
    0.05
}
pub fn default_cashflow_gain_rate() -> f64 {
    0.05
}
pub fn default_admin_time_reduction() -> f64 {
    0.5
}
pub fn default_weeks_per_month() -> f64 {
    4.345
}
