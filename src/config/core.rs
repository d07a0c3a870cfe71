use serde::{Deserialize, Serialize};

use super::assumptions::RoiAssumptions;
use super::presets::PolicyPreset;
use crate::core::TimeSavingsModel;

/// Root configuration structure for roicalc
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoiConfig {
    /// Policy preset the assumptions start from
    #[serde(default)]
    pub preset: Option<PolicyPreset>,

    /// Plan tier used to seed the business profile
    #[serde(default)]
    pub plan: Option<String>,

    /// Per-field overrides on top of the preset
    #[serde(default)]
    pub assumptions: Option<AssumptionsConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl RoiConfig {
    /// Assumptions after applying the preset and then any overrides.
    pub fn resolve_assumptions(&self, preset: Option<PolicyPreset>) -> RoiAssumptions {
        let base = preset.or(self.preset).unwrap_or_default().assumptions();
        match &self.assumptions {
            Some(overrides) => overrides.apply(base),
            None => base,
        }
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }
}

/// Optional overrides for individual [`RoiAssumptions`] fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssumptionsConfig {
    pub time_savings_model: Option<TimeSavingsModel>,
    pub hourly_labor_rate: Option<f64>,
    pub revenue_recovery_rate: Option<f64>,
    pub cashflow_gain_rate: Option<f64>,
    pub admin_time_reduction: Option<f64>,
    pub weeks_per_month: Option<f64>,
}

impl AssumptionsConfig {
    pub fn apply(&self, base: RoiAssumptions) -> RoiAssumptions {
        RoiAssumptions {
            time_savings_model: self.time_savings_model.unwrap_or(base.time_savings_model),
            hourly_labor_rate: self.hourly_labor_rate.unwrap_or(base.hourly_labor_rate),
            revenue_recovery_rate: self
                .revenue_recovery_rate
                .unwrap_or(base.revenue_recovery_rate),
            cashflow_gain_rate: self.cashflow_gain_rate.unwrap_or(base.cashflow_gain_rate),
            admin_time_reduction: self
                .admin_time_reduction
                .unwrap_or(base.admin_time_reduction),
            weeks_per_month: self.weeks_per_month.unwrap_or(base.weeks_per_month),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// One of summary, csv, json, terminal
    pub default_format: Option<String>,
}
