//! Configuration: economic assumptions, policy presets and the
//! `.roicalc.toml` loader.

mod assumptions;
mod core;
mod loader;
pub mod presets;

pub use assumptions::{
    default_admin_time_reduction, default_cashflow_gain_rate, default_hourly_labor_rate,
    default_revenue_recovery_rate, default_weeks_per_month, RoiAssumptions,
};

pub use core::{AssumptionsConfig, OutputConfig, RoiConfig};

pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};

pub use presets::PolicyPreset;

/// Commented default config written by `roicalc init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# roicalc configuration

# Policy preset: "full" (time savings + recovered revenue + cash flow)
# or "simple" (time savings from per-job minutes only)
preset = "full"

# Plan tier used to seed defaults: starter, growth, business, enterprise
plan = "growth"

[assumptions]
# time_savings_model = "admin_hours_fraction"  # or "per_job_minutes"
hourly_labor_rate = 200.0
revenue_recovery_rate = 0.05
cashflow_gain_rate = 0.05
admin_time_reduction = 0.5
weeks_per_month = 4.345

[output]
default_format = "summary"
"#;
