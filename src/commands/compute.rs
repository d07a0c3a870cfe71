use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::config::{self, PolicyPreset, RoiConfig};
use crate::core::{BusinessProfile, Error, TimeSavingsModel};
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, OutputFormat};
use crate::output::RoiReport;
use crate::plans::{self, PlanTier};

/// Inputs the user supplied on top of the plan-seeded profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileOverrides {
    pub technicians: Option<u32>,
    pub jobs_per_technician: Option<f64>,
    pub avg_revenue: Option<f64>,
    pub admin_hours: Option<f64>,
    pub minutes_saved_per_job: Option<f64>,
    pub plan_cost: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ComputeConfig {
    pub plan: Option<String>,
    pub overrides: ProfileOverrides,
    pub model: Option<TimeSavingsModel>,
    pub preset: Option<PolicyPreset>,
    pub config_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

pub fn handle_compute(config: ComputeConfig) -> Result<()> {
    let file_config = load_file_config(config.config_path.as_deref())?;
    let report = build_report(&config, &file_config)?;
    let format = resolve_format(config.format, &file_config)?;

    info!(
        plan = report.plan.as_deref().unwrap_or("custom"),
        format = ?format,
        roi_percent = report.outcome.roi_percent,
        "Writing ROI report"
    );

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut buffered = BufWriter::new(file);
            create_writer(format, Box::new(&mut buffered), config.formatting)
                .write_report(&report)?;
            buffered.flush()?;
            debug!(path = %path.display(), "Report written");
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            create_writer(format, Box::new(&mut handle), config.formatting)
                .write_report(&report)?;
            handle.flush()?;
        }
    }
    Ok(())
}

/// Resolve plan, profile and assumptions, then run the model.
pub fn build_report(config: &ComputeConfig, file_config: &RoiConfig) -> Result<RoiReport> {
    let tier = select_plan(config.plan.as_deref(), file_config)?;
    let profile = build_profile(tier, &config.overrides);
    warn_if_team_exceeds_plan(tier, profile.technician_count);

    let mut assumptions = file_config.resolve_assumptions(config.preset);
    if let Some(model) = config.model {
        assumptions = assumptions.with_model(model);
    }
    debug!(?profile, ?assumptions, "Resolved calculator inputs");

    let report = RoiReport::compute(profile, assumptions).map_err(Error::from)?;
    Ok(report.with_plan(tier.id))
}

fn select_plan(cli_plan: Option<&str>, file_config: &RoiConfig) -> Result<&'static PlanTier> {
    match cli_plan.or(file_config.plan.as_deref()) {
        Some(id) => Ok(plans::find_plan(id).map_err(Error::from)?),
        None => Ok(plans::default_plan()),
    }
}

/// Seed a profile from `tier`, then apply any explicit overrides.
pub fn build_profile(tier: &PlanTier, overrides: &ProfileOverrides) -> BusinessProfile {
    let seeded = BusinessProfile::from_plan(tier);
    BusinessProfile {
        technician_count: overrides.technicians.unwrap_or(seeded.technician_count),
        jobs_per_technician_per_month: overrides
            .jobs_per_technician
            .unwrap_or(seeded.jobs_per_technician_per_month),
        avg_revenue_per_job: overrides.avg_revenue.unwrap_or(seeded.avg_revenue_per_job),
        admin_hours_per_week_all_staff: overrides
            .admin_hours
            .unwrap_or(seeded.admin_hours_per_week_all_staff),
        minutes_saved_per_job: overrides
            .minutes_saved_per_job
            .or(seeded.minutes_saved_per_job),
        plan_monthly_cost: overrides.plan_cost.unwrap_or(seeded.plan_monthly_cost),
    }
}

/// Tier to suggest when `technicians` is above `tier`'s ceiling.
///
/// `None` when the team fits, or when no tier is large enough.
pub fn plan_upgrade(tier: &PlanTier, technicians: u32) -> Option<&'static PlanTier> {
    if technicians <= tier.max_technicians {
        return None;
    }
    plans::plan_for_team_size(technicians)
}

fn warn_if_team_exceeds_plan(tier: &PlanTier, technicians: u32) {
    if technicians <= tier.max_technicians {
        return;
    }
    match plan_upgrade(tier, technicians) {
        Some(suggested) => warn!(
            "{} plan covers up to {} technicians, got {}; consider the {} plan",
            tier.name, tier.max_technicians, technicians, suggested.name
        ),
        None => warn!(
            "{} plan covers up to {} technicians, got {}; no plan tier is large enough",
            tier.name, tier.max_technicians, technicians
        ),
    }
}

fn load_file_config(path: Option<&std::path::Path>) -> Result<RoiConfig> {
    match path {
        Some(path) => Ok(config::load_config_from_path(path)?),
        None => Ok(config::load_config()),
    }
}

fn resolve_format(cli_format: Option<OutputFormat>, file_config: &RoiConfig) -> Result<OutputFormat> {
    if let Some(format) = cli_format {
        return Ok(format);
    }
    match file_config.default_format() {
        Some(name) => OutputFormat::parse(name).ok_or_else(|| {
            Error::configuration(format!(
                "unknown output format '{}'. Valid options: summary, csv, json, terminal",
                name
            ))
            .into()
        }),
        None => Ok(OutputFormat::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AssumptionsConfig, OutputConfig};

    fn compute_config() -> ComputeConfig {
        ComputeConfig {
            plan: None,
            overrides: ProfileOverrides::default(),
            model: None,
            preset: None,
            config_path: None,
            format: None,
            output: None,
            formatting: FormattingConfig::plain(),
        }
    }

    #[test]
    fn test_default_plan_reproduces_reference_scenario() {
        let report = build_report(&compute_config(), &RoiConfig::default()).unwrap();
        assert_eq!(report.plan.as_deref(), Some("growth"));
        assert_eq!(report.outcome.total_jobs_per_month, 300);
        assert_eq!(report.outcome.monthly_revenue, 360_000);
        assert_eq!(report.outcome.time_savings_value, 8_690);
    }

    #[test]
    fn test_overrides_replace_seeded_values() {
        let tier = plans::find_plan("starter").unwrap();
        let overrides = ProfileOverrides {
            technicians: Some(2),
            plan_cost: Some(0.0),
            ..Default::default()
        };
        let profile = build_profile(tier, &overrides);
        assert_eq!(profile.technician_count, 2);
        assert_eq!(profile.plan_monthly_cost, 0.0);
        assert_eq!(profile.avg_revenue_per_job, 1200.0);
    }

    #[test]
    fn test_plan_upgrade_suggests_smallest_fitting_tier() {
        let starter = plans::find_plan("starter").unwrap();
        assert_eq!(plan_upgrade(starter, 3), None);
        assert_eq!(plan_upgrade(starter, 4).map(|t| t.id), Some("growth"));
        assert_eq!(plan_upgrade(starter, 20).map(|t| t.id), Some("business"));
        assert_eq!(plan_upgrade(starter, 101), None);
    }

    #[test]
    fn test_oversized_team_still_computes() {
        let config = ComputeConfig {
            plan: Some("starter".into()),
            overrides: ProfileOverrides {
                technicians: Some(8),
                ..Default::default()
            },
            ..compute_config()
        };
        let report = build_report(&config, &RoiConfig::default()).unwrap();
        assert_eq!(report.profile.technician_count, 8);
        assert_eq!(report.profile.plan_monthly_cost, 999.0);
    }

    #[test]
    fn test_plan_from_file_config_is_used() {
        let file_config = RoiConfig {
            plan: Some("business".into()),
            ..Default::default()
        };
        let report = build_report(&compute_config(), &file_config).unwrap();
        assert_eq!(report.plan.as_deref(), Some("business"));
        assert_eq!(report.profile.technician_count, 25);
    }

    #[test]
    fn test_unknown_plan_is_an_error() {
        let config = ComputeConfig {
            plan: Some("platinum".into()),
            ..compute_config()
        };
        let err = build_report(&config, &RoiConfig::default()).unwrap_err();
        assert!(err.to_string().contains("unknown plan tier 'platinum'"));
    }

    #[test]
    fn test_zero_technicians_is_an_error() {
        let config = ComputeConfig {
            overrides: ProfileOverrides {
                technicians: Some(0),
                ..Default::default()
            },
            ..compute_config()
        };
        let err = build_report(&config, &RoiConfig::default()).unwrap_err();
        assert!(err.to_string().contains("technician_count"));
    }

    #[test]
    fn test_model_flag_overrides_config_model() {
        let file_config = RoiConfig {
            assumptions: Some(AssumptionsConfig {
                time_savings_model: Some(TimeSavingsModel::AdminHoursFraction),
                ..Default::default()
            }),
            ..Default::default()
        };
        let config = ComputeConfig {
            model: Some(TimeSavingsModel::PerJobMinutes),
            ..compute_config()
        };
        let report = build_report(&config, &file_config).unwrap();
        // growth: 300 jobs * 15 min = 75 h
        assert_eq!(report.outcome.time_saved_hours_per_month, 75);
    }

    #[test]
    fn test_resolve_format_precedence() {
        let file_config = RoiConfig {
            output: Some(OutputConfig {
                default_format: Some("json".into()),
            }),
            ..Default::default()
        };
        assert_eq!(
            resolve_format(Some(OutputFormat::Csv), &file_config).unwrap(),
            OutputFormat::Csv
        );
        assert_eq!(
            resolve_format(None, &file_config).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            resolve_format(None, &RoiConfig::default()).unwrap(),
            OutputFormat::Summary
        );
    }

    #[test]
    fn test_resolve_format_rejects_unknown_config_value() {
        let file_config = RoiConfig {
            output: Some(OutputConfig {
                default_format: Some("xml".into()),
            }),
            ..Default::default()
        };
        assert!(resolve_format(None, &file_config).is_err());
    }

    #[test]
    fn test_handle_compute_writes_output_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let output = temp.path().join("roi.csv");
        let config_path = temp.path().join("roicalc.toml");
        std::fs::write(&config_path, "plan = \"growth\"\n").unwrap();

        let config = ComputeConfig {
            format: Some(OutputFormat::Csv),
            output: Some(output.clone()),
            config_path: Some(config_path),
            ..compute_config()
        };
        handle_compute(config).unwrap();

        let written = std::fs::read_to_string(output).unwrap();
        assert!(written.starts_with("Metric,Value,Unit\n"));
        assert!(written.contains("Monthly revenue,360000,INR"));
    }
}
