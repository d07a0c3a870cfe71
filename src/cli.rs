use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::PolicyPreset;
use crate::core::TimeSavingsModel;
pub use crate::io::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    /// Half of weekly admin hours, scaled to a month
    AdminHoursFraction,
    /// Minutes saved per job across the month's jobs
    PerJobMinutes,
}

impl From<ModelArg> for TimeSavingsModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::AdminHoursFraction => TimeSavingsModel::AdminHoursFraction,
            ModelArg::PerJobMinutes => TimeSavingsModel::PerJobMinutes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// Time savings plus recovered revenue and cash-flow gain (default)
    Full,
    /// Time savings only, from per-job minutes
    Simple,
}

impl From<PresetArg> for PolicyPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Full => PolicyPreset::Full,
            PresetArg::Simple => PolicyPreset::Simple,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum PlansFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "roicalc")]
#[command(about = "ROI and payback calculator for field-service teams", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute ROI, payback and savings for a business profile
    Compute {
        /// Plan tier to seed defaults from (starter, growth, business, enterprise)
        #[arg(short, long)]
        plan: Option<String>,

        /// Number of field technicians
        #[arg(long = "technicians")]
        technicians: Option<u32>,

        /// Jobs completed per technician per month
        #[arg(long = "jobs-per-technician")]
        jobs_per_technician: Option<f64>,

        /// Average revenue per job
        #[arg(long = "avg-revenue")]
        avg_revenue: Option<f64>,

        /// Admin hours per week across all staff
        #[arg(long = "admin-hours")]
        admin_hours: Option<f64>,

        /// Minutes of admin work saved per job
        #[arg(long = "minutes-saved-per-job")]
        minutes_saved_per_job: Option<f64>,

        /// Monthly subscription cost (defaults to the plan price)
        #[arg(long = "plan-cost")]
        plan_cost: Option<f64>,

        /// Time savings model
        #[arg(long, value_enum)]
        model: Option<ModelArg>,

        /// Calculation policy preset
        #[arg(long, value_enum)]
        preset: Option<PresetArg>,

        /// Configuration file (defaults to the nearest .roicalc.toml)
        #[arg(short, long, env = "ROICALC_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// List the available plan tiers
    Plans {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: PlansFormat,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
