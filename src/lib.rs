// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod model;
pub mod observability;
pub mod output;
pub mod plans;

// Re-export commonly used types
pub use crate::core::{
    BusinessProfile, Error, FinancialOutcome, InvalidInputError, PaybackStatus, Result,
    TimeSavingsModel,
};

pub use crate::config::{PolicyPreset, RoiAssumptions, RoiConfig};

pub use crate::model::{compute_outcome, compute_with_defaults};

pub use crate::formatting::format_currency;

pub use crate::output::{generate_csv, generate_summary, RoiReport};

pub use crate::plans::{find_plan, PlanTier, PLAN_TIERS};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
