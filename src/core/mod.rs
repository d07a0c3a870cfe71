//! Core value types and errors shared by the model, plans and output layers.

pub mod errors;
pub mod types;

pub use errors::{Error, InvalidInputError, Result};
pub use types::{
    BusinessProfile, FinancialOutcome, PaybackStatus, TimeSavingsModel,
    DEFAULT_ADMIN_HOURS_PER_WEEK, DEFAULT_AVG_REVENUE_PER_JOB, DEFAULT_JOBS_PER_TECHNICIAN,
    DEFAULT_MINUTES_SAVED_PER_JOB,
};
