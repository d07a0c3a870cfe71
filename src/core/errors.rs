//! Shared error types for the calculator

use std::path::PathBuf;
use thiserror::Error;

use super::types::TimeSavingsModel;

/// Rejected calculator input.
///
/// Raised before any arithmetic runs, so a bad profile never turns into
/// `NaN` or infinite figures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// NaN or infinite value
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Value under its lower bound
    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum {
        field: &'static str,
        min: f64,
        value: f64,
    },

    /// Value outside a closed range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Input required by the selected time savings model is absent
    #[error("{field} is required by the {model} time savings model")]
    MissingField {
        field: &'static str,
        model: TimeSavingsModel,
    },

    /// A derived figure left the representable range
    #[error("{field} is too large to compute from these inputs")]
    Overflow { field: &'static str },
    /// Plan tier id not present in the lookup table
    #[error("unknown plan tier '{0}'")]
    UnknownPlan(String),
}

impl InvalidInputError {
    /// Name of the offending input, if the error refers to a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NonFinite { field, .. }
            | Self::BelowMinimum { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::MissingField { field, .. }
            | Self::Overflow { field } => Some(field),
            Self::UnknownPlan(_) => None,
        }
    }
}

/// Main error type for roicalc operations
#[derive(Debug, Error)]
pub enum Error {
    /// Calculator input rejected
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error without a file location
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error tied to a config file
    pub fn configuration_at(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Whether the user can fix this by changing inputs or config
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::Configuration { .. } | Self::TomlParse(_)
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
