//! CLI command implementations for roicalc.
//!
//! Available commands:
//! - **compute**: Run the ROI model and write a report
//! - **plans**: List plan tiers
//! - **init**: Initialize a new roicalc configuration file

pub mod compute;
pub mod init;
pub mod plans;

pub use compute::{handle_compute, ComputeConfig, ProfileOverrides};
pub use init::init_config;
pub use plans::list_plans;

use crate::core::Error;

/// Exit status for input or configuration mistakes the user can correct.
pub const EXIT_USAGE: i32 = 2;
/// Exit status for everything else.
pub const EXIT_FAILURE: i32 = 1;

/// Render `err` for stderr and pick the matching exit status.
///
/// Fixable errors print as a single line; anything else prints the full
/// cause chain.
pub fn describe_failure(err: &anyhow::Error) -> (String, i32) {
    match err.downcast_ref::<Error>() {
        Some(error) if error.is_user_fixable() => (format!("Error: {error}"), EXIT_USAGE),
        _ => (format!("Error: {err:#}"), EXIT_FAILURE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InvalidInputError;

    #[test]
    fn test_invalid_input_is_a_usage_failure() {
        let err = anyhow::Error::from(Error::from(InvalidInputError::UnknownPlan(
            "platinum".into(),
        )));
        let (message, code) = describe_failure(&err);
        assert_eq!(code, EXIT_USAGE);
        assert_eq!(message, "Error: Invalid input: unknown plan tier 'platinum'");
    }

    #[test]
    fn test_io_error_shows_cause_chain() {
        let err = anyhow::Error::from(std::io::Error::other("disk full"))
            .context("Failed to create roi.csv");
        let (message, code) = describe_failure(&err);
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(message, "Error: Failed to create roi.csv: disk full");
    }

    #[test]
    fn test_plain_anyhow_error_is_general_failure() {
        let (_, code) = describe_failure(&anyhow::anyhow!("Configuration file already exists"));
        assert_eq!(code, EXIT_FAILURE);
    }
}
