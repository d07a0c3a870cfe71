//! Calculation policy presets.
//!
//! - **Full**: time savings plus recovered revenue and cash-flow gain
//! - **Simple**: time savings only, derived from per-job minutes
//!
//! Both presets run through the same model; they only differ in the
//! [`RoiAssumptions`] they produce.

use serde::{Deserialize, Serialize};

use super::assumptions::RoiAssumptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyPreset {
    #[default]
    Full,
    Simple,
}

impl PolicyPreset {
    pub fn assumptions(self) -> RoiAssumptions {
        match self {
            PolicyPreset::Full => RoiAssumptions::default(),
            PolicyPreset::Simple => RoiAssumptions::simple(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "full" => Some(PolicyPreset::Full),
            "simple" => Some(PolicyPreset::Simple),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyPreset::Full => "full",
            PolicyPreset::Simple => "simple",
        }
    }
}

impl std::fmt::Display for PolicyPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PolicyPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyPreset::parse(s).ok_or_else(|| {
            format!(
                "Invalid policy preset: '{}'. Valid options: full, simple",
                s
            )
        })
    }
}
