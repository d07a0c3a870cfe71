//! Subscription plan presets.
//!
//! The table is ordered cheapest first and is only used to seed default
//! [`BusinessProfile`](crate::core::BusinessProfile) values. Lookups go
//! through the stable `id`, never a position in the list.

use serde::Serialize;

use crate::core::InvalidInputError;

/// A named pricing preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanTier {
    pub id: &'static str,
    pub name: &'static str,
    pub monthly_price: f64,
    pub max_technicians: u32,
}

pub const DEFAULT_PLAN_ID: &str = "growth";

pub static PLAN_TIERS: &[PlanTier] = &[
    PlanTier {
        id: "starter",
        name: "Starter",
        monthly_price: 999.0,
        max_technicians: 3,
    },
    PlanTier {
        id: "growth",
        name: "Growth",
        monthly_price: 2999.0,
        max_technicians: 10,
    },
    PlanTier {
        id: "business",
        name: "Business",
        monthly_price: 7999.0,
        max_technicians: 25,
    },
    PlanTier {
        id: "enterprise",
        name: "Enterprise",
        monthly_price: 19999.0,
        max_technicians: 100,
    },
];

/// Look up a plan tier by id (case-insensitive).
pub fn find_plan(id: &str) -> Result<&'static PlanTier, InvalidInputError> {
    let wanted = id.trim();
    PLAN_TIERS
        .iter()
        .find(|tier| tier.id.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| InvalidInputError::UnknownPlan(id.to_string()))
}

/// The default tier used when no plan is selected.
pub fn default_plan() -> &'static PlanTier {
    // DEFAULT_PLAN_ID is always in the table, see test_default_plan_is_listed
    PLAN_TIERS
        .iter()
        .find(|tier| tier.id == DEFAULT_PLAN_ID)
        .unwrap_or(&PLAN_TIERS[0])
}

/// Smallest tier whose technician ceiling fits `technician_count`.
pub fn plan_for_team_size(technician_count: u32) -> Option<&'static PlanTier> {
    PLAN_TIERS
        .iter()
        .find(|tier| tier.max_technicians >= technician_count)
}
