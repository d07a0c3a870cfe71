// Shared fixtures for roicalc integration tests
#![allow(dead_code)]

use roicalc::BusinessProfile;

/// Ten technicians on the Growth plan.
pub fn reference_profile() -> BusinessProfile {
    BusinessProfile {
        technician_count: 10,
        jobs_per_technician_per_month: 30.0,
        avg_revenue_per_job: 1200.0,
        admin_hours_per_week_all_staff: 20.0,
        minutes_saved_per_job: Some(15.0),
        plan_monthly_cost: 2999.0,
    }
}

/// Smallest valid business on a free plan.
pub fn minimal_free_profile() -> BusinessProfile {
    BusinessProfile {
        technician_count: 1,
        jobs_per_technician_per_month: 1.0,
        avg_revenue_per_job: 100.0,
        admin_hours_per_week_all_staff: 0.0,
        minutes_saved_per_job: None,
        plan_monthly_cost: 0.0,
    }
}
