//! Up-front checks on a [`BusinessProfile`].

use crate::core::{BusinessProfile, InvalidInputError, TimeSavingsModel};

pub fn validate_profile(
    profile: &BusinessProfile,
    model: TimeSavingsModel,
) -> Result<(), InvalidInputError> {
    if profile.technician_count == 0 {
        return Err(InvalidInputError::BelowMinimum {
            field: "technician_count",
            min: 1.0,
            value: f64::from(profile.technician_count),
        });
    }

    at_least(
        "jobs_per_technician_per_month",
        profile.jobs_per_technician_per_month,
        1.0,
    )?;
    at_least("avg_revenue_per_job", profile.avg_revenue_per_job, 0.0)?;
    at_least("plan_monthly_cost", profile.plan_monthly_cost, 0.0)?;

    match model {
        TimeSavingsModel::AdminHoursFraction => at_least(
            "admin_hours_per_week_all_staff",
            profile.admin_hours_per_week_all_staff,
            0.0,
        ),
        TimeSavingsModel::PerJobMinutes => match profile.minutes_saved_per_job {
            Some(minutes) => at_least("minutes_saved_per_job", minutes, 0.0),
            None => Err(InvalidInputError::MissingField {
                field: "minutes_saved_per_job",
                model,
            }),
        },
    }
}

fn at_least(field: &'static str, value: f64, min: f64) -> Result<(), InvalidInputError> {
    if !value.is_finite() {
        return Err(InvalidInputError::NonFinite { field, value });
    }
    if value < min {
        return Err(InvalidInputError::BelowMinimum { field, min, value });
    }
    Ok(())
}
