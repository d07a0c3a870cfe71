use anyhow::Result;
use std::io::Write;

use crate::cli::PlansFormat;
use crate::output::render_plans_table;
use crate::plans::{PlanTier, PLAN_TIERS};

pub fn list_plans(format: PlansFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_plans(&mut handle, PLAN_TIERS, format)
}

pub fn write_plans<W: Write>(writer: &mut W, plans: &[PlanTier], format: PlansFormat) -> Result<()> {
    match format {
        PlansFormat::Terminal => writeln!(writer, "{}", render_plans_table(plans))?,
        PlansFormat::Json => writeln!(writer, "{}", serde_json::to_string_pretty(plans)?)?,
    }
    Ok(())
}
