//! Show snapshot reference dates command.

use anyhow::{Context, Result};
use heatmap_config::AppConfig;
use heatmap_core::{
    format_for_storage, parse_storage_date, Clock, DateResolver, FixedClock, SystemClock,
    Validator,
};
use std::sync::Arc;

use crate::cli::DatesArgs;

pub async fn run(args: DatesArgs, config: &AppConfig) -> Result<()> {
    let catalog = Arc::new(config.heatmaps.catalog());

    let clock: Arc<dyn Clock> = match &args.today {
        Some(today) => Arc::new(FixedClock(
            parse_storage_date(today).context("--today must be YYYY-MM-DD")?,
        )),
        None => Arc::new(SystemClock),
    };
    let resolver = DateResolver::new(catalog.clone(), clock);

    if let Some(period) = &args.period {
        let period = Validator::new(catalog).validate_time_period(period)?;
        let date = resolver.resolve_snapshot_date(&period)?;
        println!("{}", format_for_storage(date));
        return Ok(());
    }

    let plan = resolver.refresh_plan()?;

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&plan)?),
        _ => {
            println!("Today:      {}", format_for_storage(plan.today));
            println!("Comparison: {}", format_for_storage(plan.comparison_date));
            println!();
            for (token, date) in &plan.reference_dates {
                println!("  {:<12} {}", token, format_for_storage(*date));
            }
        }
    }

    Ok(())
}
