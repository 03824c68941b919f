use anyhow::Result;
use tripcal_core::TripParams;
use tripcal_core::prompt::planning_prompt;
use tripcal_core::trip::parse_start_date;

pub fn run(
    destination: String,
    days: u32,
    budget: u32,
    preferences: String,
    start: Option<&str>,
) -> Result<()> {
    let start_date = match start {
        Some(s) => parse_start_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let params = TripParams {
        destination,
        num_days: days,
        budget_usd: budget,
        preferences,
        start_date,
    };

    print!("{}", planning_prompt(&params));

    Ok(())
}
