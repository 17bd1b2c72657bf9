use courier_core::config::AppConfig;
use courier_core::dates::date_from_today;

use crate::error::CliError;

pub fn run_date(days: i64, format: Option<&str>, config: &AppConfig) -> Result<(), CliError> {
    let format = format.unwrap_or(&config.date_format);
    println!("{}", date_from_today(days, format)?);
    Ok(())
}
