use courier_core::config::AppConfig;
use courier_core::mask_email;

use crate::error::CliError;

pub fn run_mask(email: &str, symbol: Option<&str>, config: &AppConfig) -> Result<(), CliError> {
    let symbol = symbol.unwrap_or(&config.mask_symbol);
    println!("{}", mask_email(email.trim(), symbol)?);
    Ok(())
}
