//! Courier CLI - the Courier app helpers from a terminal
//!
//! Handy for checking masking/pagination behaviour, inspecting the property
//! store, and sending reset codes by hand.

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use clap::Parser;

use crate::cli::{Cli, Commands, PropCommands};
use crate::commands::common::{load_config, resolve_config_path, resolve_db_path};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("courier=info".parse().expect("static directive is valid")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&resolve_config_path(cli.config))?;

    match cli.command {
        Commands::Mask { email, symbol } => {
            commands::mask::run_mask(&email, symbol.as_deref(), &config)?;
        }
        Commands::Paginate {
            items,
            page_size,
            from,
            json,
        } => commands::paginate::run_paginate(&items, page_size, from, json, &config)?,
        Commands::RandomString { length, numeric } => {
            commands::text::run_random_string(length, numeric);
        }
        Commands::Date { days, format } => {
            commands::date::run_date(days, format.as_deref(), &config)?;
        }
        Commands::Translate { key, locale } => {
            let db_path = resolve_db_path(cli.db_path)?;
            commands::locale::run_translate(&key, locale.as_deref(), &config, &db_path).await?;
        }
        Commands::Locale { set } => {
            let db_path = resolve_db_path(cli.db_path)?;
            commands::locale::run_locale(set.as_deref(), &db_path).await?;
        }
        Commands::Prop { command } => {
            let db_path = resolve_db_path(cli.db_path)?;
            match command {
                PropCommands::Get { key } => commands::prop::run_get(&key, &db_path).await?,
                PropCommands::Set { key, value } => {
                    commands::prop::run_set(&key, &value, &db_path).await?;
                }
                PropCommands::Remove { key } => commands::prop::run_remove(&key, &db_path).await?,
                PropCommands::List { json } => commands::prop::run_list(json, &db_path).await?,
            }
        }
        Commands::SignOut => {
            let db_path = resolve_db_path(cli.db_path)?;
            commands::session::run_sign_out(&db_path).await?;
        }
        Commands::SendReset { to, code, dry_run } => {
            let db_path = resolve_db_path(cli.db_path)?;
            commands::mail::run_send_reset(&to, code, dry_run, &config, &db_path).await?;
        }
        Commands::Completions { shell, output } => {
            commands::completions::run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}
