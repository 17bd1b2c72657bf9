use std::path::Path;

use courier_core::config::AppConfig;
use courier_core::locale::{device_locale_from_env, resolve_locale, stored_locale};
use courier_core::mail::{password_reset_mail, send_password_reset, HttpMailTransport, OutgoingMail};
use courier_core::mask_email;
use courier_core::properties::LibSqlPropertyStore;
use courier_core::text::random_string;

use crate::commands::common::open_database;
use crate::error::CliError;

const RESET_CODE_LENGTH: usize = 6;
const DRY_RUN_SENDER: &str = "noreply@localhost";

pub async fn run_send_reset(
    to: &str,
    code: Option<String>,
    dry_run: bool,
    config: &AppConfig,
    db_path: &Path,
) -> Result<(), CliError> {
    let code = code.unwrap_or_else(|| random_string(RESET_CODE_LENGTH, true));

    if dry_run {
        let mail = preview_reset_mail(to, &code, config, db_path).await?;
        println!("{}", render_mail_preview(&mail));
        return Ok(());
    }

    let catalog = config.load_catalog()?;
    let mail_config = config.mail.clone().ok_or(CliError::MailNotConfigured)?;
    let transport = HttpMailTransport::new(mail_config)?;

    let db = open_database(db_path).await?;
    let store = LibSqlPropertyStore::new(db.connection());
    let locale = resolve_locale(&store, device_locale_from_env()).await?;

    send_password_reset(
        &transport,
        &catalog,
        locale,
        transport.from_address(),
        to,
        &code,
    )
    .await?;

    println!(
        "Sent reset code to {}",
        mask_email(to.trim(), &config.mask_symbol)?
    );
    Ok(())
}

/// Compose the reset mail a real send would produce, leaving the store untouched.
pub async fn preview_reset_mail(
    to: &str,
    code: &str,
    config: &AppConfig,
    db_path: &Path,
) -> Result<OutgoingMail, CliError> {
    let catalog = config.load_catalog()?;
    let db = open_database(db_path).await?;
    let store = LibSqlPropertyStore::new(db.connection());
    let locale = stored_locale(&store, device_locale_from_env()).await?;

    let from = config
        .mail
        .as_ref()
        .map_or(DRY_RUN_SENDER, |mail| mail.from_address.as_str());
    Ok(password_reset_mail(&catalog, locale, from, to, code)?)
}

pub fn render_mail_preview(mail: &OutgoingMail) -> String {
    format!(
        "From: {}\nTo: {}\nSubject: {}\n\n{}",
        mail.from, mail.to, mail.subject, mail.body
    )
}
