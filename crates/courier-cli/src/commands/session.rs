use std::path::Path;

use courier_core::properties::LibSqlPropertyStore;
use courier_core::session::{is_signed_in, sign_out};

use crate::commands::common::open_database;
use crate::error::CliError;

pub async fn run_sign_out(db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path).await?;
    let store = LibSqlPropertyStore::new(db.connection());

    let was_signed_in = is_signed_in(&store).await?;
    sign_out(&store).await?;

    if was_signed_in {
        println!("Signed out");
    } else {
        println!("No active session");
    }
    Ok(())
}
