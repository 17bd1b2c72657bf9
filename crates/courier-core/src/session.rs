//! Signed-in session state kept in the property store.

use crate::error::Result;
use crate::properties::PropertyStore;
use crate::text::is_blank;

pub const USERNAME_KEY: &str = "username";
pub const PASSWORD_KEY: &str = "password";
pub const USER_ID_KEY: &str = "id";
pub const LOCALE_KEY: &str = "locale";

/// Keys cleared on sign-out. The locale survives.
const SESSION_KEYS: [&str; 3] = [USERNAME_KEY, PASSWORD_KEY, USER_ID_KEY];

/// Persist the signed-in user's credentials.
pub async fn store_credentials<S: PropertyStore>(
    store: &S,
    username: &str,
    password: &str,
    user_id: &str,
) -> Result<()> {
    store.set(USERNAME_KEY, username).await?;
    store.set(PASSWORD_KEY, password).await?;
    store.set(USER_ID_KEY, user_id).await?;
    store.save().await
}

/// Whether a user id is stored.
pub async fn is_signed_in<S: PropertyStore>(store: &S) -> Result<bool> {
    let user_id = store.get(USER_ID_KEY).await?;
    Ok(!is_blank(user_id.as_deref()))
}

/// Clear the stored credentials and flush the store.
///
/// Errors are returned to the caller; a half-finished sign-out must not look
/// like a successful one.
pub async fn sign_out<S: PropertyStore>(store: &S) -> Result<()> {
    for key in SESSION_KEYS {
        store.remove(key).await?;
    }
    store.save().await?;
    tracing::info!("Signed out; session properties cleared");
    Ok(())
}
