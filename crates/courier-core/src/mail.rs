//! Outbound mail: password-reset codes and hand-off to the device mail app.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::error::{Error, Result};
use crate::locale::{Locale, Translator};
use crate::mask::split_address;
use crate::text::{trimmed_non_blank, truncate_chars};

const MAIL_HTTP_TIMEOUT_SECS: u64 = 10;
const ERROR_BODY_MAX_CHARS: usize = 180;

/// A message ready to hand to a transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Delivers outgoing mail
pub trait MailTransport: Send + Sync + 'static {
    fn send(&self, mail: &OutgoingMail) -> impl Future<Output = Result<()>> + Send;
}

/// Settings for the HTTP mail API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from_address: String,
    #[serde(default)]
    pub from_name: Option<String>,
}

impl MailConfig {
    /// Trim fields and check the endpoint and sender look usable.
    pub fn normalized(self) -> Result<Self> {
        let api_url = trimmed_non_blank(Some(self.api_url))
            .filter(|url| url.starts_with("http://") || url.starts_with("https://"))
            .ok_or_else(|| {
                Error::Config("mail api_url must include http:// or https://".to_string())
            })?;
        let api_key = trimmed_non_blank(Some(self.api_key))
            .ok_or_else(|| Error::Config("mail api_key is required".to_string()))?;
        let from_address = self.from_address.trim().to_string();
        split_address(&from_address)
            .map_err(|error| Error::Config(format!("mail from_address: {error}")))?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            from_address,
            from_name: trimmed_non_blank(self.from_name),
        })
    }
}

/// Sends mail through a SendGrid-style JSON API with bearer auth
#[derive(Debug, Clone)]
pub struct HttpMailTransport {
    client: reqwest::Client,
    config: MailConfig,
}

impl HttpMailTransport {
    pub fn new(config: MailConfig) -> Result<Self> {
        let config = config.normalized()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(MAIL_HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|error| Error::Mail(format!("failed to build mail HTTP client: {error}")))?;
        Ok(Self { client, config })
    }

    /// Sender address mail should go out from
    pub fn from_address(&self) -> &str {
        &self.config.from_address
    }
}

impl MailTransport for HttpMailTransport {
    async fn send(&self, mail: &OutgoingMail) -> Result<()> {
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.config.api_key))
            .map_err(|error| Error::Config(format!("invalid mail api_key: {error}")))?;
        let payload = api_payload(mail, self.config.from_name.as_deref());

        let response = self
            .client
            .post(&self.config.api_url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, bearer)
            .body(payload.to_string())
            .send()
            .await
            .map_err(|error| Error::Mail(format!("mail request failed: {error}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Mail(format!(
                "mail API returned HTTP {}: {}",
                status.as_u16(),
                truncate_chars(&body, ERROR_BODY_MAX_CHARS)
            )));
        }

        tracing::info!("Sent mail \"{}\"", mail.subject);
        Ok(())
    }
}

fn api_payload(mail: &OutgoingMail, from_name: Option<&str>) -> serde_json::Value {
    let mut from = serde_json::json!({ "email": mail.from });
    if let Some(name) = from_name {
        from["name"] = serde_json::Value::from(name);
    }

    serde_json::json!({
        "personalizations": [{
            "to": [{ "email": mail.to }],
            "subject": mail.subject,
        }],
        "from": from,
        "content": [
            { "type": "text/plain", "value": mail.body },
        ],
    })
}

/// Compose the password-reset mail carrying `code`.
pub fn password_reset_mail<T: Translator + ?Sized>(
    translator: &T,
    locale: Locale,
    from: &str,
    to: &str,
    code: &str,
) -> Result<OutgoingMail> {
    let to = to.trim();
    split_address(to)?;

    Ok(OutgoingMail {
        from: from.to_string(),
        to: to.to_string(),
        subject: translator.get_string("resetPass", locale),
        body: format!("{}{code}", translator.get_string("emailBody", locale)),
    })
}

/// Compose and deliver a password-reset mail, waiting for the transport.
pub async fn send_password_reset<M, T>(
    transport: &M,
    translator: &T,
    locale: Locale,
    from: &str,
    to: &str,
    code: &str,
) -> Result<()>
where
    M: MailTransport,
    T: Translator + ?Sized,
{
    let mail = password_reset_mail(translator, locale, from, to, code)?;
    transport.send(&mail).await
}

/// Fire-and-forget delivery.
///
/// The send runs on the tokio runtime; failures are logged and reported as
/// `false` through the handle, which callers are free to drop.
pub fn dispatch<M: MailTransport>(transport: Arc<M>, mail: OutgoingMail) -> JoinHandle<bool> {
    tokio::spawn(async move {
        match transport.send(&mail).await {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!("Background mail to {} failed: {error}", mail.to);
                false
            }
        }
    })
}

/// Build a `mailto:` link for handing a draft to the device's mail app.
pub fn compose_mailto(to: &str, subject: &str, body: &str) -> String {
    let params: Vec<String> = [("subject", subject), ("body", body)]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
        .collect();

    let mut url = format!("mailto:{}", urlencoding::encode(to.trim()).replace("%40", "@"));
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

/// Transport that keeps every message in memory
#[derive(Debug, Default)]
pub struct MemoryTransport {
    sent: Mutex<Vec<OutgoingMail>>,
    fail_with: Option<String>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose every send fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            sent: Mutex::default(),
            fail_with: Some(reason.into()),
        }
    }

    /// Messages delivered so far
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl MailTransport for MemoryTransport {
    async fn send(&self, mail: &OutgoingMail) -> Result<()> {
        if let Some(reason) = &self.fail_with {
            return Err(Error::Mail(reason.clone()));
        }
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(mail.clone());
        Ok(())
    }
}
