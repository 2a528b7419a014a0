/// ServerChan push notifier
///
/// ServerChan identifies the recipient by a secret SENDKEY embedded in the
/// URL path and takes the Markdown body in the `desp` form field.
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    services::http::HttpTransport,
};

/// Placeholder replaced with the SENDKEY in the push URL template
const KEY_PLACEHOLDER: &str = "{key}";

/// ServerChan response envelope
#[derive(Debug, Deserialize)]
struct PushResponse {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: Option<String>,
}

pub struct Notifier {
    transport: Arc<dyn HttpTransport>,
    send_key: Option<String>,
    url_template: String,
}

impl Notifier {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        send_key: Option<String>,
        url_template: String,
    ) -> Self {
        Self {
            transport,
            send_key: send_key.filter(|key| !key.trim().is_empty()),
            url_template,
        }
    }

    fn push_url(&self, key: &str) -> String {
        self.url_template.replace(KEY_PLACEHOLDER, key)
    }

    /// Pushes the message, returning whether ServerChan accepted it
    pub async fn send_notification(&self, title: &str, content: &str) -> bool {
        match self.try_send(title, content).await {
            Ok(()) => {
                tracing::info!(title = %title, "Notification delivered");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Notification failed");
                false
            }
        }
    }

    async fn try_send(&self, title: &str, content: &str) -> AppResult<()> {
        let key = self.send_key.as_deref().ok_or(AppError::MissingSendKey)?;

        let form = [
            ("title".to_string(), title.to_string()),
            ("desp".to_string(), content.to_string()),
        ];
        let body = self.transport.post_form(&self.push_url(key), &form).await?;

        check_push_response(body)
    }
}

/// A non-JSON body is accepted on status alone; JSON must carry `code == 0`
fn check_push_response(body: Value) -> AppResult<()> {
    if body.is_null() {
        return Ok(());
    }

    let response: PushResponse = serde_json::from_value(body)?;
    if response.code != 0 {
        return Err(AppError::ExternalApi(format!(
            "ServerChan rejected the message (code {}): {}",
            response.code,
            response.message.unwrap_or_default()
        )));
    }

    Ok(())
}
