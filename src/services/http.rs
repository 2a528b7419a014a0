use reqwest::Client as HttpClient;
use serde_json::Value;
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Browser User-Agent; the public Douban endpoints reject unknown clients
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP seam shared by the catalog sources and the notifier
///
/// Both operations treat a non-2xx status as an error, so callers only have
/// to deal with decoded JSON bodies.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `url` with the query pairs and decode the body as JSON
    async fn get_json(&self, url: &str, query: &[(String, String)]) -> AppResult<Value>;

    /// POST the pairs form-encoded to `url`
    ///
    /// Returns the JSON body, or `Value::Null` when the body is not JSON.
    async fn post_form(&self, url: &str, form: &[(String, String)]) -> AppResult<Value>;
}

/// `reqwest`-backed transport used in production
#[derive(Clone)]
pub struct ReqwestTransport {
    http_client: HttpClient,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http_client })
    }
}

async fn ensure_success(response: reqwest::Response) -> AppResult<String> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::ExternalApi(format!(
            "API returned status {}: {}",
            status, body
        )));
    }

    Ok(response.text().await?)
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_json(&self, url: &str, query: &[(String, String)]) -> AppResult<Value> {
        let response = self.http_client.get(url).query(query).send().await?;
        let body = ensure_success(response).await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(error = %e, response = %body, "Failed to decode JSON response");
            AppError::Decode(e)
        })
    }

    async fn post_form(&self, url: &str, form: &[(String, String)]) -> AppResult<Value> {
        let response = self.http_client.post(url).form(form).send().await?;
        let body = ensure_success(response).await?;

        Ok(serde_json::from_str(&body).unwrap_or(Value::Null))
    }
}
