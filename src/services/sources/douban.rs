/// Douban movie API client
///
/// Every request goes through the retry policy. Network errors, non-2xx
/// statuses and undecodable bodies all count as a failed attempt; once the
/// attempts run out the source is reported as exhausted (`None`) instead of
/// propagating an error.
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::SubjectList,
    services::{http::HttpTransport, retry::RetryPolicy, sources::SourceConfig},
};

#[derive(Clone)]
pub struct DoubanClient {
    transport: Arc<dyn HttpTransport>,
    retry: RetryPolicy,
}

impl DoubanClient {
    pub fn new(transport: Arc<dyn HttpTransport>, retry: RetryPolicy) -> Self {
        Self { transport, retry }
    }

    async fn fetch_once(&self, url: &str, query: &[(String, String)]) -> AppResult<SubjectList> {
        let body = self.transport.get_json(url, query).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// GET `{base}/{endpoint}` with retries; `None` once retries are exhausted
    pub async fn fetch_with_retry(
        &self,
        source: &SourceConfig,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Option<SubjectList> {
        let url = source.endpoint_url(endpoint);
        let query = source.query(params);

        let result = self
            .retry
            .run(|attempt| {
                tracing::info!(
                    source = %source.name,
                    url = %url,
                    attempt = attempt + 1,
                    max = self.retry.max_attempts.max(1),
                    "Requesting catalog"
                );
                self.fetch_once(&url, &query)
            })
            .await;

        match result {
            Ok(list) => {
                tracing::info!(
                    source = %source.name,
                    endpoint = %endpoint,
                    subjects = list.subjects.len(),
                    "Catalog request succeeded"
                );
                Some(list)
            }
            Err(e) => {
                tracing::warn!(
                    source = %source.name,
                    endpoint = %endpoint,
                    error = %e,
                    "Source exhausted"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::http::MockHttpTransport;
    use serde_json::json;
    use std::time::Duration;

    fn client(mock: MockHttpTransport) -> DoubanClient {
        DoubanClient::new(Arc::new(mock), RetryPolicy::new(3, Duration::ZERO))
    }

    #[tokio::test]
    async fn test_fetch_with_retry_success() {
        let mut mock = MockHttpTransport::new();
        mock.expect_get_json()
            .withf(|url, query| {
                url == "http://api.local/search"
                    && query == [("tag".to_string(), "电视剧".to_string())]
            })
            .times(1)
            .returning(|_, _| Ok(json!({ "subjects": [{ "title": "漫长的季节" }] })));

        let source = SourceConfig::keyless("primary", "http://api.local");
        let list = client(mock)
            .fetch_with_retry(&source, "search", &[("tag", "电视剧")])
            .await
            .unwrap();

        assert_eq!(list.subjects.len(), 1);
        assert_eq!(list.subjects[0].title.as_deref(), Some("漫长的季节"));
    }

    #[tokio::test]
    async fn test_fetch_with_retry_recovers_after_failure() {
        let mut mock = MockHttpTransport::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_get_json()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(AppError::ExternalApi("status 503".to_string())));
        mock.expect_get_json()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(json!({ "subjects": [] })));

        let source = SourceConfig::keyless("primary", "http://api.local");
        let list = client(mock).fetch_with_retry(&source, "new_movies", &[]).await;

        assert!(list.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_with_retry_retries_decode_failures() {
        let mut mock = MockHttpTransport::new();
        mock.expect_get_json()
            .times(3)
            .returning(|_, _| Ok(json!({ "subjects": "not a list" })));

        let source = SourceConfig::keyless("primary", "http://api.local");
        let list = client(mock).fetch_with_retry(&source, "top250", &[]).await;

        assert!(list.is_none());
    }

    #[tokio::test]
    async fn test_fetch_with_retry_sends_api_key() {
        let mut mock = MockHttpTransport::new();
        mock.expect_get_json()
            .withf(|_, query| query.iter().any(|(k, v)| k == "apikey" && v == "secret"))
            .times(1)
            .returning(|_, _| Ok(json!({ "subjects": [] })));

        let source = SourceConfig::with_key("mirror", "http://mirror.local", "secret");
        let list = client(mock).fetch_with_retry(&source, "new_movies", &[]).await;

        assert!(list.is_some());
    }
}
