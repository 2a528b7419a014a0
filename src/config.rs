use serde::Deserialize;
use std::time::Duration;

use crate::services::{retry::RetryPolicy, sources::SourceConfig};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// ServerChan secret; notifications fail without it
    #[serde(default)]
    pub sendkey: Option<String>,

    /// Douban API base URL, queried first without a key
    #[serde(default = "default_primary_api_url")]
    pub primary_api_url: String,

    /// Douban mirror base URL, queried second
    #[serde(default = "default_mirror_api_url")]
    pub mirror_api_url: String,

    /// API key the mirror expects as `apikey`
    #[serde(default = "default_mirror_api_key")]
    pub mirror_api_key: String,

    /// Push endpoint, `{key}` is replaced with the SENDKEY
    #[serde(default = "default_push_url_template")]
    pub push_url_template: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Attempts per source before moving on
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base of the exponential backoff, in milliseconds
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,

    /// Print the report instead of pushing it
    #[serde(default)]
    pub dry_run: bool,
}

fn default_primary_api_url() -> String {
    "https://api.douban.com/v2/movie".to_string()
}

fn default_mirror_api_url() -> String {
    "https://douban.uieee.com/v2/movie".to_string()
}

fn default_mirror_api_key() -> String {
    "0df993c66c0c636e29ecbb5344252a4a".to_string()
}

fn default_push_url_template() -> String {
    "https://sctapi.ftqq.com/{key}.send".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_base_delay_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sendkey: None,
            primary_api_url: default_primary_api_url(),
            mirror_api_url: default_mirror_api_url(),
            mirror_api_key: default_mirror_api_key(),
            push_url_template: default_push_url_template(),
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Ordered list of catalog sources: the official API, then the mirror
    pub fn sources(&self) -> Vec<SourceConfig> {
        vec![
            SourceConfig::keyless("豆瓣官方API", &self.primary_api_url),
            SourceConfig::with_key("豆瓣镜像站1", &self.mirror_api_url, &self.mirror_api_key),
        ]
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_retries,
            Duration::from_millis(self.retry_base_delay_ms),
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The configured SENDKEY, ignoring blank values
    pub fn send_key(&self) -> Option<&str> {
        self.sendkey
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}
