//! Catalog sources
//!
//! A source is one base URL of the Douban movie API (the official host or a
//! mirror). Sources are tried in order; the first one that returns a non-empty
//! subject list wins.

pub mod douban;

pub use douban::DoubanClient;

/// One candidate API endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Human-readable name for logging
    pub name: String,
    pub base_url: String,
    /// Sent as the `apikey` query parameter when present
    pub api_key: Option<String>,
}

impl SourceConfig {
    pub fn keyless(name: &str, base_url: &str) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            api_key: None,
        }
    }

    pub fn with_key(name: &str, base_url: &str, api_key: &str) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            api_key: Some(api_key.to_string()),
        }
    }

    /// Full URL for an endpoint under this source
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Query parameters for a request: the key first, then the endpoint's own
    pub fn query(&self, params: &[(&str, &str)]) -> Vec<(String, String)> {
        self.api_key
            .iter()
            .map(|key| ("apikey".to_string(), key.clone()))
            .chain(params.iter().map(|(k, v)| (k.to_string(), v.to_string())))
            .collect()
    }
}

/// One step of a query plan: an endpoint and its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub endpoint: &'static str,
    pub params: &'static [(&'static str, &'static str)],
    /// Label for logging
    pub label: &'static str,
}

/// TV shows come from the tag search
pub const TV_PLAN: &[Query] = &[Query {
    endpoint: "search",
    params: &[("tag", "电视剧"), ("count", "10")],
    label: "搜索电视剧",
}];

/// Movies come from the new-release chart, then from Top250
pub const MOVIE_PLAN: &[Query] = &[
    Query {
        endpoint: "new_movies",
        params: &[],
        label: "新片榜",
    },
    Query {
        endpoint: "top250",
        params: &[("start", "0"), ("count", "5")],
        label: "Top250",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let source = SourceConfig::keyless("primary", "http://api.local/v2/movie/");
        assert_eq!(source.endpoint_url("search"), "http://api.local/v2/movie/search");
    }

    #[test]
    fn test_query_without_key() {
        let source = SourceConfig::keyless("primary", "http://api.local");
        let query = source.query(&[("tag", "电视剧"), ("count", "10")]);
        assert_eq!(
            query,
            vec![
                ("tag".to_string(), "电视剧".to_string()),
                ("count".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_with_key() {
        let source = SourceConfig::with_key("mirror", "http://mirror.local", "secret");
        let query = source.query(&[("start", "0")]);
        assert_eq!(query[0], ("apikey".to_string(), "secret".to_string()));
        assert_eq!(query[1], ("start".to_string(), "0".to_string()));
    }
}
