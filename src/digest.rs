use chrono::NaiveDate;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    config::Config,
    models::MediaRecord,
    services::{
        format_report, report_title, sources::DoubanClient, Fetcher, HttpTransport, Notifier,
    },
};

/// Identifier attached to every log line of a single run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct DigestOutcome {
    pub tv: Vec<MediaRecord>,
    pub movies: Vec<MediaRecord>,
    pub title: String,
    pub report: String,
    /// Whether the push endpoint accepted the report
    pub delivered: bool,
}

/// Fetch, format and push one daily report
pub async fn run_digest(
    config: &Config,
    transport: Arc<dyn HttpTransport>,
    today: NaiveDate,
) -> DigestOutcome {
    let run_id = RunId::new();
    let span = tracing::info_span!("digest_run", run_id = %run_id, date = %today);

    async move {
        let client = DoubanClient::new(transport.clone(), config.retry_policy());
        let fetcher = Fetcher::new(client, config.sources());

        let tv = fetcher.tv_listings().await;
        let movies = fetcher.movie_listings().await;

        let title = report_title(today);
        let report = format_report(&tv, &movies, today);
        tracing::debug!(report = %report, "Report rendered");

        let delivered = if config.dry_run {
            tracing::info!("Dry run, skipping notification");
            println!("{}", report);
            false
        } else {
            let notifier = Notifier::new(
                transport,
                config.send_key().map(str::to_string),
                config.push_url_template.clone(),
            );
            notifier.send_notification(&title, &report).await
        };

        DigestOutcome {
            tv,
            movies,
            title,
            report,
            delivered,
        }
    }
    .instrument(span)
    .await
}
