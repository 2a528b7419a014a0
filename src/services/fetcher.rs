/// Listing fetcher
///
/// Walks a query plan across every configured source and returns the first
/// non-empty listing. The fetcher never fails: when nothing usable comes
/// back, the curated fallback list for the kind is returned instead.
use crate::{
    models::{MediaKind, MediaRecord},
    services::{
        fallback::fallback_for,
        sources::{DoubanClient, Query, SourceConfig, MOVIE_PLAN, TV_PLAN},
    },
};

pub struct Fetcher {
    client: DoubanClient,
    sources: Vec<SourceConfig>,
}

impl Fetcher {
    pub fn new(client: DoubanClient, sources: Vec<SourceConfig>) -> Self {
        Self { client, sources }
    }

    pub async fn tv_listings(&self) -> Vec<MediaRecord> {
        self.listings(MediaKind::Tv, TV_PLAN).await
    }

    pub async fn movie_listings(&self) -> Vec<MediaRecord> {
        self.listings(MediaKind::Movie, MOVIE_PLAN).await
    }

    async fn listings(&self, kind: MediaKind, plan: &[Query]) -> Vec<MediaRecord> {
        tracing::info!(kind = %kind, "Fetching live listings");

        for query in plan {
            for source in &self.sources {
                tracing::info!(
                    kind = %kind,
                    source = %source.name,
                    query = query.label,
                    "Trying source"
                );

                let Some(list) = self
                    .client
                    .fetch_with_retry(source, query.endpoint, query.params)
                    .await
                else {
                    continue;
                };

                if list.is_empty() {
                    tracing::info!(source = %source.name, query = query.label, "Source returned no subjects");
                    continue;
                }

                let records = list.into_records();
                tracing::info!(
                    kind = %kind,
                    source = %source.name,
                    records = records.len(),
                    "Using live listings"
                );
                return records;
            }
        }

        tracing::warn!(kind = %kind, "All sources failed, using curated list");
        fallback_for(kind)
    }
}
