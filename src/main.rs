use std::{process::ExitCode, sync::Arc};

use reel_digest::{run_digest, services::ReqwestTransport, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reel_digest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let transport = Arc::new(ReqwestTransport::new(config.request_timeout())?);
    let today = chrono::Local::now().date_naive();

    let outcome = run_digest(&config, transport, today).await;

    tracing::info!(
        tv = outcome.tv.len(),
        movies = outcome.movies.len(),
        delivered = outcome.delivered,
        "Digest finished"
    );

    if outcome.delivered || config.dry_run {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
