pub mod fallback;
pub mod fetcher;
pub mod formatter;
pub mod http;
pub mod notifier;
pub mod retry;
pub mod sources;

pub use fetcher::Fetcher;
pub use formatter::{format_report, report_title};
pub use http::{HttpTransport, ReqwestTransport};
pub use notifier::Notifier;
pub use retry::{retry_with_backoff, RetryPolicy};
