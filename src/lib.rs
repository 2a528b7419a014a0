//! Daily movie and TV digest: pulls listings from the Douban movie API,
//! renders a Markdown report and pushes it through ServerChan.

pub mod config;
pub mod digest;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use digest::{run_digest, DigestOutcome};
pub use error::{AppError, AppResult};
