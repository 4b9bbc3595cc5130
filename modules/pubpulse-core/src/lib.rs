pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::{PostRecord, RecordOutcome, RunSummary, SubredditSummary};
