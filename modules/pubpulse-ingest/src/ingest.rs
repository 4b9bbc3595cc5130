use tracing::{debug, info, warn};

use pubpulse_core::{PostRecord, RecordOutcome, RunSummary, SubredditSummary};

use crate::derive::derive_record;
use crate::error::Result;
use crate::traits::{PostSource, RecordSink};

/// Sequential, single-pass ingestor: fetch a subreddit's hot listing,
/// derive a record per post with a parseable link domain, insert with
/// conflict suppression. One invocation is one run; runs are idempotent
/// at the data level.
pub struct Ingestor<'a, S, K> {
    source: &'a S,
    sink: &'a K,
    fetch_limit: u32,
}

impl<'a, S: PostSource, K: RecordSink> Ingestor<'a, S, K> {
    pub fn new(source: &'a S, sink: &'a K, fetch_limit: u32) -> Self {
        Self {
            source,
            sink,
            fetch_limit,
        }
    }

    /// Persist one derived record. Insert failures become data in the
    /// summary rather than aborting the scrape.
    async fn persist(&self, record: &PostRecord) -> RecordOutcome {
        match self.sink.insert(record).await {
            Ok(true) => RecordOutcome::Inserted,
            Ok(false) => RecordOutcome::Duplicate,
            Err(e) => {
                warn!(error = %e, ?record, "Failed to insert post");
                RecordOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Scrape one subreddit's hot listing. Fetch errors propagate to the
    /// caller; insert errors are absorbed into the summary.
    pub async fn scrape_subreddit(&self, subreddit: &str) -> Result<SubredditSummary> {
        let posts = self.source.hot_posts(subreddit, self.fetch_limit).await?;

        let mut summary = SubredditSummary::new(subreddit);
        summary.fetched = posts.len();

        for post in &posts {
            let outcome = match derive_record(post) {
                Some(record) => self.persist(&record).await,
                None => {
                    debug!(id = %post.id, url = %post.url, "No parseable link domain, skipping");
                    RecordOutcome::NoLinkDomain
                }
            };
            summary.record(&outcome);
        }

        info!(
            subreddit,
            fetched = summary.fetched,
            inserted = summary.inserted,
            duplicates = summary.duplicates,
            skipped = summary.skipped,
            failed = summary.failed,
            "Subreddit scrape complete"
        );
        Ok(summary)
    }

    /// Scrape every roster entry, strictly in order, no parallelism.
    /// A fetch failure aborts the remaining roster; insert failures never do.
    pub async fn scrape_all(&self, subreddits: &[String]) -> Result<RunSummary> {
        let mut run = RunSummary::default();
        for subreddit in subreddits {
            run.push(self.scrape_subreddit(subreddit).await?);
        }
        Ok(run)
    }
}
