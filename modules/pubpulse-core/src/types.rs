use chrono::{DateTime, Utc};

/// A normalized Reddit post — one row in the `reddit` table.
/// Score, ratio, and engagement are snapshots at fetch time; rows are
/// never updated after the first successful insert.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    /// Platform-assigned post id; primary key.
    pub id: String,
    pub subreddit: String,
    /// Host portion of the outbound URL.
    pub domain: String,
    pub created_at: DateTime<Utc>,
    pub title: String,
    /// Outbound URL with any query string stripped.
    pub url: String,
    pub score: i64,
    /// Upvote ratio in [0, 1].
    pub ratio: f64,
    /// Comment count.
    pub engagement: i64,
    /// Absolute permalink on reddit.com.
    pub permalink: String,
}

/// What happened to a single post during ingest. The catch-log-continue
/// policy around the insert is explicit: failures are data the caller
/// aggregates, not control flow.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// Row written.
    Inserted,
    /// Primary key already present; insert suppressed.
    Duplicate,
    /// Post had no parseable link domain and was never derived.
    NoLinkDomain,
    /// Insert failed; the scrape continued with the next post.
    Failed { reason: String },
}

/// Per-subreddit aggregation of record outcomes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubredditSummary {
    pub subreddit: String,
    pub fetched: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl SubredditSummary {
    pub fn new(subreddit: &str) -> Self {
        Self {
            subreddit: subreddit.to_string(),
            ..Default::default()
        }
    }

    pub fn record(&mut self, outcome: &RecordOutcome) {
        match outcome {
            RecordOutcome::Inserted => self.inserted += 1,
            RecordOutcome::Duplicate => self.duplicates += 1,
            RecordOutcome::NoLinkDomain => self.skipped += 1,
            RecordOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Whole-run aggregation, one entry per roster item in scrape order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub subreddits: Vec<SubredditSummary>,
}

impl RunSummary {
    pub fn push(&mut self, summary: SubredditSummary) {
        self.subreddits.push(summary);
    }

    pub fn fetched(&self) -> usize {
        self.subreddits.iter().map(|s| s.fetched).sum()
    }

    pub fn inserted(&self) -> usize {
        self.subreddits.iter().map(|s| s.inserted).sum()
    }

    pub fn duplicates(&self) -> usize {
        self.subreddits.iter().map(|s| s.duplicates).sum()
    }

    pub fn skipped(&self) -> usize {
        self.subreddits.iter().map(|s| s.skipped).sum()
    }

    pub fn failed(&self) -> usize {
        self.subreddits.iter().map(|s| s.failed).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_each_outcome() {
        let mut summary = SubredditSummary::new("news");
        summary.record(&RecordOutcome::Inserted);
        summary.record(&RecordOutcome::Inserted);
        summary.record(&RecordOutcome::Duplicate);
        summary.record(&RecordOutcome::NoLinkDomain);
        summary.record(&RecordOutcome::Failed {
            reason: "connection reset".to_string(),
        });

        assert_eq!(summary.inserted, 2);
        assert_eq!(summary.duplicates, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn run_summary_totals_across_subreddits() {
        let mut run = RunSummary::default();

        let mut a = SubredditSummary::new("news");
        a.fetched = 3;
        a.inserted = 2;
        a.skipped = 1;
        run.push(a);

        let mut b = SubredditSummary::new("politics");
        b.fetched = 2;
        b.inserted = 1;
        b.failed = 1;
        run.push(b);

        assert_eq!(run.fetched(), 5);
        assert_eq!(run.inserted(), 3);
        assert_eq!(run.skipped(), 1);
        assert_eq!(run.failed(), 1);
        assert_eq!(run.subreddits[0].subreddit, "news");
        assert_eq!(run.subreddits[1].subreddit, "politics");
    }
}
