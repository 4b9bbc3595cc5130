// Test mocks matching the two trait boundaries:
// - StubSource (PostSource) — HashMap of subreddit → canned posts
// - MemorySink (RecordSink) — in-memory table with first-insert-wins
//   semantics and per-id failure injection

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use pubpulse_core::PostRecord;
use reddit_client::{HotPost, RedditError};

use crate::error::{IngestError, Result};
use crate::traits::{PostSource, RecordSink};

/// A plausible hot post with the given id, subreddit, and outbound URL.
pub fn hot_post(id: &str, subreddit: &str, url: &str) -> HotPost {
    HotPost {
        id: id.to_string(),
        subreddit: subreddit.to_string(),
        title: format!("post {id}"),
        url: url.to_string(),
        permalink: format!("/r/{subreddit}/comments/{id}/post_{id}/"),
        created_utc: 1_700_000_000.0,
        score: 10,
        upvote_ratio: 0.9,
        num_comments: 3,
    }
}

/// Canned post source. Records fetch order; unregistered subreddits
/// return an API error.
pub struct StubSource {
    listings: HashMap<String, Vec<HotPost>>,
    pub fetches: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self {
            listings: HashMap::new(),
            fetches: Mutex::new(Vec::new()),
        }
    }

    pub fn on_subreddit(mut self, subreddit: &str, posts: Vec<HotPost>) -> Self {
        self.listings.insert(subreddit.to_string(), posts);
        self
    }
}

#[async_trait]
impl PostSource for StubSource {
    async fn hot_posts(&self, subreddit: &str, limit: u32) -> Result<Vec<HotPost>> {
        self.fetches.lock().unwrap().push(subreddit.to_string());
        let posts = self.listings.get(subreddit).ok_or_else(|| {
            IngestError::Fetch(RedditError::Api {
                status: 404,
                message: format!("no listing for r/{subreddit}"),
            })
        })?;
        Ok(posts.iter().take(limit as usize).cloned().collect())
    }
}

/// In-memory sink mirroring `ON CONFLICT (id) DO NOTHING`.
pub struct MemorySink {
    pub rows: Mutex<HashMap<String, PostRecord>>,
    failing_ids: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            failing_ids: Vec::new(),
        }
    }

    /// Make inserts for the given post id fail with a database error.
    pub fn failing_on(mut self, id: &str) -> Self {
        self.failing_ids.push(id.to_string());
        self
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn insert(&self, record: &PostRecord) -> Result<bool> {
        if self.failing_ids.contains(&record.id) {
            return Err(IngestError::Database(sqlx::Error::PoolClosed));
        }

        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&record.id) {
            return Ok(false);
        }
        rows.insert(record.id.clone(), record.clone());
        Ok(true)
    }
}
