use async_trait::async_trait;

use pubpulse_core::PostRecord;
use reddit_client::HotPost;

use crate::error::Result;
use crate::store::PostStore;

/// Source of hot posts for a subreddit. Implemented by the live Reddit
/// client; tests substitute canned listings.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn hot_posts(&self, subreddit: &str, limit: u32) -> Result<Vec<HotPost>>;
}

/// Destination for normalized records.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Returns whether a row was written; `false` means the id already
    /// existed and the insert was suppressed.
    async fn insert(&self, record: &PostRecord) -> Result<bool>;
}

#[async_trait]
impl PostSource for reddit_client::RedditClient {
    async fn hot_posts(&self, subreddit: &str, limit: u32) -> Result<Vec<HotPost>> {
        Ok(self.hot(subreddit, limit).await?)
    }
}

#[async_trait]
impl RecordSink for PostStore {
    async fn insert(&self, record: &PostRecord) -> Result<bool> {
        PostStore::insert(self, record).await
    }
}
