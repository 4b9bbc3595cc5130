use serde::Deserialize;

/// The envelope Reddit wraps every listing response in (`kind: "Listing"`).
#[derive(Debug, Clone, Deserialize)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingData<T> {
    pub children: Vec<Thing<T>>,
    /// Pagination cursor; `None` on the last page.
    pub after: Option<String>,
}

/// A kinded item inside a listing (`t3` for link posts).
#[derive(Debug, Clone, Deserialize)]
pub struct Thing<T> {
    pub kind: String,
    pub data: T,
}

/// A single post from a subreddit's hot listing. Only the fields the
/// ingestor consumes; Reddit sends far more.
#[derive(Debug, Clone, Deserialize)]
pub struct HotPost {
    pub id: String,
    /// Display name of the subreddit, without the `r/` prefix.
    pub subreddit: String,
    pub title: String,
    /// Outbound URL for link posts; for self posts this is the post's own
    /// reddit.com URL.
    pub url: String,
    /// Site-relative permalink, e.g. `/r/news/comments/abc123/slug/`.
    pub permalink: String,
    /// Creation time in epoch seconds. Reddit serializes this as a float.
    pub created_utc: f64,
    pub score: i64,
    pub upvote_ratio: f64,
    pub num_comments: i64,
}
