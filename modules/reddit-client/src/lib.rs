pub mod error;
pub mod types;

pub use error::{RedditError, Result};
pub use types::{HotPost, Listing, ListingData, Thing};

use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_BASE: &str = "https://oauth.reddit.com";

/// Reddit caps listing pages at 100 items; larger requests are paginated
/// with the `after` cursor.
const PAGE_SIZE: u32 = 100;

/// Script-app credentials for the OAuth2 client-credentials grant.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

struct CachedToken {
    value: String,
    expires_at: Instant,
}

/// Long-lived, read-only Reddit API client. Authenticates lazily on first
/// use and re-authenticates when the bearer token nears expiry.
pub struct RedditClient {
    client: reqwest::Client,
    credentials: Credentials,
    token: Mutex<Option<CachedToken>>,
}

impl RedditClient {
    pub fn new(credentials: Credentials) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(&credentials.user_agent)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            credentials,
            token: Mutex::new(None),
        }
    }

    /// Exchange script-app credentials for a bearer token.
    async fn access_token(&self) -> Result<String> {
        let mut guard = self.token.lock().await;
        if let Some(token) = guard.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.value.clone());
            }
        }

        let resp = self
            .client
            .post(TOKEN_URL)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(RedditError::Auth {
                status: status.as_u16(),
                message,
            });
        }

        let token: TokenResponse = resp.json().await?;
        debug!(expires_in = token.expires_in, "Obtained Reddit access token");

        let value = token.access_token.clone();
        *guard = Some(CachedToken {
            value: token.access_token,
            // Refresh a minute early so a token can't lapse mid-listing.
            expires_at: Instant::now() + Duration::from_secs(token.expires_in.saturating_sub(60)),
        });
        Ok(value)
    }

    /// Fetch up to `limit` posts from a subreddit's hot listing, fully
    /// materialized, following the `after` cursor across pages.
    pub async fn hot(&self, subreddit: &str, limit: u32) -> Result<Vec<HotPost>> {
        let mut posts: Vec<HotPost> = Vec::new();
        let mut after: Option<String> = None;

        while (posts.len() as u32) < limit {
            let page_size = PAGE_SIZE.min(limit - posts.len() as u32);
            let page = self
                .hot_page(subreddit, page_size, after.as_deref())
                .await?;

            let fetched = page.data.children.len();
            posts.extend(page.data.children.into_iter().map(|child| child.data));

            after = page.data.after;
            if after.is_none() || fetched == 0 {
                break;
            }
        }

        info!(subreddit, count = posts.len(), "Fetched hot listing");
        Ok(posts)
    }

    async fn hot_page(
        &self,
        subreddit: &str,
        limit: u32,
        after: Option<&str>,
    ) -> Result<Listing<HotPost>> {
        let token = self.access_token().await?;
        let url = format!("{}/r/{}/hot", API_BASE, subreddit);

        // raw_json=1 stops Reddit HTML-escaping titles in the response.
        let mut query: Vec<(&str, String)> = vec![
            ("limit", limit.to_string()),
            ("raw_json", "1".to_string()),
        ];
        if let Some(after) = after {
            query.push(("after", after.to_string()));
        }

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .query(&query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(RedditError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }
}
