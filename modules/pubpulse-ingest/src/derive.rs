use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;

use pubpulse_core::PostRecord;
use reddit_client::HotPost;

/// Origin prefixed onto Reddit's site-relative permalinks.
const WEB_ORIGIN: &str = "https://www.reddit.com";

/// Host portion of a URL: the text between the first `//` and the next `/`.
static RE_DOMAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("//([^/]*)/").expect("valid regex"));

/// Derive the normalized record for a post, or `None` if its outbound URL
/// has no parseable host. That is the only filtering rule here; duplicate
/// suppression happens at insert time.
pub fn derive_record(post: &HotPost) -> Option<PostRecord> {
    let domain = RE_DOMAIN.captures(&post.url)?.get(1)?.as_str().to_string();

    // Snapshot the URL without its query string.
    let url = match post.url.find('?') {
        Some(idx) => post.url[..idx].to_string(),
        None => post.url.clone(),
    };

    let created_at = DateTime::from_timestamp(post.created_utc as i64, 0)?;

    Some(PostRecord {
        id: post.id.clone(),
        subreddit: post.subreddit.clone(),
        domain,
        created_at,
        title: post.title.clone(),
        url,
        score: post.score,
        ratio: post.upvote_ratio,
        engagement: post.num_comments,
        permalink: format!("{WEB_ORIGIN}{}", post.permalink),
    })
}
