use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pubpulse_core::AppConfig;
use pubpulse_ingest::{Ingestor, PostStore};
use reddit_client::{Credentials, RedditClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("pubpulse_ingest=info".parse()?)
                .add_directive("reddit_client=info".parse()?),
        )
        .init();

    info!("Pubpulse ingestor starting...");

    let config = AppConfig::from_env()?;
    config.log_redacted();

    let client = RedditClient::new(Credentials {
        client_id: config.reddit_client_id.clone(),
        client_secret: config.reddit_client_secret.clone(),
        user_agent: config.reddit_user_agent.clone(),
    });

    let store = PostStore::connect(&config.database_url).await?;
    store.migrate().await?;

    let ingestor = Ingestor::new(&client, &store, config.fetch_limit);
    let run = ingestor.scrape_all(&config.subreddits).await;

    // Close the pool on both exit paths before reporting the outcome.
    let result = match run {
        Ok(summary) => {
            info!(
                subreddits = summary.subreddits.len(),
                fetched = summary.fetched(),
                inserted = summary.inserted(),
                duplicates = summary.duplicates(),
                skipped = summary.skipped(),
                failed = summary.failed(),
                "Run complete"
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    };

    store.close().await;
    result
}
