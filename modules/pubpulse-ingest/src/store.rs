// Postgres persistence for normalized posts.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use pubpulse_core::PostRecord;

use crate::error::Result;

pub struct PostStore {
    pool: PgPool,
}

impl PostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a pool to the configured Postgres instance.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Run the embedded SQL migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Insert a record, suppressing primary-key conflicts. Returns whether a
    /// row was actually written; `false` means the id already existed and
    /// the stored snapshot was left untouched.
    pub async fn insert(&self, record: &PostRecord) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO reddit
                (id, subreddit, domain, created_at, title, url,
                 score, ratio, engagement, permalink)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&record.id)
        .bind(&record.subreddit)
        .bind(&record.domain)
        .bind(record.created_at)
        .bind(&record.title)
        .bind(&record.url)
        .bind(record.score)
        .bind(record.ratio)
        .bind(record.engagement)
        .bind(&record.permalink)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Close the pool, draining in-flight connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
