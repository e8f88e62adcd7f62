use anyhow::Result;

use crate::config::Config;
use crate::db;

/// Creates the feed store schema. Idempotent; safe to run repeatedly.
///
/// The server itself never writes — this exists so `feedserve init` (and
/// the test suite) can stand up an empty store for an ingest process to
/// fill.
pub async fn run_migrations(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;

    // Create sources table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sources (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            uri TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await?;

    // Create articles table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            uri TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            pubdate INTEGER NOT NULL,
            source_id INTEGER NOT NULL,
            FOREIGN KEY (source_id) REFERENCES sources(id)
        )
        "#,
    )
    .execute(&pool)
    .await?;

    // Create user -> source subscriptions
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_sources (
            user_id INTEGER NOT NULL,
            source_id INTEGER NOT NULL,
            PRIMARY KEY (user_id, source_id),
            FOREIGN KEY (source_id) REFERENCES sources(id)
        )
        "#,
    )
    .execute(&pool)
    .await?;

    // Create indexes
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_articles_source_pubdate ON articles(source_id, pubdate DESC)",
    )
    .execute(&pool)
    .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_articles_pubdate ON articles(pubdate DESC)")
        .execute(&pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_user_sources_user ON user_sources(user_id)")
        .execute(&pool)
        .await?;

    pool.close().await;
    Ok(())
}
