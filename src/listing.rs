//! CLI listing commands.
//!
//! Runs the same query set the server uses and prints the rows to stdout.
//! These exist for operators poking at a store without curl; the HTTP
//! surface is the real interface.

use anyhow::Result;

use crate::config::Config;
use crate::db;
use crate::params::{int_param, page_param, MAX_USERS};
use crate::queries::QuerySet;

/// Prints the sources followed by a user.
pub async fn run_sources(config: &Config, user: &str) -> Result<()> {
    let pool = db::connect(config).await?;
    let queries = QuerySet::load(&config.queries.dir)?;

    let user = int_param(user, "1", 1, 1, MAX_USERS);
    let sources = queries.user_sources(&pool, user).await?;
    pool.close().await;

    if sources.is_empty() {
        println!("No sources for user {}.", user);
        return Ok(());
    }

    println!("{:<6} {:<48} TITLE", "ID", "URI");
    for source in &sources {
        println!("{:<6} {:<48} {}", source.id, source.uri, source.title);
    }
    Ok(())
}

/// Prints one page of the newest articles across all sources.
pub async fn run_articles(config: &Config, page: &str) -> Result<()> {
    let pool = db::connect(config).await?;
    let queries = QuerySet::load(&config.queries.dir)?;

    let page = page_param(page);
    let articles = queries.all_articles(&pool, page).await?;
    pool.close().await;

    if articles.is_empty() {
        println!("No articles.");
        return Ok(());
    }

    for article in &articles {
        println!(
            "{}  {:<48} {}",
            format_ts_iso(article.pubdate),
            article.uri,
            article.title
        );
    }
    Ok(())
}

fn format_ts_iso(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| ts.to_string())
}
