//! SQL statement loading and execution.
//!
//! The four statements this service runs are external `.sql` files, loaded
//! once at startup into a [`QuerySet`] and treated as opaque text from then
//! on: parameters are bound positionally and rows are scanned positionally,
//! so nothing in here depends on what the SQL actually selects from.

use anyhow::{Context, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::path::Path;

use crate::models::{Article, Source};
use crate::params::PAGE_SIZE;

/// The process-wide set of query texts. Loaded once before serving begins
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct QuerySet {
    user_sources: String,
    all_articles: String,
    source_articles: String,
    search_user_articles: String,
}

fn read_statement(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read query file: {}", path.display()))
}

impl QuerySet {
    /// Reads all four statements from `dir`. Missing or unreadable files
    /// fail startup; there is no partial set.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            user_sources: read_statement(dir, "user_sources.sql")?,
            all_articles: read_statement(dir, "all_articles_paginate.sql")?,
            source_articles: read_statement(dir, "source_articles_paginate.sql")?,
            search_user_articles: read_statement(dir, "search_user_articles_paginate.sql")?,
        })
    }

    /// Sources followed by `user`, in store-returned order.
    pub async fn user_sources(&self, pool: &SqlitePool, user: i64) -> Result<Vec<Source>> {
        let rows = sqlx::query(&self.user_sources)
            .bind(user)
            .fetch_all(pool)
            .await?;
        rows.iter().map(scan_source).collect()
    }

    /// One page of the newest articles across all sources.
    pub async fn all_articles(&self, pool: &SqlitePool, page_index: i64) -> Result<Vec<Article>> {
        let rows = sqlx::query(&self.all_articles)
            .bind(page_index * PAGE_SIZE)
            .bind(PAGE_SIZE)
            .fetch_all(pool)
            .await?;
        rows.iter().map(scan_article).collect()
    }

    /// One page of `source`'s articles.
    pub async fn source_articles(
        &self,
        pool: &SqlitePool,
        source: i64,
        page_index: i64,
    ) -> Result<Vec<Article>> {
        let rows = sqlx::query(&self.source_articles)
            .bind(source)
            .bind(page_index * PAGE_SIZE)
            .bind(PAGE_SIZE)
            .fetch_all(pool)
            .await?;
        rows.iter().map(scan_article).collect()
    }

    /// One page of `user`'s articles matching `search`. The keyword is
    /// bound as-is; any wildcard semantics belong to the SQL text.
    pub async fn search_user_articles(
        &self,
        pool: &SqlitePool,
        search: &str,
        user: i64,
        page_index: i64,
    ) -> Result<Vec<Article>> {
        let rows = sqlx::query(&self.search_user_articles)
            .bind(search)
            .bind(user)
            .bind(page_index * PAGE_SIZE)
            .bind(PAGE_SIZE)
            .fetch_all(pool)
            .await?;
        rows.iter().map(scan_article).collect()
    }
}

// Columns are scanned by position, not name: (uri, title, pubdate) for
// articles and (uri, title, id) for sources.

fn scan_article(row: &SqliteRow) -> Result<Article> {
    Ok(Article {
        uri: row.try_get(0)?,
        title: row.try_get(1)?,
        pubdate: row.try_get(2)?,
    })
}

fn scan_source(row: &SqliteRow) -> Result<Source> {
    Ok(Source {
        uri: row.try_get(0)?,
        title: row.try_get(1)?,
        id: row.try_get(2)?,
    })
}
