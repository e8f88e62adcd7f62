//! # feedserve
//!
//! A read-only HTTP API serving paginated article and source listings from
//! a SQLite feed store.
//!
//! feedserve answers three query shapes — the sources a user follows, the
//! articles of a single source, and a keyword search over a user's articles
//! — each as a JSON list wrapped in a `{"results": [...]}` envelope. The
//! SQL doing the actual selection lives in external `.sql` files loaded
//! once at startup; the server only normalizes path parameters, binds them,
//! and encodes rows.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────────┐   ┌──────────┐
//! │  Router  │──▶│ Param        │──▶│ QuerySet  │
//! │  (axum)  │   │ Normalizer   │   │ (sqlx)    │
//! └──────────┘   └──────────────┘   └────┬─────┘
//!                                        │
//!                                        ▼
//!                                   ┌──────────┐
//!                                   │  SQLite   │
//!                                   └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! feedserve init                 # create database schema
//! feedserve serve                # start HTTP server on $PORT (default 7878)
//! feedserve sources --user 1     # print a user's sources
//! feedserve articles --page 1    # print the newest articles
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing with env overrides |
//! | [`models`] | Core data types and response envelopes |
//! | [`params`] | Path-parameter normalization and pagination |
//! | [`queries`] | SQL file loading and execution |
//! | [`server`] | HTTP server |
//! | [`db`] | Database connection |
//! | [`migrate`] | Schema bootstrap |

pub mod config;
pub mod db;
pub mod listing;
pub mod migrate;
pub mod models;
pub mod params;
pub mod queries;
pub mod server;
