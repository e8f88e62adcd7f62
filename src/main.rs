//! # feedserve CLI
//!
//! The `feedserve` binary hosts the read-only feed API and a couple of
//! operator conveniences for inspecting a store from the shell.
//!
//! ## Usage
//!
//! ```bash
//! feedserve --config ./config/feedserve.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `feedserve init` | Create the SQLite database and schema |
//! | `feedserve serve` | Start the HTTP server |
//! | `feedserve sources --user <u>` | Print the sources a user follows |
//! | `feedserve articles --page <p>` | Print a page of the newest articles |
//!
//! The config file is optional — every setting has a default, and `PORT`,
//! `SSL_CERT_FILE`, and `SSL_KEY_FILE` override the listener settings from
//! the environment.

mod config;
mod db;
mod listing;
mod migrate;
mod models;
mod params;
mod queries;
mod server;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// feedserve — a read-only HTTP API over a SQLite feed store.
#[derive(Parser)]
#[command(
    name = "feedserve",
    about = "A read-only HTTP API serving paginated article and source listings",
    version
)]
struct Cli {
    /// Path to configuration file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = "./config/feedserve.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite database file and the `sources`, `articles`, and
    /// `user_sources` tables. Idempotent — running it multiple times is safe.
    Init,

    /// Start the HTTP server.
    ///
    /// Loads the four query files, opens the store, and serves the JSON API
    /// on the configured port (TLS when both cert and key are configured).
    Serve,

    /// Print the sources a user follows.
    Sources {
        /// User id. Bounded the same way the HTTP route bounds it.
        #[arg(long, default_value = "1")]
        user: String,
    },

    /// Print one page of the newest articles across all sources.
    Articles {
        /// 1-based page number.
        #[arg(long, default_value = "1")]
        page: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&cfg).await?;
            println!("Database initialized successfully.");
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
        Commands::Sources { user } => {
            listing::run_sources(&cfg, &user).await?;
        }
        Commands::Articles { page } => {
            listing::run_articles(&cfg, &page).await?;
        }
    }

    Ok(())
}
