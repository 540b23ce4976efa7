//! # Seed Loader
//!
//! Loads the fixture users and properties into a database for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./lightbnb.db from ./fixtures
//! cargo run -p lightbnb-db --bin seed
//!
//! # Specify database path and fixture directory
//! cargo run -p lightbnb-db --bin seed -- --db ./data/lightbnb.db --fixtures ./fixtures
//! ```
//!
//! `RUST_LOG` overrides the default log filter.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lightbnb_core::FixtureSet;
use lightbnb_db::{seed, Database, DbConfig, DEFAULT_DB_PATH};

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Load LightBnB fixture data into SQLite")]
struct Args {
    /// SQLite database file
    #[arg(short, long, env = "LIGHTBNB_DB_PATH", default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Directory holding users.json and properties.json
    #[arg(short, long, default_value = "./fixtures")]
    fixtures: PathBuf,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lightbnb=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn read_document(dir: &Path, name: &str) -> anyhow::Result<String> {
    let path = dir.join(name);
    fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    info!(db = %args.db.display(), fixtures = %args.fixtures.display(), "Seeding database");

    let fixtures = FixtureSet::from_json(
        &read_document(&args.fixtures, "users.json")?,
        &read_document(&args.fixtures, "properties.json")?,
    )?;

    let mut config = DbConfig::from_env()?;
    config.database_path = args.db;

    let db = Database::new(config)
        .await
        .context("opening database")?;

    let report = seed(&db, &fixtures).await?;
    if report.skipped {
        info!("Database already seeded, nothing to do");
    } else {
        info!(
            users = report.users,
            properties = report.properties,
            "Seeded fixtures"
        );
    }

    db.close().await;
    Ok(())
}
