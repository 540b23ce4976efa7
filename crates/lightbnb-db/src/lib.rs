//! # lightbnb-db: Database Layer for LightBnB
//!
//! Data access for the LightBnB rental site: users, properties, reservations
//! and reviews in SQLite through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        LightBnB Data Flow                               │
//! │                                                                         │
//! │  Web handler (GET /properties?city=Vancouver)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   lightbnb-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │   │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │                │   │  (embedded)  │  │   │
//! │  │   │               │    │ UserRepo       │   │ 001_init.sql │  │   │
//! │  │   │ SqlitePool    │◄───│ PropertyRepo   │   │              │  │   │
//! │  │   │               │    │ ReservationRepo│   │              │  │   │
//! │  │   │               │    │ ReviewRepo     │   │              │  │   │
//! │  │   └───────────────┘    └────────────────┘   └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database (LIGHTBNB_DB_PATH, default ./lightbnb.db)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Configuration and the [`Database`] handle
//! - [`migrations`] - Embedded schema
//! - [`error`] - Database error types
//! - [`query`] - Executes search queries built by lightbnb-core
//! - [`repository`] - Repository implementations
//! - [`fixtures`] - Loads fixture JSON into an empty database
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lightbnb_core::{PropertySearch, DEFAULT_SEARCH_LIMIT};
//! use lightbnb_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//!
//! let criteria = PropertySearch {
//!     city: Some("Vancouver".into()),
//!     minimum_rating: Some(4.0),
//!     ..Default::default()
//! };
//! let listings = db.properties().search(&criteria, DEFAULT_SEARCH_LIMIT).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fixtures;
pub mod migrations;
pub mod pool;
pub mod query;
pub mod repository;

#[cfg(test)]
pub(crate) mod test_support;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use fixtures::{seed, SeedReport};
pub use pool::{Database, DbConfig, DEFAULT_DB_PATH};

// Repository re-exports for convenience
pub use repository::property::PropertyRepository;
pub use repository::reservation::ReservationRepository;
pub use repository::review::ReviewRepository;
pub use repository::user::UserRepository;
