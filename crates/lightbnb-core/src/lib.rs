//! # lightbnb-core: Domain Types and Query Building
//!
//! Pure building blocks for the LightBnB data layer. No I/O happens here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        LightBnB Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Server (not in this workspace)           │   │
//! │  │      /properties ──► /reservations ──► /users/login             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              lightbnb-db (Database Layer)                       │   │
//! │  │        SQLite pool, repositories, embedded schema               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ lightbnb-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐   ┌────────────────┐   ┌───────────┐          │   │
//! │  │   │   types   │   │     search     │   │ fixtures  │          │   │
//! │  │   │ User      │   │ PropertySearch │   │ FixtureSet│          │   │
//! │  │   │ Property  │   │ BuiltQuery     │   │           │          │   │
//! │  │   └───────────┘   └────────────────┘   └───────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Users, properties, reservations, reviews and listings
//! - [`search`] - Property search criteria and the query builder
//! - [`fixtures`] - JSON fixture parsing
//! - [`error`] - Core error types
//!
//! ## Example Usage
//!
//! ```rust
//! use lightbnb_core::{build_property_search, PropertySearch, SqlValue};
//!
//! let criteria = PropertySearch {
//!     city: Some("Vancouver".to_string()),
//!     ..Default::default()
//! };
//! let query = build_property_search(&criteria, 5);
//!
//! assert!(query.sql.contains("properties.city LIKE $1"));
//! assert_eq!(query.params, vec![SqlValue::from("%Vancouver%"), SqlValue::Integer(5)]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fixtures;
pub mod search;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use fixtures::FixtureSet;
pub use search::{
    build_property_search, BuiltQuery, Comparison, FilterStage, Predicate, PropertySearch,
    SqlValue, DEFAULT_SEARCH_LIMIT,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default cap on upcoming reservations returned for a guest.
pub const DEFAULT_RESERVATION_LIMIT: u32 = 10;
