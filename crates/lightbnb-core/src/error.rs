//! # Error Types
//!
//! Errors raised by lightbnb-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lightbnb-core errors (this file)                                      │
//! │  └── CoreError        - Fixture parsing failures                       │
//! │                                                                         │
//! │  lightbnb-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The search query builder never fails: absent criteria are skipped,
//! not rejected.

use thiserror::Error;

/// Core errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A fixture document is not valid JSON or does not match the row shape.
    #[error("Invalid fixture {document}: {source}")]
    InvalidFixture {
        document: &'static str,
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
