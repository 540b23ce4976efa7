//! # Repository Module
//!
//! Database repository implementations for LightBnB.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Web handler                                                           │
//! │       │                                                                 │
//! │       │  db.properties().search(&criteria, 10)                         │
//! │       ▼                                                                 │
//! │  PropertyRepository                                                    │
//! │  ├── search(&self, criteria, limit)                                    │
//! │  ├── get_by_id(&self, id)                                              │
//! │  └── insert(&self, property)                                           │
//! │       │                                                                 │
//! │       │  SQL + bound parameters                                         │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Each repository owns a pool clone handed to it at construction.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`UserRepository`](user::UserRepository) - Lookup and registration
//! - [`PropertyRepository`](property::PropertyRepository) - Search and listing
//! - [`ReservationRepository`](reservation::ReservationRepository) - Guest stays
//! - [`ReviewRepository`](review::ReviewRepository) - Ratings behind `average_rating`

pub mod property;
pub mod reservation;
pub mod review;
pub mod user;
