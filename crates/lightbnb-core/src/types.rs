//! # Domain Types
//!
//! Rows and insert payloads for the LightBnB data layer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │    Property     │   │   Reservation   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  owner_id (FK)  │◄──│  property_id    │       │
//! │  │  email (unique) │   │  cost_per_night │   │  guest_id (FK)  │       │
//! │  └─────────────────┘   │  city, ...      │   │  start/end date │       │
//! │                        └────────▲────────┘   └────────▲────────┘       │
//! │                                 │                     │                 │
//! │                        ┌────────┴─────────────────────┴──┐             │
//! │                        │         PropertyReview          │             │
//! │                        │  rating → AVG() per property    │             │
//! │                        └─────────────────────────────────┘             │
//! │                                                                         │
//! │  Listings pair a row with derived columns:                              │
//! │  PropertyListing    = Property + average_rating                        │
//! │  ReservationListing = reservation dates + Property + average_rating    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Money
//! `cost_per_night` is stored in cents, as an integer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// User
// =============================================================================

/// A registered user. Owners and guests are both users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Password hash as stored. Never compared by this layer.
    pub password: String,
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<&User> for NewUser {
    fn from(user: &User) -> Self {
        NewUser {
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }
}

// =============================================================================
// Property
// =============================================================================

/// A rentable property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Property {
    pub id: i64,

    /// User who lists the property.
    pub owner_id: i64,

    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,

    /// Nightly cost in cents.
    pub cost_per_night: i64,

    pub parking_spaces: i64,
    pub number_of_bathrooms: i64,
    pub number_of_bedrooms: i64,

    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,

    /// Inactive listings are kept for reservation history.
    pub active: bool,
}

/// Payload for listing a new property.
///
/// Field order follows the column order of the insert statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProperty {
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i64,
    pub cover_photo_url: String,
    pub thumbnail_photo_url: String,
    pub cost_per_night: i64,
    pub parking_spaces: i64,
    pub number_of_bathrooms: i64,
    pub number_of_bedrooms: i64,
    pub province: String,
    pub city: String,
    pub country: String,
    pub street: String,
    pub post_code: String,
}

impl From<&Property> for NewProperty {
    fn from(p: &Property) -> Self {
        NewProperty {
            title: p.title.clone(),
            description: p.description.clone(),
            owner_id: p.owner_id,
            cover_photo_url: p.cover_photo_url.clone(),
            thumbnail_photo_url: p.thumbnail_photo_url.clone(),
            cost_per_night: p.cost_per_night,
            parking_spaces: p.parking_spaces,
            number_of_bathrooms: p.number_of_bathrooms,
            number_of_bedrooms: p.number_of_bedrooms,
            province: p.province.clone(),
            city: p.city.clone(),
            country: p.country.clone(),
            street: p.street.clone(),
            post_code: p.post_code.clone(),
        }
    }
}

/// A property search result row.
///
/// `average_rating` is `None` when the property has no reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct PropertyListing {
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub property: Property,

    pub average_rating: Option<f64>,
}

// =============================================================================
// Reservation
// =============================================================================

/// A guest's stay at a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Reservation {
    pub id: i64,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    pub property_id: i64,
    pub guest_id: i64,
}

/// Payload for booking a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewReservation {
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    pub property_id: i64,
    pub guest_id: i64,
}

/// A reservation joined with the reserved property and its rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct ReservationListing {
    pub reservation_id: i64,
    pub guest_id: i64,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,

    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub property: Property,

    pub average_rating: Option<f64>,
}

// =============================================================================
// Property Review
// =============================================================================

/// A guest's rating of a property after a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct PropertyReview {
    pub id: i64,
    pub guest_id: i64,
    pub property_id: i64,
    pub reservation_id: i64,
    pub rating: i64,
    pub message: Option<String>,
}

/// Payload for leaving a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewReview {
    pub guest_id: i64,
    pub property_id: i64,
    pub reservation_id: i64,
    pub rating: i64,
    pub message: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
