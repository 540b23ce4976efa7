//! # Reservation Repository
//!
//! Guest stays. The "my reservations" page shows only stays that have not
//! ended yet, each joined to its property and that property's average
//! rating.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use lightbnb_core::{NewReservation, Reservation, ReservationListing};

/// Repository for reservation database operations.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: SqlitePool,
}

impl ReservationRepository {
    /// Creates a new ReservationRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReservationRepository { pool }
    }

    /// Gets a guest's reservations that end after today.
    ///
    /// Ordered by start date, soonest first. Properties without reviews are
    /// included with a `None` average rating.
    pub async fn upcoming_for_guest(
        &self,
        guest_id: i64,
        limit: u32,
    ) -> DbResult<Vec<ReservationListing>> {
        debug!(guest_id = %guest_id, limit = %limit, "Fetching upcoming reservations");

        let listings = sqlx::query_as::<_, ReservationListing>(
            r#"
            SELECT reservations.id AS reservation_id,
                   reservations.guest_id,
                   reservations.start_date,
                   reservations.end_date,
                   properties.*,
                   AVG(property_reviews.rating) AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            LEFT JOIN property_reviews ON property_reviews.property_id = properties.id
            WHERE reservations.guest_id = $1
              AND reservations.end_date > date('now')
            GROUP BY reservations.id
            ORDER BY reservations.start_date, reservations.id
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = listings.len(), "Fetched upcoming reservations");
        Ok(listings)
    }

    /// Books a stay and returns the stored row.
    ///
    /// ## Returns
    /// * `Ok(Reservation)` - Inserted reservation with its new id
    /// * `Err(DbError::ForeignKeyViolation)` - Unknown guest or property
    pub async fn insert(&self, reservation: &NewReservation) -> DbResult<Reservation> {
        debug!(
            guest_id = %reservation.guest_id,
            property_id = %reservation.property_id,
            start = %reservation.start_date,
            "Inserting reservation"
        );

        let inserted = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (start_date, end_date, property_id, guest_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, start_date, end_date, property_id, guest_id
            "#,
        )
        .bind(reservation.start_date)
        .bind(reservation.end_date)
        .bind(reservation.property_id)
        .bind(reservation.guest_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }
}
