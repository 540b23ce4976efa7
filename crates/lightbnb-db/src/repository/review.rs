//! # Review Repository
//!
//! Guest reviews. Their ratings feed `average_rating` in search and
//! reservation listings.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use lightbnb_core::{NewReview, PropertyReview};

/// Repository for property review database operations.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: SqlitePool,
}

impl ReviewRepository {
    /// Creates a new ReviewRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReviewRepository { pool }
    }

    /// Stores a review and returns the stored row.
    pub async fn insert(&self, review: &NewReview) -> DbResult<PropertyReview> {
        debug!(
            property_id = %review.property_id,
            rating = %review.rating,
            "Inserting review"
        );

        let inserted = sqlx::query_as::<_, PropertyReview>(
            r#"
            INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, guest_id, property_id, reservation_id, rating, message
            "#,
        )
        .bind(review.guest_id)
        .bind(review.property_id)
        .bind(review.reservation_id)
        .bind(review.rating)
        .bind(&review.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    /// Gets every review of a property, oldest first.
    pub async fn for_property(&self, property_id: i64) -> DbResult<Vec<PropertyReview>> {
        let reviews = sqlx::query_as::<_, PropertyReview>(
            r#"
            SELECT id, guest_id, property_id, reservation_id, rating, message
            FROM property_reviews
            WHERE property_id = $1
            ORDER BY id
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }
}
