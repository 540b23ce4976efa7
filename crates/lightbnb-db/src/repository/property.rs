//! # Property Repository
//!
//! Property search and listing.
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Property Search Works                            │
//! │                                                                         │
//! │  PropertySearch { city: "Vancouver", minimum_rating: 4 }, limit 10     │
//! │       │                                                                 │
//! │       ▼  lightbnb_core::build_property_search                          │
//! │  BuiltQuery { sql, params: ["%Vancouver%", 4.0, 10] }                  │
//! │       │                                                                 │
//! │       ▼  query::fetch_all - bind params in order                       │
//! │  ┌─────────────────────────────────────────────────────┐               │
//! │  │ properties LEFT JOIN property_reviews               │               │
//! │  │ GROUP BY properties.id                              │               │
//! │  │ HAVING AVG(rating) >= 4.0                           │               │
//! │  │ ORDER BY cost_per_night                             │               │
//! │  └─────────────────────────────────────────────────────┘               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<PropertyListing>, cheapest first                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use crate::query;
use lightbnb_core::{build_property_search, NewProperty, Property, PropertyListing, PropertySearch};

/// Repository for property database operations.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    pool: SqlitePool,
}

impl PropertyRepository {
    /// Creates a new PropertyRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PropertyRepository { pool }
    }

    /// Searches properties matching every present filter.
    ///
    /// ## Arguments
    /// * `criteria` - Optional filters; absent ones are skipped
    /// * `limit` - Maximum rows to return
    ///
    /// ## Returns
    /// Listings ordered by nightly cost, cheapest first. A failed query is
    /// an `Err`, never an empty list.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let criteria = PropertySearch {
    ///     city: Some("Vancouver".into()),
    ///     ..Default::default()
    /// };
    /// let listings = repo.search(&criteria, DEFAULT_SEARCH_LIMIT).await?;
    /// ```
    pub async fn search(
        &self,
        criteria: &PropertySearch,
        limit: u32,
    ) -> DbResult<Vec<PropertyListing>> {
        debug!(?criteria, limit = %limit, "Searching properties");

        let built = build_property_search(criteria, limit);
        let listings: Vec<PropertyListing> = query::fetch_all(&self.pool, &built).await?;

        debug!(count = listings.len(), "Search returned properties");
        Ok(listings)
    }

    /// Gets a property by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Property>> {
        let property = sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(property)
    }

    /// Lists a new property and returns the stored row.
    ///
    /// ## Returns
    /// * `Ok(Property)` - Inserted property with its new id
    /// * `Err(DbError::ForeignKeyViolation)` - Owner does not exist
    pub async fn insert(&self, property: &NewProperty) -> DbResult<Property> {
        insert_property(&self.pool, property).await
    }

    /// Counts listed properties.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Inserts a property with any executor, such as an open transaction.
pub(crate) async fn insert_property<'e, E>(executor: E, property: &NewProperty) -> DbResult<Property>
where
    E: Executor<'e, Database = Sqlite>,
{
    debug!(owner_id = %property.owner_id, title = %property.title, "Inserting property");

    let inserted = sqlx::query_as::<_, Property>(
        r#"
        INSERT INTO properties (
            title, description, owner_id, cover_photo_url, thumbnail_photo_url,
            cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
            province, city, country, street, post_code
        ) VALUES (
            $1, $2, $3, $4, $5,
            $6, $7, $8, $9,
            $10, $11, $12, $13, $14
        )
        RETURNING *
        "#,
    )
    .bind(&property.title)
    .bind(&property.description)
    .bind(property.owner_id)
    .bind(&property.cover_photo_url)
    .bind(&property.thumbnail_photo_url)
    .bind(property.cost_per_night)
    .bind(property.parking_spaces)
    .bind(property.number_of_bathrooms)
    .bind(property.number_of_bedrooms)
    .bind(&property.province)
    .bind(&property.city)
    .bind(&property.country)
    .bind(&property.street)
    .bind(&property.post_code)
    .fetch_one(executor)
    .await?;

    Ok(inserted)
}

// =============================================================================
// Unit Tests
// =============================================================================
