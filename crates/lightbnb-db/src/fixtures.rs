//! # Fixture Seeding
//!
//! Loads a [`FixtureSet`] into an empty database.
//!
//! ```text
//! users.json ──► insert each user ──► fixture id → stored id
//!                                           │
//! properties.json ──► owner_id remapped ────┘──► insert each property
//! ```
//!
//! Seeding is skipped when the database already holds users, so running the
//! seed binary twice leaves the first load untouched.

use std::collections::HashMap;

use sqlx::SqliteConnection;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::pool::Database;
use crate::repository::property::insert_property;
use crate::repository::user::insert_user;
use lightbnb_core::{FixtureSet, NewProperty, NewUser};

/// Outcome of a [`seed`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub users: usize,
    pub properties: usize,
    /// True when existing users made the run a no-op.
    pub skipped: bool,
}

/// Inserts fixture users, then their properties, in one transaction.
///
/// A failed insert rolls back everything, so a later run starts from an
/// empty database again.
///
/// ## Returns
/// * `Ok(SeedReport)` - Rows inserted, or `skipped` if data was present
/// * `Err(DbError::NotFound)` - A property names an owner missing from users.json
pub async fn seed(db: &Database, fixtures: &FixtureSet) -> DbResult<SeedReport> {
    let existing = db.users().count().await?;
    if existing > 0 {
        warn!(existing, "Database already has users, skipping seed");
        return Ok(SeedReport {
            skipped: true,
            ..SeedReport::default()
        });
    }

    let mut tx = db.pool().begin().await?;
    if let Err(err) = insert_all(&mut tx, fixtures).await {
        warn!(error = %err, "Seed failed, rolling back");
        tx.rollback().await?;
        return Err(err);
    }
    tx.commit().await?;

    let report = SeedReport {
        users: fixtures.users().len(),
        properties: fixtures.properties().len(),
        skipped: false,
    };
    info!(users = report.users, properties = report.properties, "Seed complete");

    Ok(report)
}

async fn insert_all(conn: &mut SqliteConnection, fixtures: &FixtureSet) -> DbResult<()> {
    let mut owner_ids: HashMap<i64, i64> = HashMap::with_capacity(fixtures.users().len());
    for user in fixtures.users() {
        let stored = insert_user(&mut *conn, &NewUser::from(user)).await?;
        debug!(fixture_id = user.id, id = stored.id, "Seeded user");
        owner_ids.insert(user.id, stored.id);
    }

    for property in fixtures.properties() {
        let owner_id = *owner_ids
            .get(&property.owner_id)
            .ok_or_else(|| DbError::not_found("User", property.owner_id))?;

        let mut new_property = NewProperty::from(property);
        new_property.owner_id = owner_id;
        insert_property(&mut *conn, &new_property).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;
    use lightbnb_core::PropertySearch;

    const USERS: &str = include_str!("../../../fixtures/users.json");
    const PROPERTIES: &str = include_str!("../../../fixtures/properties.json");

    #[tokio::test]
    async fn test_seed_bundled_fixtures() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let fixtures = FixtureSet::from_json(USERS, PROPERTIES).unwrap();

        let report = seed(&db, &fixtures).await.unwrap();

        assert!(!report.skipped);
        assert_eq!(report.users, fixtures.users().len());
        assert_eq!(db.users().count().await.unwrap() as usize, report.users);
        assert_eq!(db.properties().count().await.unwrap() as usize, report.properties);

        let listings = db
            .properties()
            .search(&PropertySearch::default(), 100)
            .await
            .unwrap();
        assert_eq!(listings.len(), report.properties);
        assert!(listings.iter().all(|l| l.average_rating.is_none()));
    }

    #[tokio::test]
    async fn test_owner_ids_are_remapped() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let fixtures = FixtureSet::from_json(USERS, PROPERTIES).unwrap();

        seed(&db, &fixtures).await.unwrap();

        for property in fixtures.properties() {
            let owner = fixtures.user_with_id(property.owner_id).unwrap();
            let stored_owner = db.users().get_by_email(&owner.email).await.unwrap().unwrap();

            let criteria = PropertySearch {
                owner_id: Some(stored_owner.id),
                ..Default::default()
            };
            let owned = db.properties().search(&criteria, 100).await.unwrap();
            assert!(owned.iter().any(|l| l.property.title == property.title));
        }
    }

    #[tokio::test]
    async fn test_second_run_is_skipped() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let fixtures = FixtureSet::from_json(USERS, PROPERTIES).unwrap();

        seed(&db, &fixtures).await.unwrap();
        let again = seed(&db, &fixtures).await.unwrap();

        assert!(again.skipped);
        assert_eq!(db.users().count().await.unwrap() as usize, fixtures.users().len());
    }

    #[tokio::test]
    async fn test_unknown_owner_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let properties = PROPERTIES.replacen("\"owner_id\": 1,", "\"owner_id\": 77,", 1);
        let fixtures = FixtureSet::from_json(USERS, &properties).unwrap();

        let err = seed(&db, &fixtures).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_failed_seed_rolls_back_and_can_be_retried() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let broken = PROPERTIES.replacen("\"owner_id\": 1,", "\"owner_id\": 77,", 1);
        let broken = FixtureSet::from_json(USERS, &broken).unwrap();
        let fixtures = FixtureSet::from_json(USERS, PROPERTIES).unwrap();

        assert!(seed(&db, &broken).await.is_err());
        assert_eq!(db.users().count().await.unwrap(), 0);
        assert_eq!(db.properties().count().await.unwrap(), 0);

        let report = seed(&db, &fixtures).await.unwrap();
        assert!(!report.skipped);
        assert_eq!(db.users().count().await.unwrap() as usize, fixtures.users().len());
        assert_eq!(
            db.properties().count().await.unwrap() as usize,
            fixtures.properties().len()
        );
    }
}
