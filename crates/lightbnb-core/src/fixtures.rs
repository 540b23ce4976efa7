//! # Fixture Data
//!
//! Read-only seed data in the web app's JSON format: one object per file,
//! keyed by the stringified id.
//!
//! ```text
//! users.json                         properties.json
//! {                                  {
//!   "1": { "id": 1, "name": ... },     "1": { "id": 1, "owner_id": 1, ... },
//!   "2": { "id": 2, "name": ... }      "2": { "id": 2, "owner_id": 1, ... }
//! }                                  }
//! ```
//!
//! Besides seeding the database, a [`FixtureSet`] answers the handful of
//! lookups the demo pages need without touching SQL.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};
use crate::types::{Property, User};

/// Parsed users and properties, ordered by id.
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    users: Vec<User>,
    properties: Vec<Property>,
}

impl FixtureSet {
    /// Parses the contents of `users.json` and `properties.json`.
    pub fn from_json(users_json: &str, properties_json: &str) -> CoreResult<Self> {
        let mut users: Vec<User> = parse_keyed("users.json", users_json)?;
        let mut properties: Vec<Property> = parse_keyed("properties.json", properties_json)?;

        users.sort_by_key(|u| u.id);
        properties.sort_by_key(|p| p.id);

        Ok(FixtureSet { users, properties })
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Finds a user by email, ignoring ASCII case.
    pub fn user_with_email(&self, email: &str) -> Option<&User> {
        let email = email.trim();
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }

    pub fn user_with_id(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// The first `limit` properties by id.
    pub fn first_properties(&self, limit: usize) -> &[Property] {
        &self.properties[..limit.min(self.properties.len())]
    }
}

fn parse_keyed<T: DeserializeOwned>(document: &'static str, json: &str) -> CoreResult<Vec<T>> {
    let keyed: BTreeMap<String, T> = serde_json::from_str(json)
        .map_err(|source| CoreError::InvalidFixture { document, source })?;

    Ok(keyed.into_values().collect())
}

// =============================================================================
// Unit Tests
// =============================================================================
