//! Known dataset for repository tests.
//!
//! ```text
//! key         city               owner  cost   ratings   avg
//! ─────────   ─────────────────  ─────  ─────  ────────  ────
//! gastown     Vancouver          alice   3000  -         None
//! lonsdale    North Vancouver    bob     5000  5         5.0
//! kits        Vancouver          alice   8000  3         3.0
//! queen_west  Toronto            alice  12000  4         4.0
//! harbour     Vancouver          alice  15000  5, 4      4.5
//! ```
//!
//! Bob stayed at every reviewed property in the past and holds upcoming
//! reservations at `harbour` and `queen_west`.

use chrono::{Duration, NaiveDate, Utc};

use crate::pool::{Database, DbConfig};
use lightbnb_core::{NewProperty, NewReservation, NewReview, NewUser, Property, User};

pub(crate) struct Seeded {
    pub db: Database,
    pub alice: User,
    pub bob: User,
    pub gastown: Property,
    pub lonsdale: Property,
    pub kits: Property,
    pub queen_west: Property,
    pub harbour: Property,
}

pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub(crate) fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_string(),
    }
}

pub(crate) fn new_property(owner_id: i64, title: &str, city: &str, cost_per_night: i64) -> NewProperty {
    NewProperty {
        title: title.to_string(),
        description: Some("description".to_string()),
        owner_id,
        cover_photo_url: format!("https://img.example/{}.jpg", title.to_lowercase()),
        thumbnail_photo_url: format!("https://img.example/{}-thumb.jpg", title.to_lowercase()),
        cost_per_night,
        parking_spaces: 1,
        number_of_bathrooms: 1,
        number_of_bedrooms: 2,
        province: "British Columbia".to_string(),
        city: city.to_string(),
        country: "Canada".to_string(),
        street: "1 Test Street".to_string(),
        post_code: "V0V 0V0".to_string(),
    }
}

/// Books a stay from `start` for `nights` nights.
pub(crate) async fn book(
    db: &Database,
    guest: &User,
    property: &Property,
    start: NaiveDate,
    nights: i64,
) -> i64 {
    db.reservations()
        .insert(&NewReservation {
            start_date: start,
            end_date: start + Duration::days(nights),
            property_id: property.id,
            guest_id: guest.id,
        })
        .await
        .unwrap()
        .id
}

async fn review_past_stay(db: &Database, guest: &User, property: &Property, rating: i64) {
    let reservation_id = book(db, guest, property, today() - Duration::days(60), 3).await;

    db.reviews()
        .insert(&NewReview {
            guest_id: guest.id,
            property_id: property.id,
            reservation_id,
            rating,
            message: None,
        })
        .await
        .unwrap();
}

pub(crate) async fn seeded() -> Seeded {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let alice = db
        .users()
        .insert(&new_user("Alice Owner", "alice@example.com"))
        .await
        .unwrap();
    let bob = db
        .users()
        .insert(&new_user("Bob Guest", "bob@example.com"))
        .await
        .unwrap();

    let properties = db.properties();
    let harbour = properties
        .insert(&new_property(alice.id, "Harbour", "Vancouver", 15000))
        .await
        .unwrap();
    let kits = properties
        .insert(&new_property(alice.id, "Kits", "Vancouver", 8000))
        .await
        .unwrap();
    let lonsdale = properties
        .insert(&new_property(bob.id, "Lonsdale", "North Vancouver", 5000))
        .await
        .unwrap();
    let queen_west = properties
        .insert(&new_property(alice.id, "QueenWest", "Toronto", 12000))
        .await
        .unwrap();
    let gastown = properties
        .insert(&new_property(alice.id, "Gastown", "Vancouver", 3000))
        .await
        .unwrap();

    review_past_stay(&db, &bob, &harbour, 5).await;
    review_past_stay(&db, &bob, &harbour, 4).await;
    review_past_stay(&db, &bob, &kits, 3).await;
    review_past_stay(&db, &bob, &lonsdale, 5).await;
    review_past_stay(&db, &bob, &queen_west, 4).await;

    book(&db, &bob, &queen_west, today() + Duration::days(20), 2).await;
    book(&db, &bob, &harbour, today() + Duration::days(10), 4).await;

    Seeded {
        db,
        alice,
        bob,
        gastown,
        lonsdale,
        kits,
        queen_west,
        harbour,
    }
}
