//! # Property Search
//!
//! Builds the parameterized `SELECT` behind the property search page.
//!
//! ## How a Search Becomes SQL
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Criteria → Predicates → SQL                          │
//! │                                                                         │
//! │  PropertySearch { city: "Vancouver", maximum_price_per_night: 15000 }  │
//! │       │                                                                 │
//! │       ▼  predicates() - fixed order, absent fields skipped             │
//! │  [ city     LIKE  "%Vancouver%"  (row)                                 │
//! │    cost     <=    15000          (row) ]                               │
//! │       │                                                                 │
//! │       ▼  build_property_search() - push value, then emit $len          │
//! │  WHERE properties.city LIKE $1                                         │
//! │  AND properties.cost_per_night <= $2                                   │
//! │  GROUP BY properties.id                                                │
//! │  ORDER BY properties.cost_per_night, properties.id                      │
//! │  LIMIT $3                                                               │
//! │                                                                         │
//! │  params = ["%Vancouver%", 15000, 10]                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Evaluation Order
//! city, owner, minimum cost, maximum cost, minimum rating, then the limit.
//! The rating bound filters an aggregate, so it lands in `HAVING`. Every
//! other bound lands in `WHERE`.
//!
//! ## Presence
//! A field is present when it is `Some`. `Some(0)` is a real bound.
//! Blank web input is mapped to `None` when deserializing, never later.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Row cap used when the caller does not pass one.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

const SELECT_LISTINGS: &str = "SELECT properties.*, AVG(property_reviews.rating) AS average_rating
FROM properties
LEFT JOIN property_reviews ON property_reviews.property_id = properties.id";

// =============================================================================
// Parameters
// =============================================================================

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Real(f64),
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<u32> for SqlValue {
    fn from(value: u32) -> Self {
        SqlValue::Integer(i64::from(value))
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Real(value)
    }
}

/// Query text plus its ordered parameters.
///
/// `params[n - 1]` binds to placeholder `$n`.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

// =============================================================================
// Predicates
// =============================================================================

/// Comparison operator of a single filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Like,
    Eq,
    Gte,
    Lte,
}

impl Comparison {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Comparison::Like => "LIKE",
            Comparison::Eq => "=",
            Comparison::Gte => ">=",
            Comparison::Lte => "<=",
        }
    }
}

/// Which clause a predicate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStage {
    /// Filters individual rows (`WHERE`).
    Row,
    /// Filters aggregated groups (`HAVING`).
    Group,
}

/// One present filter: `column comparison $n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: &'static str,
    pub comparison: Comparison,
    pub value: SqlValue,
    pub stage: FilterStage,
}

impl Predicate {
    fn row(column: &'static str, comparison: Comparison, value: impl Into<SqlValue>) -> Self {
        Predicate {
            column,
            comparison,
            value: value.into(),
            stage: FilterStage::Row,
        }
    }

    fn group(column: &'static str, comparison: Comparison, value: impl Into<SqlValue>) -> Self {
        Predicate {
            column,
            comparison,
            value: value.into(),
            stage: FilterStage::Group,
        }
    }
}

// =============================================================================
// Criteria
// =============================================================================

/// Optional property search filters.
///
/// ## Deserializing Web Input
/// The search form posts every field as a string. A missing field, `null`,
/// or blank string means "no filter". Numeric fields accept numbers or
/// numeric strings; anything else is rejected.
///
/// ```rust
/// use lightbnb_core::PropertySearch;
///
/// let search: PropertySearch = serde_json::from_str(
///     r#"{ "city": "", "minimum_price_per_night": "0", "maximum_price_per_night": 15000 }"#,
/// ).unwrap();
///
/// assert_eq!(search.city, None);
/// assert_eq!(search.minimum_price_per_night, Some(0));
/// assert_eq!(search.maximum_price_per_night, Some(15000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PropertySearch {
    /// Substring of the property's city.
    #[serde(default, deserialize_with = "loose_option")]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "loose_option")]
    pub owner_id: Option<i64>,

    /// Lower bound on nightly cost, in cents.
    #[serde(default, deserialize_with = "loose_option")]
    pub minimum_price_per_night: Option<i64>,

    /// Upper bound on nightly cost, in cents.
    #[serde(default, deserialize_with = "loose_option")]
    pub maximum_price_per_night: Option<i64>,

    /// Lower bound on the average review rating.
    #[serde(default, deserialize_with = "loose_option")]
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    /// Returns true when no filter is present.
    pub fn is_empty(&self) -> bool {
        self.predicates().is_empty()
    }

    /// Present filters in evaluation order.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(city) = &self.city {
            predicates.push(Predicate::row(
                "properties.city",
                Comparison::Like,
                format!("%{city}%"),
            ));
        }

        if let Some(owner_id) = self.owner_id {
            predicates.push(Predicate::row("properties.owner_id", Comparison::Eq, owner_id));
        }

        if let Some(minimum) = self.minimum_price_per_night {
            predicates.push(Predicate::row(
                "properties.cost_per_night",
                Comparison::Gte,
                minimum,
            ));
        }

        if let Some(maximum) = self.maximum_price_per_night {
            predicates.push(Predicate::row(
                "properties.cost_per_night",
                Comparison::Lte,
                maximum,
            ));
        }

        if let Some(rating) = self.minimum_rating {
            predicates.push(Predicate::group(
                "AVG(property_reviews.rating)",
                Comparison::Gte,
                rating,
            ));
        }

        predicates
    }

    /// Builds the search query, using [`DEFAULT_SEARCH_LIMIT`] when `limit` is `None`.
    pub fn build(&self, limit: Option<u32>) -> BuiltQuery {
        build_property_search(self, limit.unwrap_or(DEFAULT_SEARCH_LIMIT))
    }
}

/// Builds the property search query for `criteria`, capped at `limit` rows.
///
/// Each value is pushed before its placeholder is written, so `$n` is always
/// `params.len()` at that moment. The limit is pushed last.
pub fn build_property_search(criteria: &PropertySearch, limit: u32) -> BuiltQuery {
    let mut params = Vec::new();
    let mut row_clauses = Vec::new();
    let mut group_clauses = Vec::new();

    for predicate in criteria.predicates() {
        params.push(predicate.value);
        let clause = format!(
            "{} {} ${}",
            predicate.column,
            predicate.comparison.as_sql(),
            params.len()
        );

        match predicate.stage {
            FilterStage::Row => row_clauses.push(clause),
            FilterStage::Group => group_clauses.push(clause),
        }
    }

    let mut sql = String::from(SELECT_LISTINGS);

    if !row_clauses.is_empty() {
        sql.push_str("\nWHERE ");
        sql.push_str(&row_clauses.join("\nAND "));
    }

    sql.push_str("\nGROUP BY properties.id");

    if !group_clauses.is_empty() {
        sql.push_str("\nHAVING ");
        sql.push_str(&group_clauses.join("\nAND "));
    }

    params.push(SqlValue::from(limit));
    sql.push_str(&format!(
        "\nORDER BY properties.cost_per_night, properties.id\nLIMIT ${}",
        params.len()
    ));

    BuiltQuery { sql, params }
}

// =============================================================================
// Loose Deserialization
// =============================================================================

/// Accepts a native value, a parseable string, or blank/null as `None`.
fn loose_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose<T> {
        Text(String),
        Value(T),
    }

    match Option::<Loose<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Loose::Value(value)) => Ok(Some(value)),
        Some(Loose::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse().map(Some).map_err(de::Error::custom)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Highest `$n` in the query text.
    fn max_placeholder(sql: &str) -> usize {
        let bytes = sql.as_bytes();
        let mut max = 0;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'$' {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
                if end > start {
                    let n: usize = sql[start..end].parse().unwrap();
                    max = max.max(n);
                }
                i = end.max(i + 1);
            } else {
                i += 1;
            }
        }
        max
    }

    fn placeholder_count(sql: &str) -> usize {
        sql.matches('$').count()
    }

    /// Builds the criteria for one bit pattern over the five filters.
    fn criteria_for_mask(mask: u8) -> PropertySearch {
        PropertySearch {
            city: (mask & 0b00001 != 0).then(|| "Vancouver".to_string()),
            owner_id: (mask & 0b00010 != 0).then_some(3),
            minimum_price_per_night: (mask & 0b00100 != 0).then_some(5000),
            maximum_price_per_night: (mask & 0b01000 != 0).then_some(20000),
            minimum_rating: (mask & 0b10000 != 0).then_some(4.0),
        }
    }

    fn expected_params(mask: u8, limit: u32) -> Vec<SqlValue> {
        let mut expected = Vec::new();
        if mask & 0b00001 != 0 {
            expected.push(SqlValue::from("%Vancouver%"));
        }
        if mask & 0b00010 != 0 {
            expected.push(SqlValue::Integer(3));
        }
        if mask & 0b00100 != 0 {
            expected.push(SqlValue::Integer(5000));
        }
        if mask & 0b01000 != 0 {
            expected.push(SqlValue::Integer(20000));
        }
        if mask & 0b10000 != 0 {
            expected.push(SqlValue::Real(4.0));
        }
        expected.push(SqlValue::from(limit));
        expected
    }

    #[test]
    fn test_placeholders_match_params_for_every_combination() {
        for mask in 0u8..32 {
            let built = build_property_search(&criteria_for_mask(mask), 10);

            assert_eq!(
                placeholder_count(&built.sql),
                built.params.len(),
                "mask {mask:05b}"
            );
            assert_eq!(max_placeholder(&built.sql), built.params.len(), "mask {mask:05b}");
        }
    }

    #[test]
    fn test_param_order_is_fixed_for_every_combination() {
        for mask in 0u8..32 {
            let built = build_property_search(&criteria_for_mask(mask), 7);
            assert_eq!(built.params, expected_params(mask, 7), "mask {mask:05b}");
        }
    }

    #[test]
    fn test_placeholders_appear_in_order() {
        let built = build_property_search(&criteria_for_mask(0b11111), 10);

        let positions: Vec<usize> = (1..=6)
            .map(|n| built.sql.find(&format!("${n}")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_no_criteria_only_binds_limit() {
        let built = build_property_search(&PropertySearch::default(), 10);

        assert_eq!(built.params, vec![SqlValue::Integer(10)]);
        assert_eq!(placeholder_count(&built.sql), 1);
        assert!(!built.sql.contains("WHERE"));
        assert!(!built.sql.contains("HAVING"));
        assert!(built.sql.ends_with("LIMIT $1"));
    }

    #[test]
    fn test_default_limit_is_ten() {
        let built = PropertySearch::default().build(None);
        assert_eq!(built.params, vec![SqlValue::Integer(10)]);

        let built = PropertySearch::default().build(Some(3));
        assert_eq!(built.params, vec![SqlValue::Integer(3)]);
    }

    #[test]
    fn test_city_search() {
        let criteria = PropertySearch {
            city: Some("Vancouver".to_string()),
            ..Default::default()
        };
        let built = build_property_search(&criteria, 5);

        assert!(built.sql.contains("WHERE properties.city LIKE $1"));
        assert_eq!(
            built.params,
            vec![SqlValue::from("%Vancouver%"), SqlValue::Integer(5)]
        );
    }

    #[test]
    fn test_price_range_search() {
        let criteria = PropertySearch {
            minimum_price_per_night: Some(50),
            maximum_price_per_night: Some(150),
            ..Default::default()
        };
        let built = build_property_search(&criteria, 10);

        assert!(built.sql.contains("properties.cost_per_night >= $1"));
        assert!(built.sql.contains("AND properties.cost_per_night <= $2"));
        assert_eq!(
            built.params,
            vec![
                SqlValue::Integer(50),
                SqlValue::Integer(150),
                SqlValue::Integer(10)
            ]
        );
    }

    #[test]
    fn test_rating_filters_the_aggregate() {
        let criteria = PropertySearch {
            minimum_rating: Some(4.0),
            ..Default::default()
        };
        let built = build_property_search(&criteria, 10);

        assert!(!built.sql.contains("WHERE"));
        assert!(built
            .sql
            .contains("GROUP BY properties.id\nHAVING AVG(property_reviews.rating) >= $1"));
        assert!(built.sql.contains("LEFT JOIN property_reviews"));
    }

    #[test]
    fn test_zero_bounds_are_kept() {
        let criteria = PropertySearch {
            minimum_price_per_night: Some(0),
            minimum_rating: Some(0.0),
            ..Default::default()
        };
        let built = build_property_search(&criteria, 10);

        assert_eq!(
            built.params,
            vec![SqlValue::Integer(0), SqlValue::Real(0.0), SqlValue::Integer(10)]
        );
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_results_ordered_by_cost() {
        let built = build_property_search(&PropertySearch::default(), 10);
        assert!(built
            .sql
            .contains("ORDER BY properties.cost_per_night, properties.id"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let criteria = criteria_for_mask(0b10101);

        let first = build_property_search(&criteria, 4);
        let second = build_property_search(&criteria, 4);

        assert_eq!(first.sql, second.sql);
        assert_eq!(first.params, second.params);
    }

    #[test]
    fn test_deserialize_blank_fields_as_absent() {
        let search: PropertySearch = serde_json::from_str(
            r#"{
                "city": "  ",
                "owner_id": null,
                "minimum_price_per_night": "",
                "maximum_price_per_night": "15000",
                "minimum_rating": 4
            }"#,
        )
        .unwrap();

        assert_eq!(
            search,
            PropertySearch {
                maximum_price_per_night: Some(15000),
                minimum_rating: Some(4.0),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let search: PropertySearch = serde_json::from_str(r#"{ "city": "Toronto" }"#).unwrap();

        assert_eq!(search.city.as_deref(), Some("Toronto"));
        assert!(search.owner_id.is_none());
        assert_eq!(search.predicates().len(), 1);
    }

    #[test]
    fn test_deserialize_zero_string_is_present() {
        let search: PropertySearch =
            serde_json::from_str(r#"{ "minimum_price_per_night": "0" }"#).unwrap();
        assert_eq!(search.minimum_price_per_night, Some(0));
    }

    #[test]
    fn test_deserialize_rejects_non_numeric() {
        let result: Result<PropertySearch, _> =
            serde_json::from_str(r#"{ "minimum_rating": "great" }"#);
        assert!(result.is_err());

        let result: Result<PropertySearch, _> =
            serde_json::from_str(r#"{ "owner_id": "bob" }"#);
        assert!(result.is_err());
    }
}
