//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Note that these differ from the API-facing models in
//! `crate::api`: wire representations are mapped from these entities and never
//! read from the store directly.

use sqlx::FromRow;

/// A city row. The points-of-interest collection is populated only when a
/// caller explicitly asks for it; plain row reads leave it empty.
#[derive(Debug, Clone, FromRow)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(skip)]
    pub points_of_interest: Vec<PointOfInterest>,
}

/// A point of interest row. Cannot exist without its owning city; the schema
/// enforces the back-reference with a cascading foreign key.
#[derive(Debug, Clone, FromRow)]
pub struct PointOfInterest {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub city_id: i64,
}
