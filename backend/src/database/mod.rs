//! Module for database connection setup and common utilities.
//!
//! This module is responsible for initializing the connection pool, creating
//! the schema on first start, and seeding the demo data set the rest of the
//! application (and the test suite) relies on.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub mod models;
pub mod pagination;
pub mod queries;

/// Opens the pool, creating the database file when it does not exist yet.
/// Foreign keys are enforced on every connection so the cascade from a city
/// to its points of interest holds at the store level.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Creates the tables when they are missing. Statements are idempotent, so
/// this runs unconditionally at startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS cities (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS points_of_interest (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            city_id INTEGER NOT NULL REFERENCES cities(id) ON DELETE CASCADE
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Inserts the demo cities and their points of interest, but only into an
/// empty store so repeated startups never duplicate rows.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cities")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(());
    }

    let cities: [(i64, &str, &str); 3] = [
        (1, "New York City", "The one with that big park."),
        (
            2,
            "Antwerp",
            "The one with the cathedral that was never really finished.",
        ),
        (3, "Paris", "The one with that big tower."),
    ];
    let points: [(i64, &str, &str, i64); 6] = [
        (1, "Central Park", "The most visited urban park in the United States.", 1),
        (2, "Empire State Building", "A 102-story skyscraper located in Midtown Manhattan.", 1),
        (3, "Cathedral of Our Lady", "A Gothic style cathedral, conceived by architects Jan and Pieter Appelmans.", 2),
        (4, "Antwerp Central Station", "The finest example of railway architecture in Belgium.", 2),
        (5, "Eiffel Tower", "A wrought iron lattice tower on the Champ de Mars, named after engineer Gustave Eiffel.", 3),
        (6, "The Louvre", "The world's largest museum.", 3),
    ];

    let mut tx = pool.begin().await?;
    for (id, name, description) in cities {
        sqlx::query("INSERT INTO cities (id, name, description) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(description)
            .execute(&mut *tx)
            .await?;
    }
    for (id, name, description, city_id) in points {
        sqlx::query(
            "INSERT INTO points_of_interest (id, name, description, city_id) VALUES (?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(city_id)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::debug!("seeded demo cities and points of interest");
    Ok(())
}
