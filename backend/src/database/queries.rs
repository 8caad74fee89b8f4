//! Database query functions (Data Access Objects).
//!
//! This module centralizes all direct database operations behind
//! `CityInfoRepository`, abstracting query construction from the API handlers.
//! Reads execute directly against the pool. Writes go through an explicit
//! transaction: callers `begin()`, stage their changes, and `commit()`; any
//! store failure surfaces as an error instead of a silent no-op, and dropping
//! the transaction without committing discards the staged changes.

use sqlx::{QueryBuilder, Sqlite, SqlitePool, Transaction};

use crate::database::models::{City, PointOfInterest};
use crate::database::pagination::PaginationMetadata;

#[derive(Clone)]
pub struct CityInfoRepository {
    pool: SqlitePool,
}

impl CityInfoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists cities ordered by name ascending, windowed to the requested page.
    ///
    /// `name_filter` keeps only exact name matches, `search_query` keeps
    /// cities whose name or description contains the query; both are trimmed
    /// first, ignored when blank, and combine with AND. The metadata total is
    /// counted after filtering and before windowing. `page_size` must already
    /// be clamped to the allowed range by the caller.
    pub async fn list_cities(
        &self,
        name_filter: Option<&str>,
        search_query: Option<&str>,
        page_number: u32,
        page_size: u32,
    ) -> Result<(Vec<City>, PaginationMetadata), sqlx::Error> {
        let name = name_filter.map(str::trim).filter(|s| !s.is_empty());
        let search = search_query.map(str::trim).filter(|s| !s.is_empty());

        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM cities");
        push_city_filters(&mut count_query, name, search);
        let total_item_count: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let metadata = PaginationMetadata::new(total_item_count as u64, page_size, page_number);

        let mut list_query = QueryBuilder::new("SELECT id, name, description FROM cities");
        push_city_filters(&mut list_query, name, search);
        list_query.push(" ORDER BY name ASC LIMIT ");
        list_query.push_bind(i64::from(page_size));
        list_query.push(" OFFSET ");
        list_query.push_bind(i64::from(page_size) * (i64::from(page_number) - 1));
        let cities = list_query
            .build_query_as::<City>()
            .fetch_all(&self.pool)
            .await?;

        Ok((cities, metadata))
    }

    /// Fetches one city; the points-of-interest collection is loaded only
    /// when `include_points` is set.
    pub async fn get_city(
        &self,
        city_id: i64,
        include_points: bool,
    ) -> Result<Option<City>, sqlx::Error> {
        let city = sqlx::query_as::<_, City>(
            "SELECT id, name, description FROM cities WHERE id = ?",
        )
        .bind(city_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(mut city) = city else {
            return Ok(None);
        };
        if include_points {
            city.points_of_interest = self.list_points_of_interest(city_id).await?;
        }
        Ok(Some(city))
    }

    pub async fn city_exists(&self, city_id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cities WHERE id = ?)")
            .bind(city_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Empty when the city has no points; callers distinguish a missing city
    /// with `city_exists` before calling this.
    pub async fn list_points_of_interest(
        &self,
        city_id: i64,
    ) -> Result<Vec<PointOfInterest>, sqlx::Error> {
        sqlx::query_as::<_, PointOfInterest>(
            "SELECT id, name, description, city_id FROM points_of_interest
             WHERE city_id = ? ORDER BY id ASC",
        )
        .bind(city_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_point_of_interest(
        &self,
        city_id: i64,
        point_id: i64,
    ) -> Result<Option<PointOfInterest>, sqlx::Error> {
        sqlx::query_as::<_, PointOfInterest>(
            "SELECT id, name, description, city_id FROM points_of_interest
             WHERE city_id = ? AND id = ?",
        )
        .bind(city_id)
        .bind(point_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Opens the unit of work for a mutating request. Changes staged on the
    /// transaction are discarded unless `commit` is called.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Stages a new point of interest on the city. The id is store-assigned
    /// and returned with the row.
    pub async fn add_point_of_interest(
        &self,
        tx: &mut Transaction<'static, Sqlite>,
        city_id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<PointOfInterest, sqlx::Error> {
        sqlx::query_as::<_, PointOfInterest>(
            "INSERT INTO points_of_interest (name, description, city_id)
             VALUES (?, ?, ?)
             RETURNING id, name, description, city_id",
        )
        .bind(name)
        .bind(description)
        .bind(city_id)
        .fetch_one(&mut **tx)
        .await
    }

    /// Overwrites both mutable fields of an existing point of interest.
    pub async fn update_point_of_interest(
        &self,
        tx: &mut Transaction<'static, Sqlite>,
        city_id: i64,
        point_id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            "UPDATE points_of_interest SET name = ?, description = ?
             WHERE city_id = ? AND id = ?",
        )
        .bind(name)
        .bind(description)
        .bind(city_id)
        .bind(point_id)
        .execute(&mut **tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }

    pub async fn delete_point_of_interest(
        &self,
        tx: &mut Transaction<'static, Sqlite>,
        point: &PointOfInterest,
    ) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM points_of_interest WHERE id = ?")
            .bind(point.id)
            .execute(&mut **tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }

    /// Persists every change staged on the transaction atomically.
    pub async fn commit(&self, tx: Transaction<'static, Sqlite>) -> Result<(), sqlx::Error> {
        tx.commit().await
    }
}

fn push_city_filters(
    query: &mut QueryBuilder<'_, Sqlite>,
    name: Option<&str>,
    search: Option<&str>,
) {
    let mut prefix = " WHERE ";
    if let Some(name) = name {
        query.push(prefix).push("name = ").push_bind(name.to_string());
        prefix = " AND ";
    }
    if let Some(search) = search {
        let pattern = format!("%{search}%");
        query
            .push(prefix)
            .push("(name LIKE ")
            .push_bind(pattern.clone())
            .push(" OR description LIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;
    use crate::database;

    async fn seeded_repository() -> CityInfoRepository {
        // A single connection keeps the whole in-memory database visible to
        // every query in the test.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        database::init_schema(&pool).await.unwrap();
        database::seed_demo_data(&pool).await.unwrap();
        CityInfoRepository::new(pool)
    }

    fn names(cities: &[City]) -> Vec<&str> {
        cities.iter().map(|c| c.name.as_str()).collect()
    }

    #[tokio::test]
    async fn list_orders_by_name_ascending() {
        let repo = seeded_repository().await;
        let (cities, metadata) = repo.list_cities(None, None, 1, 10).await.unwrap();
        assert_eq!(names(&cities), ["Antwerp", "New York City", "Paris"]);
        assert_eq!(metadata.total_item_count, 3);
        assert_eq!(metadata.total_page_count, 1);
    }

    #[tokio::test]
    async fn name_filter_matches_exactly() {
        let repo = seeded_repository().await;
        let (cities, metadata) = repo.list_cities(Some("Paris"), None, 1, 10).await.unwrap();
        assert_eq!(names(&cities), ["Paris"]);
        assert_eq!(metadata.total_item_count, 1);
    }

    #[tokio::test]
    async fn name_filter_is_trimmed_before_matching() {
        let repo = seeded_repository().await;
        let (cities, _) = repo.list_cities(Some("  Paris  "), None, 1, 10).await.unwrap();
        assert_eq!(names(&cities), ["Paris"]);
    }

    #[tokio::test]
    async fn blank_filters_are_ignored() {
        let repo = seeded_repository().await;
        let (cities, _) = repo.list_cities(Some("   "), Some(" "), 1, 10).await.unwrap();
        assert_eq!(cities.len(), 3);
    }

    #[tokio::test]
    async fn search_matches_name_or_description() {
        let repo = seeded_repository().await;
        // "par" hits Paris by name and New York City via "big park".
        let (cities, _) = repo.list_cities(None, Some("par"), 1, 10).await.unwrap();
        assert_eq!(names(&cities), ["New York City", "Paris"]);
    }

    #[tokio::test]
    async fn filters_combine_with_and() {
        let repo = seeded_repository().await;
        let (cities, _) = repo
            .list_cities(Some("Paris"), Some("cathedral"), 1, 10)
            .await
            .unwrap();
        assert!(cities.is_empty());

        let (cities, _) = repo
            .list_cities(Some("Paris"), Some("tower"), 1, 10)
            .await
            .unwrap();
        assert_eq!(names(&cities), ["Paris"]);
    }

    #[tokio::test]
    async fn pagination_windows_after_filtering() {
        let repo = seeded_repository().await;
        let (page_one, metadata) = repo.list_cities(None, None, 1, 2).await.unwrap();
        assert_eq!(names(&page_one), ["Antwerp", "New York City"]);
        assert_eq!(metadata.total_item_count, 3);
        assert_eq!(metadata.total_page_count, 2);

        let (page_two, _) = repo.list_cities(None, None, 2, 2).await.unwrap();
        assert_eq!(names(&page_two), ["Paris"]);
    }

    #[tokio::test]
    async fn get_city_loads_points_only_on_request() {
        let repo = seeded_repository().await;
        let lean = repo.get_city(3, false).await.unwrap().unwrap();
        assert!(lean.points_of_interest.is_empty());

        let full = repo.get_city(3, true).await.unwrap().unwrap();
        let point_names: Vec<&str> = full
            .points_of_interest
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(point_names, ["Eiffel Tower", "The Louvre"]);
    }

    #[tokio::test]
    async fn get_city_absent_returns_none() {
        let repo = seeded_repository().await;
        assert!(repo.get_city(99, true).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn city_exists_checks() {
        let repo = seeded_repository().await;
        assert!(repo.city_exists(1).await.unwrap());
        assert!(!repo.city_exists(99).await.unwrap());
    }

    #[tokio::test]
    async fn get_point_scopes_to_owning_city() {
        let repo = seeded_repository().await;
        assert!(repo.get_point_of_interest(3, 5).await.unwrap().is_some());
        // Point 5 belongs to Paris, not Antwerp.
        assert!(repo.get_point_of_interest(2, 5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn add_and_commit_persists_with_assigned_id() {
        let repo = seeded_repository().await;
        let mut tx = repo.begin().await.unwrap();
        let created = repo
            .add_point_of_interest(&mut tx, 3, "Sacre-Coeur", Some("Basilica on Montmartre."))
            .await
            .unwrap();
        repo.commit(tx).await.unwrap();

        assert!(created.id > 6);
        let fetched = repo
            .get_point_of_interest(3, created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.name, "Sacre-Coeur");
        assert_eq!(fetched.description.as_deref(), Some("Basilica on Montmartre."));
    }

    #[tokio::test]
    async fn dropping_the_transaction_discards_staged_changes() {
        let repo = seeded_repository().await;
        let created_id = {
            let mut tx = repo.begin().await.unwrap();
            let created = repo
                .add_point_of_interest(&mut tx, 3, "Never committed", None)
                .await
                .unwrap();
            created.id
            // tx dropped here without commit
        };
        assert!(repo
            .get_point_of_interest(3, created_id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn update_overwrites_both_fields() {
        let repo = seeded_repository().await;
        let mut tx = repo.begin().await.unwrap();
        repo.update_point_of_interest(&mut tx, 3, 6, "Musee du Louvre", None)
            .await
            .unwrap();
        repo.commit(tx).await.unwrap();

        let point = repo.get_point_of_interest(3, 6).await.unwrap().unwrap();
        assert_eq!(point.name, "Musee du Louvre");
        assert_eq!(point.description, None);
    }

    #[tokio::test]
    async fn update_missing_point_reports_row_not_found() {
        let repo = seeded_repository().await;
        let mut tx = repo.begin().await.unwrap();
        let err = repo
            .update_point_of_interest(&mut tx, 3, 99, "Nope", None)
            .await
            .unwrap_err();
        assert!(matches!(err, sqlx::Error::RowNotFound));
    }

    #[tokio::test]
    async fn delete_removes_the_point() {
        let repo = seeded_repository().await;
        let point = repo.get_point_of_interest(3, 5).await.unwrap().unwrap();
        let mut tx = repo.begin().await.unwrap();
        repo.delete_point_of_interest(&mut tx, &point).await.unwrap();
        repo.commit(tx).await.unwrap();

        assert!(repo.get_point_of_interest(3, 5).await.unwrap().is_none());
    }
}
