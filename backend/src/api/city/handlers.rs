//! Handler functions for the city API.
//!
//! These functions process read requests for city data: they normalize the
//! query parameters, invoke the repository, attach pagination metadata to the
//! response, and pick the DTO shape the caller asked for.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::api::city::models::{CityDto, CityWithoutPointsOfInterestDto};
use crate::errors::ApiError;
use crate::state::AppState;

/// Hard cap on the requested page size; larger requests are clamped, not
/// rejected.
const MAX_CITIES_PAGE_SIZE: u32 = 20;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCitiesQuery {
    pub name: Option<String>,
    pub search_query: Option<String>,
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_number() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCityQuery {
    #[serde(default)]
    pub include_point_of_interest: bool,
}

/// GET /cities: 200 with the lean city list, even when empty. Pagination
/// metadata travels in the `x-pagination` response header.
pub async fn list_cities(
    State(state): State<AppState>,
    Query(query): Query<ListCitiesQuery>,
) -> Result<Response, ApiError> {
    let page_size = query.page_size.clamp(1, MAX_CITIES_PAGE_SIZE);
    let page_number = query.page_number.max(1);

    let (cities, metadata) = state
        .repository
        .list_cities(
            query.name.as_deref(),
            query.search_query.as_deref(),
            page_number,
            page_size,
        )
        .await?;

    let metadata_json =
        serde_json::to_string(&metadata).map_err(|err| ApiError::Internal(err.to_string()))?;
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-pagination",
        HeaderValue::from_str(&metadata_json)
            .map_err(|err| ApiError::Internal(err.to_string()))?,
    );

    let body: Vec<CityWithoutPointsOfInterestDto> =
        cities.into_iter().map(Into::into).collect();
    Ok((headers, Json(body)).into_response())
}

/// GET /cities/{id}: 200 with the points-bearing DTO when the flag is set,
/// the lean DTO otherwise; 404 when the city does not exist.
pub async fn get_city(
    State(state): State<AppState>,
    Path(city_id): Path<i64>,
    Query(query): Query<GetCityQuery>,
) -> Result<Response, ApiError> {
    let city = state
        .repository
        .get_city(city_id, query.include_point_of_interest)
        .await?
        .ok_or(ApiError::NotFound)?;

    if query.include_point_of_interest {
        Ok(Json(CityDto::from(city)).into_response())
    } else {
        Ok(Json(CityWithoutPointsOfInterestDto::from(city)).into_response())
    }
}
