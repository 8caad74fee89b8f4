//! Wire-level representations of cities.
//!
//! Two shapes exist for the same entity: the full DTO with the nested
//! points-of-interest collection, and the lean DTO used whenever the caller
//! does not ask for nested points. Mapping is a pure transform of an already
//! loaded entity; nothing here touches the store.

use serde::Serialize;

use crate::api::point_of_interest::models::PointOfInterestDto;
use crate::database::models::City;

/// A city with its points of interest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Computed from the mapped collection, never stored.
    pub number_of_points_of_interest: usize,
    pub points_of_interest: Vec<PointOfInterestDto>,
}

impl From<City> for CityDto {
    fn from(city: City) -> Self {
        let points_of_interest: Vec<PointOfInterestDto> = city
            .points_of_interest
            .into_iter()
            .map(Into::into)
            .collect();
        Self {
            id: city.id,
            name: city.name,
            description: city.description,
            number_of_points_of_interest: points_of_interest.len(),
            points_of_interest,
        }
    }
}

/// A city without points of interest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityWithoutPointsOfInterestDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<City> for CityWithoutPointsOfInterestDto {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            description: city.description,
        }
    }
}
