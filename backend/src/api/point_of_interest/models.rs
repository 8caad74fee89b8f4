//! Wire-level representations of points of interest.
//!
//! Creation and update DTOs never carry an id; ids are store-assigned only.
//! Field constraints mirror the entity invariants (name required, at most 50
//! characters, non-blank after trimming; description at most 250 characters)
//! and are enforced with the same rules for full and partial updates.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::database::models::PointOfInterest;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterestDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<PointOfInterest> for PointOfInterestDto {
    fn from(point: PointOfInterest) -> Self {
        Self {
            id: point.id,
            name: point.name,
            description: point.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterestForCreation {
    #[serde(alias = "Name")]
    #[validate(
        length(max = 50, message = "name must be 50 characters or fewer"),
        custom = "not_blank"
    )]
    pub name: String,
    #[serde(alias = "Description")]
    #[validate(length(max = 250, message = "description must be 250 characters or fewer"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterestForUpdate {
    #[serde(alias = "Name")]
    #[validate(
        length(max = 50, message = "name must be 50 characters or fewer"),
        custom = "not_blank"
    )]
    pub name: String,
    #[serde(alias = "Description")]
    #[validate(length(max = 250, message = "description must be 250 characters or fewer"))]
    pub description: Option<String>,
}

impl From<&PointOfInterest> for PointOfInterestForUpdate {
    fn from(point: &PointOfInterest) -> Self {
        Self {
            name: point.name.clone(),
            description: point.description.clone(),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("name must not be blank".into());
        return Err(error);
    }
    Ok(())
}
