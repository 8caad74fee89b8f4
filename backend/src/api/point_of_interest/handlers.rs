//! Handler functions for the points-of-interest API.
//!
//! These functions validate input, check city and point existence, drive the
//! repository's unit of work, and shape the HTTP responses. The delete
//! handler additionally fires the notification side effect on a background
//! task so delivery can never block or fail the request.

use axum::extract::{OriginalUri, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use validator::Validate;

use cityinfo_adapters::{Notification, Notifier as _};

use crate::api::point_of_interest::models::{
    PointOfInterestDto, PointOfInterestForCreation, PointOfInterestForUpdate,
};
use crate::api::point_of_interest::patch::{apply_patch, PatchOperation};
use crate::errors::ApiError;
use crate::state::AppState;

/// GET /cities/{cityId}/pointsofinterest: 404 when the city is absent, 200
/// with the (possibly empty) list otherwise. The explicit existence check is
/// what distinguishes a missing city from a city with zero points.
pub async fn list_points_of_interest(
    State(state): State<AppState>,
    Path(city_id): Path<i64>,
) -> Result<Json<Vec<PointOfInterestDto>>, ApiError> {
    if !state.repository.city_exists(city_id).await? {
        tracing::info!(city_id, "city not found when accessing points of interest");
        return Err(ApiError::NotFound);
    }

    let points = state.repository.list_points_of_interest(city_id).await?;
    Ok(Json(points.into_iter().map(Into::into).collect()))
}

/// GET /cities/{cityId}/pointsofinterest/{pointId}: the lookup is scoped to
/// the owning city, so a wrong city and a wrong point both come back 404.
pub async fn get_point_of_interest(
    State(state): State<AppState>,
    Path((city_id, point_id)): Path<(i64, i64)>,
) -> Result<Json<PointOfInterestDto>, ApiError> {
    let point = state
        .repository
        .get_point_of_interest(city_id, point_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(point.into()))
}

/// POST /cities/{cityId}/pointsofinterest: 201 with a Location reference and
/// the created representation, 404 for an unknown city, 400 on validation
/// failure (checked before any store access).
pub async fn create_point_of_interest(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(city_id): Path<i64>,
    Json(payload): Json<PointOfInterestForCreation>,
) -> Result<Response, ApiError> {
    payload.validate()?;

    if !state.repository.city_exists(city_id).await? {
        return Err(ApiError::NotFound);
    }

    let mut tx = state.repository.begin().await?;
    let created = state
        .repository
        .add_point_of_interest(&mut tx, city_id, &payload.name, payload.description.as_deref())
        .await?;
    state.repository.commit(tx).await?;

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), created.id);
    let dto = PointOfInterestDto::from(created);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(dto)).into_response())
}

/// PUT /cities/{cityId}/pointsofinterest/{pointId}: full replace of both
/// mutable fields; 204 on success, 404 when city or point is absent.
pub async fn update_point_of_interest(
    State(state): State<AppState>,
    Path((city_id, point_id)): Path<(i64, i64)>,
    Json(payload): Json<PointOfInterestForUpdate>,
) -> Result<StatusCode, ApiError> {
    payload.validate()?;

    if !state.repository.city_exists(city_id).await? {
        return Err(ApiError::NotFound);
    }
    state
        .repository
        .get_point_of_interest(city_id, point_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let mut tx = state.repository.begin().await?;
    state
        .repository
        .update_point_of_interest(
            &mut tx,
            city_id,
            point_id,
            &payload.name,
            payload.description.as_deref(),
        )
        .await?;
    state.repository.commit(tx).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /cities/{cityId}/pointsofinterest/{pointId}: applies the operation
/// sequence to a document seeded from the stored entity, re-validates with
/// the full-update rules, and only then persists. Any patch or validation
/// failure leaves the stored entity untouched and returns 400.
pub async fn patch_point_of_interest(
    State(state): State<AppState>,
    Path((city_id, point_id)): Path<(i64, i64)>,
    Json(operations): Json<Vec<PatchOperation>>,
) -> Result<StatusCode, ApiError> {
    if !state.repository.city_exists(city_id).await? {
        return Err(ApiError::NotFound);
    }
    let point = state
        .repository
        .get_point_of_interest(city_id, point_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let mut document = PointOfInterestForUpdate::from(&point);
    apply_patch(&mut document, &operations)?;
    document.validate()?;

    let mut tx = state.repository.begin().await?;
    state
        .repository
        .update_point_of_interest(
            &mut tx,
            city_id,
            point_id,
            &document.name,
            document.description.as_deref(),
        )
        .await?;
    state.repository.commit(tx).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /cities/{cityId}/pointsofinterest/{pointId}: 204 after the commit;
/// the deletion notification is fire-and-forget.
pub async fn delete_point_of_interest(
    State(state): State<AppState>,
    Path((city_id, point_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    if !state.repository.city_exists(city_id).await? {
        return Err(ApiError::NotFound);
    }
    let point = state
        .repository
        .get_point_of_interest(city_id, point_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let mut tx = state.repository.begin().await?;
    state.repository.delete_point_of_interest(&mut tx, &point).await?;
    state.repository.commit(tx).await?;

    let notifier = state.notifier.clone();
    let notification = Notification::new(
        "Point of interest deleted.",
        format!(
            "Point of interest {} with id {} was deleted.",
            point.name, point.id
        ),
    );
    tokio::spawn(async move {
        if let Err(err) = notifier.notify(&notification).await {
            tracing::warn!(error = %err, "delete notification was not delivered");
        }
    });

    Ok(StatusCode::NO_CONTENT)
}
