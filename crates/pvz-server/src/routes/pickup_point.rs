//! Pickup Point (PVZ) Routes
//!
//! Creation and listing, plus the per-pickup-point reception actions
//! (close the open reception, remove its last product).

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use pvz::Actor;

use crate::app::AppState;
use crate::errors::{ApiResult, ErrorResponse};
use crate::models::{
    CreatePickupPointRequest, ItemResponse, ListPickupPointsQuery, PickupPointResponse,
    PickupPointWithReceptions, ReceptionResponse,
};

/// Create a pickup point (moderator)
#[utoipa::path(
    post,
    path = "/pvz",
    request_body = CreatePickupPointRequest,
    responses(
        (status = 201, description = "Pickup point created", body = PickupPointResponse),
        (status = 400, description = "City not allowed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not a moderator", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "PVZ"
)]
pub async fn create_pickup_point(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    payload: Result<Json<CreatePickupPointRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PickupPointResponse>)> {
    let Json(payload) = payload?;

    let pickup_point = state
        .pickup_point_service
        .create(&actor, &payload.city)
        .await?;

    Ok((StatusCode::CREATED, Json(pickup_point.into())))
}

/// List pickup points with their receptions and products (staff, moderator)
#[utoipa::path(
    get,
    path = "/pvz",
    params(ListPickupPointsQuery),
    responses(
        (status = 200, description = "Page of pickup points", body = Vec<PickupPointWithReceptions>),
        (status = 400, description = "Invalid paging or date range", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Client role", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "PVZ"
)]
pub async fn list_pickup_points(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    query: Result<Query<ListPickupPointsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<PickupPointWithReceptions>>> {
    let Query(query) = query?;

    let pickup_points = state
        .pickup_point_service
        .list(&actor, &query.to_filter())
        .await?;

    Ok(Json(pickup_points.into_iter().map(Into::into).collect()))
}

/// Close the open reception of a pickup point (staff)
#[utoipa::path(
    post,
    path = "/pvz/{pvzId}/close_last_reception",
    params(("pvzId" = Uuid, Path, description = "Pickup point ID")),
    responses(
        (status = 200, description = "Reception closed", body = ReceptionResponse),
        (status = 400, description = "No open reception", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not staff", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "PVZ"
)]
pub async fn close_last_reception(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    path: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<ReceptionResponse>> {
    let Path(pvz_id) = path?;

    let reception = state.reception_service.close(&actor, pvz_id).await?;

    Ok(Json(reception.into()))
}

/// Remove the most recently received product of the open reception (staff)
#[utoipa::path(
    post,
    path = "/pvz/{pvzId}/delete_last_product",
    params(("pvzId" = Uuid, Path, description = "Pickup point ID")),
    responses(
        (status = 200, description = "Product removed", body = ItemResponse),
        (status = 400, description = "No open reception or no products", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not staff", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "PVZ"
)]
pub async fn delete_last_product(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    path: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<ItemResponse>> {
    let Path(pvz_id) = path?;

    let item = state
        .reception_service
        .remove_last_item(&actor, pvz_id)
        .await?;

    Ok(Json(item.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pvz", get(list_pickup_points).post(create_pickup_point))
        .route("/pvz/:pvz_id/close_last_reception", post(close_last_reception))
        .route("/pvz/:pvz_id/delete_last_product", post(delete_last_product))
}
