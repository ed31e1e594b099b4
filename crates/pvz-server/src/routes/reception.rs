//! Reception Routes - Open receptions and accept products

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Extension, Json, Router,
};

use pvz::Actor;

use crate::app::AppState;
use crate::errors::{ApiResult, ErrorResponse};
use crate::models::{CreateItemRequest, CreateReceptionRequest, ItemResponse, ReceptionResponse};

/// Open a reception at a pickup point (staff)
#[utoipa::path(
    post,
    path = "/receptions",
    request_body = CreateReceptionRequest,
    responses(
        (status = 201, description = "Reception opened", body = ReceptionResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not staff", body = ErrorResponse),
        (status = 404, description = "Pickup point not found", body = ErrorResponse),
        (status = 409, description = "A reception is already open", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Receptions"
)]
pub async fn create_reception(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    payload: Result<Json<CreateReceptionRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ReceptionResponse>)> {
    let Json(payload) = payload?;

    let reception = state
        .reception_service
        .open(&actor, payload.pvz_id)
        .await?;

    Ok((StatusCode::CREATED, Json(reception.into())))
}

/// Add a product to the open reception (staff)
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Product added", body = ItemResponse),
        (status = 400, description = "Unknown type or no open reception", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not staff", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Receptions"
)]
pub async fn add_product(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ItemResponse>)> {
    let Json(payload) = payload?;

    let item = state
        .reception_service
        .add_item(&actor, payload.pvz_id, &payload.item_type)
        .await?;

    Ok((StatusCode::CREATED, Json(item.into())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/receptions", post(create_reception))
        .route("/products", post(add_product))
}
