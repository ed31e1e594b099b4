//! Auth Routes - Role tokens, registration and login

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::app::AppState;
use crate::errors::{ApiResult, ErrorResponse};
use crate::models::{
    AccountResponse, DummyLoginRequest, LoginRequest, RegisterRequest, TokenResponse,
};

/// Issue a token for a role without credentials
#[utoipa::path(
    post,
    path = "/dummyLogin",
    request_body = DummyLoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Unknown role", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn dummy_login(
    State(state): State<AppState>,
    payload: Result<Json<DummyLoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(payload) = payload?;

    let issued = state.auth_service.role_token(&payload.role)?;

    Ok(Json(issued.into()))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AccountResponse),
        (status = 400, description = "Invalid email, password or role", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AccountResponse>)> {
    let Json(payload) = payload?;

    let account = state
        .auth_service
        .register(&payload.email, &payload.password, &payload.role)
        .await?;

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Empty email or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(payload) = payload?;

    let issued = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(issued.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Mounted only when dummy login is enabled in the config
pub fn dummy_login_router() -> Router<AppState> {
    Router::new().route("/dummyLogin", post(dummy_login))
}
