use std::sync::Arc;

use sqlx::PgPool;

mod adapters;
mod app;
mod auth;
mod config;
mod errors;
mod models;
mod routes;

use adapters::{
    Argon2Hasher, JwtTokenService, PgAccountRepository, PgItemRepository, PgPickupPointRepository,
    PgReceptionRepository,
};
use app::AppState;
use config::Config;

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("PVZ API initializing...");

    let config = Config::from_lookup(|key| secrets.get(key))
        .map_err(shuttle_runtime::CustomError::new)?;

    tracing::info!(
        "Token lifetime: {}h, dummy login: {}",
        config.token_ttl_hours,
        config.dummy_login_enabled
    );

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(shuttle_runtime::CustomError::new)?;

    tracing::info!("Database migrations completed");

    // Initialize application state
    let state = AppState::new(
        Arc::new(PgAccountRepository::new(pool.clone())),
        Arc::new(PgPickupPointRepository::new(pool.clone())),
        Arc::new(PgReceptionRepository::new(pool.clone())),
        Arc::new(PgItemRepository::new(pool)),
        Arc::new(Argon2Hasher::new()),
        Arc::new(JwtTokenService::new(&config)),
    );

    let router = app::build_router(state, &config);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("PVZ API ready");

    Ok(router.into())
}
