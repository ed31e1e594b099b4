//! Application state and router assembly

use std::sync::Arc;

use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pvz::{
    AccountRepository, AuthService, CredentialHasher, ItemRepository, PickupPointRepository,
    PickupPointService, ReceptionRepository, ReceptionService, TokenService,
};

use crate::auth;
use crate::config::Config;
use crate::routes;

/// Type aliases for application services over boxed ports
pub type AppAuthService = AuthService<dyn AccountRepository, dyn CredentialHasher, dyn TokenService>;
pub type AppPickupPointService =
    PickupPointService<dyn PickupPointRepository, dyn ReceptionRepository, dyn ItemRepository>;
pub type AppReceptionService = ReceptionService<dyn ReceptionRepository, dyn ItemRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AppAuthService>,
    pub pickup_point_service: Arc<AppPickupPointService>,
    pub reception_service: Arc<AppReceptionService>,
}

impl AppState {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        pickup_points: Arc<dyn PickupPointRepository>,
        receptions: Arc<dyn ReceptionRepository>,
        items: Arc<dyn ItemRepository>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(accounts, hasher, tokens)),
            pickup_point_service: Arc::new(PickupPointService::new(
                pickup_points,
                receptions.clone(),
                items.clone(),
            )),
            reception_service: Arc::new(ReceptionService::new(receptions, items)),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router: public auth routes, token-protected routes, docs and health.
pub fn build_router(state: AppState, config: &Config) -> Router {
    let mut public_routes = routes::auth::router();
    if config.dummy_login_enabled {
        tracing::warn!("Dummy login enabled - /dummyLogin issues tokens without credentials");
        public_routes = public_routes.merge(routes::auth::dummy_login_router());
    }

    // Protected routes (require a bearer token)
    let protected_routes = Router::new()
        .merge(routes::pickup_point::router())
        .merge(routes::reception::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{Argon2Hasher, JwtTokenService};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use pvz::testing::InMemoryStore;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn config(dummy_login: &str) -> Config {
        Config::from_lookup(|key| match key {
            "JWT_SECRET" => Some("router-test-secret".to_string()),
            "DUMMY_LOGIN_ENABLED" => Some(dummy_login.to_string()),
            _ => None,
        })
        .unwrap()
    }

    fn app_with(dummy_login: &str) -> Router {
        let config = config(dummy_login);
        let store = Arc::new(InMemoryStore::new());
        let state = AppState::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            Arc::new(Argon2Hasher::new()),
            Arc::new(JwtTokenService::new(&config)),
        );
        build_router(state, &config)
    }

    fn app() -> Router {
        app_with("true")
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn token_for(app: &Router, role: &str) -> String {
        let (status, body) = send(app, "POST", "/dummyLogin", None, Some(json!({ "role": role }))).await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), "GET", "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_intake_flow_over_http() {
        let app = app();
        let moderator = token_for(&app, "moderator").await;
        let staff = token_for(&app, "employee").await;

        let (status, pvz) = send(&app, "POST", "/pvz", Some(&moderator), Some(json!({ "city": "Казань" }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(pvz["city"], "Казань");
        let pvz_id = pvz["id"].as_str().unwrap().to_string();

        let (status, reception) = send(
            &app,
            "POST",
            "/receptions",
            Some(&staff),
            Some(json!({ "pvzId": pvz_id })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(reception["status"], "in_progress");

        let (status, _) = send(
            &app,
            "POST",
            "/receptions",
            Some(&staff),
            Some(json!({ "pvzId": pvz_id })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        for item_type in ["электроника", "shoes"] {
            let (status, _) = send(
                &app,
                "POST",
                "/products",
                Some(&staff),
                Some(json!({ "pvzId": pvz_id, "type": item_type })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, removed) = send(
            &app,
            "POST",
            &format!("/pvz/{}/delete_last_product", pvz_id),
            Some(&staff),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(removed["type"], "обувь");

        let (status, closed) = send(
            &app,
            "POST",
            &format!("/pvz/{}/close_last_reception", pvz_id),
            Some(&staff),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(closed["status"], "close");

        let (status, body) = send(
            &app,
            "POST",
            "/products",
            Some(&staff),
            Some(json!({ "pvzId": pvz_id, "type": "обувь" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());

        let (status, listed) = send(&app, "GET", "/pvz?page=1&limit=5", Some(&moderator), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed[0]["pvz"]["id"], pvz_id.as_str());
        assert_eq!(listed[0]["receptions"][0]["products"][0]["type"], "электроника");
    }

    #[tokio::test]
    async fn test_protected_routes_require_token() {
        let app = app();
        let (status, body) = send(&app, "GET", "/pvz", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["message"].is_string());

        let (status, _) = send(&app, "GET", "/pvz", Some("garbage"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_role_checks_map_to_forbidden() {
        let app = app();
        let client = token_for(&app, "client").await;
        let staff = token_for(&app, "employee").await;

        let (status, _) = send(&app, "GET", "/pvz", Some(&client), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(&app, "POST", "/pvz", Some(&staff), Some(json!({ "city": "Москва" }))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_bad_input_is_bad_request() {
        let app = app();
        let moderator = token_for(&app, "moderator").await;

        let (status, _) = send(&app, "POST", "/pvz", Some(&moderator), Some(json!({ "city": "Paris" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "GET", "/pvz?page=0", Some(&moderator), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, "POST", "/pvz/not-a-uuid/close_last_reception", Some(&moderator), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());

        let (status, _) = send(&app, "POST", "/dummyLogin", None, Some(json!({ "role": "admin" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let app = app();
        let credentials = json!({ "email": " Staff@Example.com ", "password": "secret", "role": "employee" });

        let (status, account) = send(&app, "POST", "/register", None, Some(credentials.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(account["email"], "staff@example.com");
        assert_eq!(account["role"], "employee");
        assert!(account.get("password").is_none());

        let (status, _) = send(&app, "POST", "/register", None, Some(credentials)).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(
            &app,
            "POST",
            "/login",
            None,
            Some(json!({ "email": "staff@example.com", "password": "wrong" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, token) = send(
            &app,
            "POST",
            "/login",
            None,
            Some(json!({ "email": "STAFF@example.com", "password": "secret" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(token["tokenType"], "Bearer");

        let (status, _) = send(&app, "GET", "/pvz", token["token"].as_str(), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dummy_login_can_be_disabled() {
        let app = app_with("false");
        let (status, _) = send(&app, "POST", "/dummyLogin", None, Some(json!({ "role": "moderator" }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
