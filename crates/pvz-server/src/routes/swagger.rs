//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::errors::ErrorResponse;
use crate::models::{
    AccountResponse,
    // Receptions
    CreateItemRequest,
    // PVZ
    CreatePickupPointRequest,
    CreateReceptionRequest,
    // Auth
    DummyLoginRequest,
    ItemResponse,
    LoginRequest,
    PickupPointResponse,
    PickupPointWithReceptions,
    ReceptionResponse,
    ReceptionWithItems,
    RegisterRequest,
    TokenResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth endpoints
        super::auth::dummy_login,
        super::auth::register,
        super::auth::login,
        // PVZ endpoints
        super::pickup_point::create_pickup_point,
        super::pickup_point::list_pickup_points,
        super::pickup_point::close_last_reception,
        super::pickup_point::delete_last_product,
        // Reception endpoints
        super::reception::create_reception,
        super::reception::add_product,
    ),
    info(
        title = "PVZ API",
        version = "0.1.0",
        description = "Pickup point (PVZ) goods intake: receptions, products and LIFO removal.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Auth", description = "Role tokens, registration and login"),
        (name = "PVZ", description = "Pickup points and their receptions"),
        (name = "Receptions", description = "Opening receptions and accepting products"),
    ),
    components(
        schemas(
            ErrorResponse,
            // Auth
            DummyLoginRequest,
            RegisterRequest,
            LoginRequest,
            TokenResponse,
            AccountResponse,
            // PVZ
            CreatePickupPointRequest,
            PickupPointResponse,
            PickupPointWithReceptions,
            ReceptionWithItems,
            // Receptions
            CreateReceptionRequest,
            ReceptionResponse,
            CreateItemRequest,
            ItemResponse,
        )
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

/// Registers the JWT bearer scheme referenced by protected paths
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
