use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers::cart;

/// Registers the bearer JWT scheme every cart route requires.
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

#[derive(OpenApi)]
#[openapi(
    paths(
        cart::add_to_cart,
        cart::get_cart,
        cart::delete_from_cart,
        cart::list_all_carts,
    ),
    components(schemas(
        cart::AddToCartRequest,
        cart::CartOwnerParams,
        cart::CartLineResponse,
        cart::CartUpdatedResponse,
        cart::MessageResponse,
    )),
    modifiers(&SecurityAddon),
    security(("bearer_auth" = [])),
    tags((name = "cart", description = "Shopping cart lines"))
)]
pub struct ApiDoc;
