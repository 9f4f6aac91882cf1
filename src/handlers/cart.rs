use actix_web::error::{JsonPayloadError, PathError};
use actix_web::middleware::from_fn;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::application::cart_service::CartService;
use crate::auth::middleware::authenticate;
use crate::auth::{AdminOnly, Authorized, CustomerOnly, CustomerOrAdmin};
use crate::domain::cart::CartLine;
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    /// Must be the caller's own id when present.
    #[serde(default)]
    pub customer_id: Option<String>,
    pub product_id: String,
    pub quantity: i32,
}

/// Target customer for admin reads; ignored for customers.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CartOwnerParams {
    /// Customer to read (admins only).
    #[serde(default)]
    pub customer_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartLineResponse {
    pub cart_item_id: Uuid,
    pub customer_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        CartLineResponse {
            cart_item_id: line.cart_item_id,
            customer_id: line.customer_id,
            product_id: line.product_id,
            quantity: line.quantity,
            created_at: line.created_at,
            updated_at: line.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartUpdatedResponse {
    pub message: String,
    pub cart_item: CartLineResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// ── Routes ───────────────────────────────────────────────────────────────────

/// Mount the `/cart` scope behind the authentication stage.
///
/// `/all` is registered before `/{id}` so it is not captured as a cart key.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cart")
            .wrap(from_fn(authenticate))
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .app_data(web::PathConfig::default().error_handler(path_error))
            .route("/all", web::get().to(list_all_carts))
            .route("/{id}", web::post().to(add_to_cart))
            .route("/{id}", web::get().to(get_cart))
            .route("/{id}/{cart_item_id}", web::delete().to(delete_from_cart)),
    );
}

/// Body extraction failures go out as `{message}` like every other error.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let app_err = match &err {
        JsonPayloadError::Deserialize(e) => {
            let detail = e.to_string();
            if detail.contains("missing field `productId`") {
                AppError::MissingParameter("Product ID")
            } else if detail.contains("missing field `quantity`") {
                AppError::MissingParameter("Quantity")
            } else {
                AppError::BadRequest(format!("Invalid request body: {}", detail))
            }
        }
        other => AppError::BadRequest(format!("Invalid request body: {}", other)),
    };
    app_err.into()
}

/// The only typed path segment is `cart_item_id`; an unparsable one names no line.
fn path_error(_err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::NotFound.into()
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /cart/{id}
///
/// Adds `quantity` of a product to the caller's cart. Whether a missing line
/// is created or rejected depends on the configured add policy.
#[utoipa::path(
    post,
    path = "/cart/{id}",
    params(("id" = String, Path, description = "Cart route key (not interpreted)")),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Cart updated", body = CartUpdatedResponse),
        (status = 400, description = "Invalid input or no line to update", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Caller is not a customer or targets another customer", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "cart"
)]
pub async fn add_to_cart(
    service: web::Data<CartService>,
    auth: Authorized<CustomerOnly>,
    _cart: web::Path<String>,
    body: web::Json<AddToCartRequest>,
) -> Result<HttpResponse, AppError> {
    let caller = auth.into_identity();
    let body = body.into_inner();

    let line = web::block(move || {
        service.add_to_cart(
            &caller,
            body.customer_id.as_deref(),
            &body.product_id,
            body.quantity,
        )
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(CartUpdatedResponse {
        message: "Cart updated successfully".to_string(),
        cart_item: line.into(),
    }))
}

/// GET /cart/{id}
///
/// Customers get their own lines. Admins name the customer with
/// `?customerId=` or a `{"customerId": ...}` body.
#[utoipa::path(
    get,
    path = "/cart/{id}",
    params(
        ("id" = String, Path, description = "Cart route key (not interpreted)"),
        CartOwnerParams,
    ),
    responses(
        (status = 200, description = "Cart lines of the customer", body = [CartLineResponse]),
        (status = 400, description = "Customer ID is required", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Role not allowed", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "cart"
)]
pub async fn get_cart(
    service: web::Data<CartService>,
    auth: Authorized<CustomerOrAdmin>,
    _cart: web::Path<String>,
    query: web::Query<CartOwnerParams>,
    body: Option<web::Json<CartOwnerParams>>,
) -> Result<HttpResponse, AppError> {
    let caller = auth.into_identity();
    let requested = query
        .into_inner()
        .customer_id
        .filter(|id| !id.is_empty())
        .or_else(|| body.and_then(|b| b.into_inner().customer_id));

    let lines = web::block(move || service.get_cart(&caller, requested.as_deref()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let items: Vec<CartLineResponse> = lines.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// DELETE /cart/{id}/{cart_item_id}
///
/// Removes one line of the caller's cart.
#[utoipa::path(
    delete,
    path = "/cart/{id}/{cart_item_id}",
    params(
        ("id" = String, Path, description = "Cart route key (not interpreted)"),
        ("cart_item_id" = Uuid, Path, description = "Cart line to delete"),
    ),
    responses(
        (status = 200, description = "Cart item deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Role not allowed", body = MessageResponse),
        (status = 404, description = "Cart item not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "cart"
)]
pub async fn delete_from_cart(
    service: web::Data<CartService>,
    auth: Authorized<CustomerOnly>,
    path: web::Path<(String, Uuid)>,
) -> Result<HttpResponse, AppError> {
    let caller = auth.into_identity();
    let (_cart, cart_item_id) = path.into_inner();

    web::block(move || service.delete_from_cart(&caller, cart_item_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(json!({ "message": "Cart item deleted successfully" })))
}

/// GET /cart/all
///
/// Every cart line in the store. Admin only.
#[utoipa::path(
    get,
    path = "/cart/all",
    responses(
        (status = 200, description = "All cart lines", body = [CartLineResponse]),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Caller is not an admin", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "cart"
)]
pub async fn list_all_carts(
    service: web::Data<CartService>,
    _auth: Authorized<AdminOnly>,
) -> Result<HttpResponse, AppError> {
    let lines = web::block(move || service.list_all_carts())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let items: Vec<CartLineResponse> = lines.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(items))
}
