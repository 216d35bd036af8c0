//! HTTP surface: maps requests onto the clients and results onto status codes.

mod cart_routes;
mod product_routes;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use thiserror::Error;
use tracing::warn;

use crate::actor_framework::EntityId;
use crate::cart_actor::CartError;
use crate::clients::{CartClient, ProductClient};
use crate::product_actor::ProductError;

/// Shared handler state: one client per collection actor.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub carts: CartClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(product_routes::list_products).post(product_routes::create_product),
        )
        .route(
            "/api/products/",
            get(product_routes::list_products).post(product_routes::create_product),
        )
        .route(
            "/api/products/:pid",
            get(product_routes::get_product)
                .put(product_routes::update_product)
                .delete(product_routes::delete_product),
        )
        .route("/api/carts", post(cart_routes::create_cart))
        .route("/api/carts/", post(cart_routes::create_cart))
        .route("/api/carts/:cid", get(cart_routes::get_cart))
        .route("/api/carts/:cid/product/:pid", post(cart_routes::add_product))
        .with_state(state)
}

/// Failure of a request, rendered as a status code and a plain-text body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error("{kind} not found: {raw}")]
    UnknownId { kind: &'static str, raw: String },
    #[error("Invalid request body: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Product(ProductError::NotFound(_))
            | ApiError::Cart(CartError::NotFound(_))
            | ApiError::UnknownId { .. } => StatusCode::NOT_FOUND,
            ApiError::Product(ProductError::DuplicateCode(_) | ProductError::Rejected(_))
            | ApiError::Cart(CartError::Rejected(_))
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Product(ProductError::ActorCommunicationError(_))
            | ApiError::Cart(CartError::ActorCommunicationError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        warn!(status = status.as_u16(), error = %self, "Request failed");
        (status, self.to_string()).into_response()
    }
}

/// Path ids are parsed once here; anything that is not an id cannot match a record.
fn parse_id(kind: &'static str, raw: &str) -> Result<EntityId, ApiError> {
    raw.parse().map_err(|_| ApiError::UnknownId {
        kind,
        raw: raw.to_string(),
    })
}
