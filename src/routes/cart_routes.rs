use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;

use super::{parse_id, ApiError, AppState};
use crate::domain::Cart;

/// Every add-to-cart request adds exactly one unit.
const ADD_QUANTITY: u32 = 1;

#[instrument(skip(state))]
pub async fn create_cart(State(state): State<AppState>) -> Result<(StatusCode, Json<Cart>), ApiError> {
    let cart = state.carts.create_cart().await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

#[instrument(skip(state))]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(cid): Path<String>,
) -> Result<Json<Cart>, ApiError> {
    let id = parse_id("Cart", &cid)?;
    Ok(Json(state.carts.get_cart(id).await?))
}

#[instrument(skip(state))]
pub async fn add_product(
    State(state): State<AppState>,
    Path((cid, pid)): Path<(String, String)>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let id = parse_id("Cart", &cid)?;
    state.carts.add_product(id, pid, ADD_QUANTITY).await?;
    Ok((StatusCode::OK, "Product added to cart"))
}
