use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::instrument;

use super::{parse_id, ApiError, AppState};
use crate::domain::{Product, ProductCreate, ProductPatch};

/// Returned instead of an empty array when the catalog has no products.
pub const EMPTY_CATALOG_MESSAGE: &str = "The product list is empty.";

#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Result<Response, ApiError> {
    let products = state.products.list_products().await?;
    if products.is_empty() {
        return Ok(Json(EMPTY_CATALOG_MESSAGE).into_response());
    }
    Ok(Json(products).into_response())
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id("Product", &pid)?;
    Ok(Json(state.products.get_product(id).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let product = state.products.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[instrument(skip(state, patch))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    patch: Result<Json<ProductPatch>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id("Product", &pid)?;
    let Json(patch) = patch.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(Json(state.products.update_product(id, patch).await?))
}

#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<(StatusCode, String), ApiError> {
    let id = parse_id("Product", &pid)?;
    state.products.delete_product(id).await?;
    Ok((StatusCode::OK, format!("Product with id {id} deleted")))
}
