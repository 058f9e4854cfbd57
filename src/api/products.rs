//! Catalog collection routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Product, ProductPatch, ProductPayload};
use crate::error::ApiError;

use super::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store.read().await.products.clone())
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let db = state.store.read().await;
    db.product(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("product"))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    payload.validate()?;
    let product = state
        .store
        .mutate(|db| {
            let product = payload.into_product(Uuid::new_v4().to_string());
            db.products.push(product.clone());
            Ok::<_, ApiError>(product)
        })
        .await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Whole-record replace; the path id wins over any id in the body.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    payload.validate()?;
    let product = state
        .store
        .mutate(|db| {
            let slot = db.product_mut(&id).ok_or(ApiError::NotFound("product"))?;
            let mut product = payload.into_product(id.clone());
            product.id = id.clone();
            *slot = product.clone();
            Ok::<_, ApiError>(product)
        })
        .await?;
    Ok(Json(product))
}

pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .store
        .mutate(|db| {
            let product = db.product_mut(&id).ok_or(ApiError::NotFound("product"))?;
            patch.apply(product);
            Ok::<_, ApiError>(product.clone())
        })
        .await?;
    Ok(Json(product))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .mutate(|db| {
            let before = db.products.len();
            db.products.retain(|p| p.id != id);
            if db.products.len() == before {
                return Err(ApiError::NotFound("product"));
            }
            Ok(())
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
