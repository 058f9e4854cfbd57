//! Cart and wishlist routes, scoped under the owning user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::{CartEntry, WishlistEntry};
use crate::error::ApiError;
use crate::services::cart as svc;

use super::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    pub product_id: String,
}

#[derive(Debug, Deserialize)]
pub struct QuantityUpdate {
    pub quantity: i64,
}

pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<CartEntry>>, ApiError> {
    let db = state.store.read().await;
    db.user(&user_id)
        .map(|u| Json(u.cart.clone()))
        .ok_or(ApiError::NotFound("user"))
}

pub async fn add(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<ProductRef>,
) -> Result<(StatusCode, Json<Vec<CartEntry>>), ApiError> {
    let cart = state
        .store
        .mutate(|db| svc::add_to_cart(db, &user_id, &body.product_id))
        .await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

pub async fn set_quantity(
    State(state): State<AppState>,
    Path((user_id, product_id)): Path<(String, String)>,
    Json(body): Json<QuantityUpdate>,
) -> Result<Json<Vec<CartEntry>>, ApiError> {
    let cart = state
        .store
        .mutate(|db| svc::set_quantity(db, &user_id, &product_id, body.quantity))
        .await?;
    Ok(Json(cart))
}

pub async fn remove(
    State(state): State<AppState>,
    Path((user_id, product_id)): Path<(String, String)>,
) -> Result<Json<Vec<CartEntry>>, ApiError> {
    let cart = state
        .store
        .mutate(|db| svc::remove_from_cart(db, &user_id, &product_id))
        .await?;
    Ok(Json(cart))
}

pub async fn clear(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .mutate(|db| svc::clear_cart(db, &user_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn wishlist(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<WishlistEntry>>, ApiError> {
    let db = state.store.read().await;
    db.user(&user_id)
        .map(|u| Json(u.wishlist.clone()))
        .ok_or(ApiError::NotFound("user"))
}

pub async fn wish(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<ProductRef>,
) -> Result<(StatusCode, Json<Vec<WishlistEntry>>), ApiError> {
    let wishlist = state
        .store
        .mutate(|db| svc::add_to_wishlist(db, &user_id, &body.product_id))
        .await?;
    Ok((StatusCode::CREATED, Json(wishlist)))
}

pub async fn unwish(
    State(state): State<AppState>,
    Path((user_id, product_id)): Path<(String, String)>,
) -> Result<Json<Vec<WishlistEntry>>, ApiError> {
    let wishlist = state
        .store
        .mutate(|db| svc::remove_from_wishlist(db, &user_id, &product_id))
        .await?;
    Ok(Json(wishlist))
}
