//! Order routes: the generic collection surface plus checkout.
//!
//! All writes go through `services::orders`, which performs the canonical +
//! embedded dual write inside one store mutation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::{Order, OrderPatch};
use crate::error::ApiError;
use crate::services::orders as svc;

use super::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    pub user_id: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<OrderFilter>,
) -> Json<Vec<Order>> {
    let db = state.store.read().await;
    let orders = match filter.user_id {
        Some(user_id) => db
            .orders
            .iter()
            .filter(|o| o.user_id.as_deref() == Some(user_id.as_str()))
            .cloned()
            .collect(),
        None => db.orders.clone(),
    };
    Json(orders)
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let db = state.store.read().await;
    db.order(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("order"))
}

/// Insert a client-built order (the checkout form's own shape); mirrored
/// into the owner's embedded list.
pub async fn create(
    State(state): State<AppState>,
    Json(order): Json<Order>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = state
        .store
        .mutate(|db| svc::insert_order(db, order))
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<OrderPatch>,
) -> Result<Json<Order>, ApiError> {
    let order = state
        .store
        .mutate(|db| svc::update_order(db, &id, patch))
        .await?;
    Ok(Json(order))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .mutate(|db| svc::delete_order(db, &id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn checkout(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<svc::CheckoutRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = state
        .store
        .mutate(|db| svc::place_order(db, &user_id, req))
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}
