//! Auth routes: login, register, session revalidation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::ApiError;
use crate::services::auth::{self, Credentials, Identity, RegisterRequest};

use super::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<Identity>, ApiError> {
    let db = state.store.read().await;
    auth::login(&db, &credentials).map(Json)
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Identity>), ApiError> {
    let identity = state
        .store
        .mutate(|db| auth::register(db, req))
        .await?;
    Ok((StatusCode::CREATED, Json(identity)))
}

pub async fn session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Identity>, ApiError> {
    let db = state.store.read().await;
    auth::validate_session(&db, &id).map(Json)
}
