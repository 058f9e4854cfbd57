//! User and admin collection routes.
//!
//! These return raw records, password included — the store is an openly
//! readable mock document and the admin panel edits these fields directly.
//! The `/auth` routes are the sanitized surface.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{Admin, User, UserPatch};
use crate::error::ApiError;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct UserFilter {
    pub email: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Json<Vec<User>> {
    let db = state.store.read().await;
    let users = match filter.email {
        Some(email) => db
            .users
            .iter()
            .filter(|u| u.email == email)
            .cloned()
            .collect(),
        None => db.users.clone(),
    };
    Json(users)
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let db = state.store.read().await;
    db.user(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("user"))
}

/// Generic collection insert, the shape the signup form posts. Missing ids
/// are generated; missing collections default to empty.
pub async fn create(
    State(state): State<AppState>,
    Json(mut user): Json<User>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state
        .store
        .mutate(|db| {
            if db.user_by_email(&user.email).is_some() {
                return Err(ApiError::EmailTaken);
            }
            if user.id.is_empty() {
                user.id = Uuid::new_v4().to_string();
            }
            db.users.push(user.clone());
            Ok(user)
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .store
        .mutate(|db| {
            let user = db.user_mut(&id).ok_or(ApiError::NotFound("user"))?;
            patch.apply(user);
            Ok::<_, ApiError>(user.clone())
        })
        .await?;
    Ok(Json(user))
}

pub async fn list_admins(State(state): State<AppState>) -> Json<Vec<Admin>> {
    Json(state.store.read().await.admins.clone())
}
