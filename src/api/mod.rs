//! HTTP surface: the generic collection routes the storefront consumes plus
//! the service routes (auth, cart, checkout, dashboard).

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::store::JsonStore;

mod auth;
mod cart;
mod dashboard;
mod orders;
mod products;
mod users;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonStore>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async { Json(serde_json::json!({"status": "healthy", "service": "gearstore"})) }),
        )
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:id",
            get(products::fetch)
                .put(products::replace)
                .patch(products::patch)
                .delete(products::remove),
        )
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id", get(users::fetch).patch(users::patch))
        .route("/admins", get(users::list_admins))
        .route("/orders", get(orders::list).post(orders::create))
        .route(
            "/orders/:id",
            get(orders::fetch).patch(orders::patch).delete(orders::remove),
        )
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/auth/session/:id", get(auth::session))
        .route(
            "/users/:id/cart",
            get(cart::list).post(cart::add).delete(cart::clear),
        )
        .route(
            "/users/:id/cart/:product_id",
            axum::routing::patch(cart::set_quantity).delete(cart::remove),
        )
        .route("/users/:id/wishlist", get(cart::wishlist).post(cart::wish))
        .route(
            "/users/:id/wishlist/:product_id",
            delete(cart::unwish),
        )
        .route("/users/:id/checkout", post(orders::checkout))
        .route("/dashboard/summary", get(dashboard::summary))
        .route("/dashboard/revenue", get(dashboard::revenue))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
