//! Gearstore
//!
//! A storefront and admin API backed by a single JSON document, the
//! server-side rendition of a sports-gear shop that previously ran as a
//! browser app against a mock REST store.
//!
//! ## Features
//! - Generic collection REST over `products`, `users`, `orders`, `admins`
//! - Order synchronization between the canonical collection and the copy
//!   embedded in the owning user's record
//! - Revenue aggregation per day with legacy-field fallbacks
//! - Plaintext login with blocked-account enforcement, registration, and
//!   session revalidation
//! - Per-user cart and wishlist kept on the user record

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod store;

pub use api::{router, AppState};
pub use config::Config;
pub use error::ApiError;
pub use store::{Db, JsonStore, StoreError};
