//! Admin dashboard routes: counts, totals, and the revenue-per-day series.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::Order;
use crate::services::orders;
use crate::services::revenue as revenue_svc;

use super::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_orders: usize,
    pub total_products: usize,
    pub total_customers: usize,
    pub total_revenue: i64,
    pub recent_orders: Vec<Order>,
}

pub async fn summary(State(state): State<AppState>) -> Json<Summary> {
    let db = state.store.read().await;
    let all = orders::orders_or_derived(&db);

    let mut recent = all.clone();
    recent.sort_by_key(|o| std::cmp::Reverse(revenue_svc::order_timestamp_millis(o)));
    recent.truncate(5);

    Json(Summary {
        total_orders: all.len(),
        total_products: db.products.len(),
        total_customers: db.users.len(),
        total_revenue: revenue_svc::total_revenue(&all).round() as i64,
        recent_orders: recent,
    })
}

#[derive(Debug, Deserialize)]
pub struct RevenueParams {
    pub days: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct RevenueSeries {
    pub days: u32,
    pub series: Vec<revenue_svc::DayBucket>,
}

/// Revenue bucketed per day over the trailing window (7 by default, the
/// dashboard offers 7/14/30).
pub async fn revenue(
    State(state): State<AppState>,
    Query(params): Query<RevenueParams>,
) -> Json<RevenueSeries> {
    let days = params.days.unwrap_or(7).clamp(1, 90);
    let db = state.store.read().await;
    let all = orders::orders_or_derived(&db);
    let series = revenue_svc::revenue_by_day(&all, days, Utc::now().date_naive());
    Json(RevenueSeries { days, series })
}
