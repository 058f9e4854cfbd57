//! Revenue aggregation for the admin dashboard.
//!
//! Older records are ragged: dates may live in `orderDate` or `createdAt`
//! (RFC 3339 or bare `YYYY-MM-DD`), and totals in `totalAmount`, `total`,
//! or only implicitly in `items`. The fallback chains here absorb all of
//! that; orders whose date cannot be parsed, or falls outside the window,
//! simply contribute nothing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::domain::Order;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub revenue: i64,
}

/// Monetary value of one order: `totalAmount`, else `total`, else the item
/// sum with negative or missing price/quantity treated as 0.
pub fn order_value(order: &Order) -> f64 {
    if let Some(v) = order.total_amount {
        return v;
    }
    if let Some(v) = order.total {
        return v;
    }
    order.items.iter().map(|i| i.line_total()).sum()
}

/// The day an order belongs to: `orderDate` first, then `createdAt`.
pub fn order_day(order: &Order) -> Option<NaiveDate> {
    order
        .order_date
        .as_deref()
        .and_then(parse_day)
        .or_else(|| order.created_at.as_deref().and_then(parse_day))
}

/// Millisecond timestamp for sorting; unparseable or missing dates are 0.
pub fn order_timestamp_millis(order: &Order) -> i64 {
    order
        .order_date
        .as_deref()
        .and_then(parse_millis)
        .unwrap_or(0)
}

fn parse_day(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

fn parse_millis(s: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    parse_day(s).map(|d| {
        d.and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or(0)
    })
}

/// One bucket per calendar day in the trailing `days`-day window ending at
/// `today`, in chronological order. Orders outside the window are skipped,
/// never clipped in. Bucket values are rounded to the nearest integer.
pub fn revenue_by_day(orders: &[Order], days: u32, today: NaiveDate) -> Vec<DayBucket> {
    let days = days.max(1);
    let window_start = today - chrono::Days::new(u64::from(days) - 1);

    let mut totals = vec![0.0f64; days as usize];
    for order in orders {
        let Some(day) = order_day(order) else {
            continue;
        };
        if day < window_start || day > today {
            continue;
        }
        let idx = (day - window_start).num_days() as usize;
        totals[idx] += order_value(order);
    }

    totals
        .into_iter()
        .enumerate()
        .map(|(i, total)| DayBucket {
            date: window_start + chrono::Days::new(i as u64),
            revenue: total.round() as i64,
        })
        .collect()
}

/// Grand total over every order, no window.
pub fn total_revenue(orders: &[Order]) -> f64 {
    orders.iter().map(order_value).sum()
}
