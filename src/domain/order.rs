//! Orders.
//!
//! An order lives in two places: the canonical `orders` collection and a
//! denormalized copy embedded in the owning user's record (kept so the
//! profile view needs no join). The services layer performs both writes
//! inside one store mutation so the copies never diverge.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Empty when the client omits it; filled with a timestamp on insert.
    #[serde(default, deserialize_with = "super::id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "super::opt_id_string")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Preferred total; legacy records may carry `total` instead, or
    /// neither, in which case totals derive from `items`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<ShippingDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    /// Attached only by the derived-orders fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(deserialize_with = "super::id_string")]
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
}

impl OrderItem {
    /// Line value with missing or negative price/quantity treated as 0.
    pub fn line_total(&self) -> f64 {
        self.price.max(0.0) * self.quantity.max(0) as f64
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub phone: String,
}

/// Field-wise merge for `PATCH /orders/:id`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
    pub shipping_details: Option<ShippingDetails>,
    pub total_amount: Option<f64>,
}

impl OrderPatch {
    pub fn apply(self, order: &mut Order) {
        if let Some(v) = self.status {
            order.status = v;
        }
        if let Some(v) = self.shipping_details {
            order.shipping_details = Some(v);
        }
        if let Some(v) = self.total_amount {
            order.total_amount = Some(v);
        }
    }
}
