//! Order synchronization.
//!
//! Every order exists twice: once in the canonical `orders` collection and
//! once embedded in the owning user's record. Place, update, and delete all
//! write both locations; callers run these inside a single store mutation so
//! the pair commits or rolls back together. The canonical record is
//! authoritative — after any update the embedded copy is refreshed from it
//! wholesale, which is what keeps the two statuses equal.

use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::domain::{Order, OrderItem, OrderPatch, OrderStatus, ShippingDetails};
use crate::error::ApiError;
use crate::services::revenue;
use crate::store::Db;

/// Checkout payload: shipping details plus an optional buy-now item. When
/// `buyNow` is absent the order is built from the user's cart, which is then
/// cleared on success.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "postal code is required"))]
    pub postal_code: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[serde(default)]
    pub buy_now: Option<BuyNowItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyNowItem {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// Place an order for `user_id`.
///
/// Builds the order (timestamp id, `totalAmount = Σ price × quantity`,
/// status `Pending`), appends it to the canonical collection and to the
/// owner's embedded list, decrements stock per item (floored at zero), and
/// clears the cart for cart-originated orders.
pub fn place_order(db: &mut Db, user_id: &str, req: CheckoutRequest) -> Result<Order, ApiError> {
    req.validate()?;

    let from_cart = req.buy_now.is_none();
    let items = match req.buy_now {
        Some(buy_now) => {
            let product = db
                .product(&buy_now.product_id)
                .ok_or(ApiError::NotFound("product"))?;
            vec![OrderItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity: buy_now.quantity.max(1),
            }]
        }
        None => {
            let user = db.user(user_id).ok_or(ApiError::NotFound("user"))?;
            if user.cart.is_empty() {
                return Err(ApiError::Validation("cart is empty".into()));
            }
            user.cart
                .iter()
                .map(|entry| OrderItem {
                    product_id: entry.id.clone(),
                    name: entry.name.clone(),
                    price: entry.price,
                    quantity: entry.quantity.max(1),
                })
                .collect()
        }
    };

    let total_amount: f64 = items.iter().map(OrderItem::line_total).sum();
    let order = Order {
        id: Utc::now().timestamp_millis().to_string(),
        user_id: Some(user_id.to_string()),
        items,
        total_amount: Some(total_amount),
        total: None,
        shipping_details: Some(ShippingDetails {
            name: req.name,
            address: req.address,
            city: req.city,
            postal_code: req.postal_code,
            phone: req.phone,
        }),
        order_date: Some(Utc::now().to_rfc3339()),
        created_at: None,
        status: OrderStatus::Pending,
        user_name: None,
    };

    insert_order(db, order.clone())?;

    for item in &order.items {
        if let Some(product) = db.product_mut(&item.product_id) {
            product.take_stock(item.quantity);
        }
    }

    if from_cart {
        if let Some(user) = db.user_mut(user_id) {
            user.cart.clear();
        }
    }

    tracing::info!(order_id = %order.id, user_id, total = total_amount, "order placed");
    Ok(order)
}

/// Insert a client-built order (the generic `POST /orders` path): push to
/// the canonical collection and mirror into the owner's embedded list.
pub fn insert_order(db: &mut Db, mut order: Order) -> Result<Order, ApiError> {
    if order.id.is_empty() {
        order.id = Utc::now().timestamp_millis().to_string();
    }
    if order.order_date.is_none() {
        order.order_date = Some(Utc::now().to_rfc3339());
    }
    db.orders.push(order.clone());

    if let Some(owner) = order.user_id.as_deref() {
        if let Some(user) = db.user_mut(owner) {
            user.orders.push(order.clone());
        }
    }
    Ok(order)
}

/// Apply `patch` to the canonical order, then refresh the owner's embedded
/// copy from the canonical record. A missing owner or a missing embedded
/// copy is tolerated; the canonical record is what counts.
pub fn update_order(db: &mut Db, order_id: &str, patch: OrderPatch) -> Result<Order, ApiError> {
    let order = db.order_mut(order_id).ok_or(ApiError::NotFound("order"))?;
    patch.apply(order);
    let updated = order.clone();

    if let Some(owner) = updated.user_id.as_deref() {
        if let Some(user) = db.user_mut(owner) {
            if let Some(embedded) = user.orders.iter_mut().find(|o| o.id == order_id) {
                *embedded = updated.clone();
            }
        }
    }

    tracing::info!(order_id, status = ?updated.status, "order updated");
    Ok(updated)
}

/// Remove the canonical record and filter the id out of the owner's
/// embedded list.
pub fn delete_order(db: &mut Db, order_id: &str) -> Result<(), ApiError> {
    let before = db.orders.len();
    let owner = db
        .order(order_id)
        .and_then(|o| o.user_id.clone());
    db.orders.retain(|o| o.id != order_id);
    if db.orders.len() == before {
        return Err(ApiError::NotFound("order"));
    }

    if let Some(owner) = owner {
        if let Some(user) = db.user_mut(&owner) {
            user.orders.retain(|o| o.id != order_id);
        }
    }

    tracing::info!(order_id, "order deleted");
    Ok(())
}

/// Flatten every user's embedded orders, attaching `userId` and `userName`,
/// sorted newest first (missing dates sort as epoch 0). Used when the
/// canonical collection is empty, e.g. a seed file without a top-level
/// `orders` array.
pub fn derive_orders_from_users(db: &Db) -> Vec<Order> {
    let mut all: Vec<Order> = db
        .users
        .iter()
        .flat_map(|user| {
            user.orders.iter().map(|o| {
                let mut order = o.clone();
                order.user_id = Some(user.id.clone());
                order.user_name = Some(if user.display_name().is_empty() {
                    "Unknown".to_string()
                } else {
                    user.display_name().to_string()
                });
                order
            })
        })
        .collect();
    all.sort_by_key(|o| std::cmp::Reverse(revenue::order_timestamp_millis(o)));
    all
}

/// Canonical orders when present, otherwise the derived fallback.
pub fn orders_or_derived(db: &Db) -> Vec<Order> {
    if db.orders.is_empty() {
        derive_orders_from_users(db)
    } else {
        db.orders.clone()
    }
}
