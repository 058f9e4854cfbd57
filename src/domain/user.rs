//! Users, admins, and the per-user cart/wishlist collections.

use serde::{Deserialize, Serialize};

use super::order::Order;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Empty when the client posts a record without one; the handler
    /// generates an id before insert.
    #[serde(default, deserialize_with = "super::id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_user_role")]
    pub role: String,
    #[serde(default)]
    pub is_block: bool,
    #[serde(default)]
    pub cart: Vec<CartEntry>,
    #[serde(default)]
    pub wishlist: Vec<WishlistEntry>,
    /// Denormalized copy of this user's orders; the canonical record lives
    /// in the top-level `orders` collection.
    #[serde(default)]
    pub orders: Vec<Order>,
}

fn default_user_role() -> String {
    "user".to_string()
}

fn default_admin_role() -> String {
    "admin".to_string()
}

impl User {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Cart line: a product snapshot plus quantity, stored on the user record.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    #[serde(deserialize_with = "super::id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    pub quantity: i64,
}

/// Minimal product snapshot kept on a user's wishlist.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    #[serde(deserialize_with = "super::id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(deserialize_with = "super::id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_admin_role")]
    pub role: String,
    #[serde(default)]
    pub is_block: bool,
}

/// Field-wise merge for `PATCH /users/:id`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub is_block: Option<bool>,
    pub cart: Option<Vec<CartEntry>>,
    pub wishlist: Option<Vec<WishlistEntry>>,
    pub orders: Option<Vec<Order>>,
}

impl UserPatch {
    pub fn apply(self, user: &mut User) {
        if let Some(v) = self.name {
            user.name = v;
        }
        if let Some(v) = self.email {
            user.email = v;
        }
        if let Some(v) = self.password {
            user.password = v;
        }
        if let Some(v) = self.role {
            user.role = v;
        }
        if let Some(v) = self.is_block {
            user.is_block = v;
        }
        if let Some(v) = self.cart {
            user.cart = v;
        }
        if let Some(v) = self.wishlist {
            user.wishlist = v;
        }
        if let Some(v) = self.orders {
            user.orders = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_and_collections_default() {
        let u: User =
            serde_json::from_str(r#"{"id": "u1", "email": "a@b.com"}"#).unwrap();
        assert_eq!(u.role, "user");
        assert!(!u.is_block);
        assert!(u.cart.is_empty() && u.wishlist.is_empty() && u.orders.is_empty());
    }

    #[test]
    fn block_toggle_patch() {
        let mut u: User =
            serde_json::from_str(r#"{"id": "u1", "email": "a@b.com"}"#).unwrap();
        let patch: UserPatch = serde_json::from_str(r#"{"isBlock": true}"#).unwrap();
        patch.apply(&mut u);
        assert!(u.is_block);
        assert_eq!(u.email, "a@b.com");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let u: User =
            serde_json::from_str(r#"{"id": "u1", "email": "a@b.com"}"#).unwrap();
        assert_eq!(u.display_name(), "a@b.com");
    }
}
