//! Data model for the store document.
//!
//! The whole database is one JSON document with four collections. Wire
//! names are camelCase to match the document on disk, and ids are strings
//! everywhere; seed files with numeric ids are coerced on deserialization.

pub mod order;
pub mod product;
pub mod user;

pub use order::{Order, OrderItem, OrderPatch, OrderStatus, ShippingDetails};
pub use product::{Product, ProductPatch, ProductPayload};
pub use user::{Admin, CartEntry, User, UserPatch, WishlistEntry};

use serde::{Deserialize, Deserializer};

/// Accept either a JSON string or number and yield a string id.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// [`id_string`] for optional fields; JSON `null` stays `None`.
pub(crate) fn opt_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => Some(s),
        Some(Raw::Number(n)) => Some(n.to_string()),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "id_string")]
        id: String,
    }

    #[test]
    fn numeric_ids_become_strings() {
        let h: Holder = serde_json::from_str(r#"{"id": 1762412345678}"#).unwrap();
        assert_eq!(h.id, "1762412345678");
        let h: Holder = serde_json::from_str(r#"{"id": "p-1"}"#).unwrap();
        assert_eq!(h.id, "p-1");
    }
}
