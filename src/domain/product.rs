//! Catalog products.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "super::id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Decrement stock by `quantity`, floored at zero.
    pub fn take_stock(&mut self, quantity: i64) {
        self.stock = (self.stock - quantity.max(0)).max(0);
    }
}

/// Body accepted by `POST /products`. The admin panel supplies its own id
/// (a millisecond timestamp string); absent ids are generated server-side.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub category: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
}

impl ProductPayload {
    pub fn into_product(self, fallback_id: String) -> Product {
        Product {
            id: self.id.unwrap_or(fallback_id),
            name: self.name,
            brand: self.brand,
            sport: self.sport,
            category: self.category,
            price: self.price,
            discount: self.discount,
            stock: self.stock.max(0),
            rating: self.rating,
            image: self.image,
            short_description: self.short_description,
            long_description: self.long_description,
        }
    }
}

/// Field-wise merge for `PATCH /products/:id`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub sport: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub discount: Option<f64>,
    pub stock: Option<i64>,
    pub rating: Option<f64>,
    pub image: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
}

impl ProductPatch {
    pub fn apply(self, product: &mut Product) {
        if let Some(v) = self.name {
            product.name = v;
        }
        if let Some(v) = self.brand {
            product.brand = v;
        }
        if let Some(v) = self.sport {
            product.sport = v;
        }
        if let Some(v) = self.category {
            product.category = v;
        }
        if let Some(v) = self.price {
            product.price = v;
        }
        if let Some(v) = self.discount {
            product.discount = v;
        }
        if let Some(v) = self.stock {
            product.stock = v.max(0);
        }
        if let Some(v) = self.rating {
            product.rating = v;
        }
        if let Some(v) = self.image {
            product.image = v;
        }
        if let Some(v) = self.short_description {
            product.short_description = v;
        }
        if let Some(v) = self.long_description {
            product.long_description = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_floors_at_zero() {
        let mut p = Product {
            id: "p1".into(),
            name: "Pro Court Racket".into(),
            price: 4999.0,
            stock: 3,
            ..Product::default()
        };
        p.take_stock(5);
        assert_eq!(p.stock, 0);
        p.stock = 3;
        p.take_stock(-2);
        assert_eq!(p.stock, 3);
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut p = Product {
            id: "p1".into(),
            name: "Racket".into(),
            price: 100.0,
            stock: 8,
            ..Product::default()
        };
        let patch: ProductPatch = serde_json::from_str(r#"{"stock": 6}"#).unwrap();
        patch.apply(&mut p);
        assert_eq!(p.stock, 6);
        assert_eq!(p.name, "Racket");
        assert_eq!(p.price, 100.0);
    }
}
