//! Cart and wishlist operations.
//!
//! Both collections live on the user record itself, so every mutation here
//! is a rewrite of that record; persistence comes from running inside a
//! store mutation.

use crate::domain::{CartEntry, WishlistEntry};
use crate::error::ApiError;
use crate::store::Db;

/// Add one unit of a product to the cart. Adding a product that is already
/// present merges into the existing entry by bumping its quantity.
pub fn add_to_cart(db: &mut Db, user_id: &str, product_id: &str) -> Result<Vec<CartEntry>, ApiError> {
    let product = db
        .product(product_id)
        .ok_or(ApiError::NotFound("product"))?
        .clone();
    let user = db.user_mut(user_id).ok_or(ApiError::NotFound("user"))?;

    if let Some(existing) = user.cart.iter_mut().find(|e| e.id == product.id) {
        existing.quantity += 1;
    } else {
        user.cart.push(CartEntry {
            id: product.id,
            name: product.name,
            price: product.price,
            image: Some(product.image),
            category: Some(product.category),
            stock: Some(product.stock),
            quantity: 1,
        });
    }
    Ok(user.cart.clone())
}

/// Set an entry's quantity outright. Zero removes the entry.
pub fn set_quantity(
    db: &mut Db,
    user_id: &str,
    product_id: &str,
    quantity: i64,
) -> Result<Vec<CartEntry>, ApiError> {
    let user = db.user_mut(user_id).ok_or(ApiError::NotFound("user"))?;
    let idx = user
        .cart
        .iter()
        .position(|e| e.id == product_id)
        .ok_or(ApiError::NotFound("cart item"))?;

    if quantity <= 0 {
        user.cart.remove(idx);
    } else {
        user.cart[idx].quantity = quantity;
    }
    Ok(user.cart.clone())
}

pub fn remove_from_cart(
    db: &mut Db,
    user_id: &str,
    product_id: &str,
) -> Result<Vec<CartEntry>, ApiError> {
    let user = db.user_mut(user_id).ok_or(ApiError::NotFound("user"))?;
    let before = user.cart.len();
    user.cart.retain(|e| e.id != product_id);
    if user.cart.len() == before {
        return Err(ApiError::NotFound("cart item"));
    }
    Ok(user.cart.clone())
}

pub fn clear_cart(db: &mut Db, user_id: &str) -> Result<(), ApiError> {
    let user = db.user_mut(user_id).ok_or(ApiError::NotFound("user"))?;
    user.cart.clear();
    Ok(())
}

/// Add a minimal product snapshot to the wishlist. Already-present ids are
/// a no-op, not an error.
pub fn add_to_wishlist(
    db: &mut Db,
    user_id: &str,
    product_id: &str,
) -> Result<Vec<WishlistEntry>, ApiError> {
    let product = db
        .product(product_id)
        .ok_or(ApiError::NotFound("product"))?
        .clone();
    let user = db.user_mut(user_id).ok_or(ApiError::NotFound("user"))?;

    if !user.wishlist.iter().any(|e| e.id == product.id) {
        user.wishlist.push(WishlistEntry {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            category: product.category,
        });
    }
    Ok(user.wishlist.clone())
}

pub fn remove_from_wishlist(
    db: &mut Db,
    user_id: &str,
    product_id: &str,
) -> Result<Vec<WishlistEntry>, ApiError> {
    let user = db.user_mut(user_id).ok_or(ApiError::NotFound("user"))?;
    user.wishlist.retain(|e| e.id != product_id);
    Ok(user.wishlist.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, User};

    fn seeded_db() -> Db {
        let mut db = Db::default();
        db.products.push(Product {
            id: "p1".into(),
            name: "Grip Tape".into(),
            category: "tennis".into(),
            price: 12.0,
            stock: 20,
            image: "grip.jpg".into(),
            ..Product::default()
        });
        db.users.push(User {
            id: "u1".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            password: "secret1".into(),
            role: "user".into(),
            is_block: false,
            cart: vec![],
            wishlist: vec![],
            orders: vec![],
        });
        db
    }

    #[test]
    fn double_add_merges_into_one_entry() {
        let mut db = seeded_db();
        add_to_cart(&mut db, "u1", "p1").unwrap();
        let cart = add_to_cart(&mut db, "u1", "p1").unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 2);
    }

    #[test]
    fn quantity_zero_removes_the_entry() {
        let mut db = seeded_db();
        add_to_cart(&mut db, "u1", "p1").unwrap();
        let cart = set_quantity(&mut db, "u1", "p1", 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_is_absolute() {
        let mut db = seeded_db();
        add_to_cart(&mut db, "u1", "p1").unwrap();
        let cart = set_quantity(&mut db, "u1", "p1", 5).unwrap();
        assert_eq!(cart[0].quantity, 5);
    }

    #[test]
    fn removing_an_absent_item_is_not_found() {
        let mut db = seeded_db();
        assert!(matches!(
            remove_from_cart(&mut db, "u1", "p1"),
            Err(ApiError::NotFound("cart item"))
        ));
    }

    #[test]
    fn wishlist_add_is_idempotent_and_minimal() {
        let mut db = seeded_db();
        add_to_wishlist(&mut db, "u1", "p1").unwrap();
        let wishlist = add_to_wishlist(&mut db, "u1", "p1").unwrap();
        assert_eq!(wishlist.len(), 1);
        assert_eq!(wishlist[0].name, "Grip Tape");
        assert_eq!(wishlist[0].category, "tennis");

        let wishlist = remove_from_wishlist(&mut db, "u1", "p1").unwrap();
        assert!(wishlist.is_empty());
    }

    #[test]
    fn unknown_product_cannot_be_added() {
        let mut db = seeded_db();
        assert!(matches!(
            add_to_cart(&mut db, "u1", "ghost"),
            Err(ApiError::NotFound("product"))
        ));
    }
}
