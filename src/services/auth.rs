//! Login, registration, and session revalidation.
//!
//! Credentials are matched in plaintext against the document, users first
//! and admins as the fallback identity. This mirrors the mock store this
//! service replaces; real credential handling is explicitly out of scope.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Admin, User};
use crate::error::ApiError;
use crate::store::Db;

/// Sanitized identity returned by every auth route. Never carries the
/// password, whatever the store holds.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: if user.role.is_empty() {
                "user".to_string()
            } else {
                user.role.clone()
            },
        }
    }
}

impl From<&Admin> for Identity {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.clone(),
            name: admin.name.clone(),
            email: admin.email.clone(),
            role: if admin.role.is_empty() {
                "admin".to_string()
            } else {
                admin.role.clone()
            },
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct Credentials {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

/// Match credentials against users, then admins. A blocked account is
/// rejected even with correct credentials.
pub fn login(db: &Db, credentials: &Credentials) -> Result<Identity, ApiError> {
    credentials.validate()?;

    if let Some(user) = db
        .users
        .iter()
        .find(|u| u.email == credentials.email && u.password == credentials.password)
    {
        if user.is_block {
            return Err(ApiError::AccountBlocked);
        }
        return Ok(Identity::from(user));
    }

    if let Some(admin) = db
        .admins
        .iter()
        .find(|a| a.email == credentials.email && a.password == credentials.password)
    {
        if admin.is_block {
            return Err(ApiError::AccountBlocked);
        }
        return Ok(Identity::from(admin));
    }

    Err(ApiError::InvalidCredentials)
}

/// Create a user with empty cart, wishlist, and order history.
pub fn register(db: &mut Db, req: RegisterRequest) -> Result<Identity, ApiError> {
    req.validate()?;
    if db.user_by_email(&req.email).is_some() {
        return Err(ApiError::EmailTaken);
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        email: req.email,
        password: req.password,
        role: "user".to_string(),
        is_block: false,
        cart: vec![],
        wishlist: vec![],
        orders: vec![],
    };
    let identity = Identity::from(&user);
    db.users.push(user);
    tracing::info!(user_id = %identity.id, "user registered");
    Ok(identity)
}

/// Revalidate a persisted session id: gone means the session ended, blocked
/// means forced logout, otherwise the caller gets the refreshed profile.
pub fn validate_session(db: &Db, id: &str) -> Result<Identity, ApiError> {
    if let Some(user) = db.user(id) {
        if user.is_block {
            return Err(ApiError::AccountBlocked);
        }
        return Ok(Identity::from(user));
    }
    if let Some(admin) = db.admin(id) {
        if admin.is_block {
            return Err(ApiError::AccountBlocked);
        }
        return Ok(Identity::from(admin));
    }
    Err(ApiError::NotFound("session"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_db() -> Db {
        let mut db = Db::default();
        db.users.push(User {
            id: "u1".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            password: "secret1".into(),
            role: String::new(),
            is_block: false,
            cart: vec![],
            wishlist: vec![],
            orders: vec![],
        });
        db.users.push(User {
            id: "u2".into(),
            name: "Blocked Bea".into(),
            email: "bea@example.com".into(),
            password: "secret2".into(),
            role: "user".into(),
            is_block: true,
            cart: vec![],
            wishlist: vec![],
            orders: vec![],
        });
        db.admins.push(Admin {
            id: "a1".into(),
            name: "Root".into(),
            email: "root@example.com".into(),
            password: "adminpw".into(),
            role: String::new(),
            is_block: false,
        });
        db
    }

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn user_login_defaults_role() {
        let db = seeded_db();
        let id = login(&db, &creds("asha@example.com", "secret1")).unwrap();
        assert_eq!(id.role, "user");
        assert_eq!(id.id, "u1");
    }

    #[test]
    fn blocked_user_is_rejected_despite_correct_credentials() {
        let db = seeded_db();
        assert!(matches!(
            login(&db, &creds("bea@example.com", "secret2")),
            Err(ApiError::AccountBlocked)
        ));
    }

    #[test]
    fn admin_is_the_fallback_identity() {
        let db = seeded_db();
        let id = login(&db, &creds("root@example.com", "adminpw")).unwrap();
        assert_eq!(id.role, "admin");
    }

    #[test]
    fn wrong_password_is_unauthorized() {
        let db = seeded_db();
        assert!(matches!(
            login(&db, &creds("asha@example.com", "wrong-pw")),
            Err(ApiError::InvalidCredentials)
        ));
    }

    #[test]
    fn register_rejects_duplicate_email() {
        let mut db = seeded_db();
        let req = RegisterRequest {
            name: "Dup".into(),
            email: "asha@example.com".into(),
            password: "secret9".into(),
        };
        assert!(matches!(register(&mut db, req), Err(ApiError::EmailTaken)));
    }

    #[test]
    fn register_creates_empty_collections() {
        let mut db = seeded_db();
        let id = register(
            &mut db,
            RegisterRequest {
                name: "New".into(),
                email: "new@example.com".into(),
                password: "secret9".into(),
            },
        )
        .unwrap();
        let user = db.user(&id.id).unwrap();
        assert!(user.cart.is_empty() && user.wishlist.is_empty() && user.orders.is_empty());
        assert_eq!(user.role, "user");
    }

    #[test]
    fn session_revalidation_lifecycle() {
        let mut db = seeded_db();
        assert_eq!(validate_session(&db, "u1").unwrap().id, "u1");
        assert_eq!(validate_session(&db, "a1").unwrap().role, "admin");
        assert!(matches!(
            validate_session(&db, "ghost"),
            Err(ApiError::NotFound("session"))
        ));

        db.user_mut("u1").unwrap().is_block = true;
        assert!(matches!(
            validate_session(&db, "u1"),
            Err(ApiError::AccountBlocked)
        ));
    }
}
