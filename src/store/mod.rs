//! The JSON document store.
//!
//! The whole database is one `db.json` document holding four collections.
//! Reads take a shared lock; mutations run against a draft copy of the
//! document, the file is rewritten (temp file + rename), and only then is
//! the draft swapped in. A failed operation or a failed write leaves both
//! memory and disk untouched, so multi-collection writes (the order dual
//! writes) are all-or-nothing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::domain::{Admin, Order, Product, User};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store document is not valid json: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The full document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Db {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub admins: Vec<Admin>,
}

impl Db {
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn product_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn order_mut(&mut self, id: &str) -> Option<&mut Order> {
        self.orders.iter_mut().find(|o| o.id == id)
    }

    pub fn admin(&self, id: &str) -> Option<&Admin> {
        self.admins.iter().find(|a| a.id == id)
    }
}

pub struct JsonStore {
    path: PathBuf,
    db: RwLock<Db>,
}

impl JsonStore {
    /// Load the document at `path`. A missing file yields an empty document;
    /// a file that exists but does not parse is a startup error.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let db = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Db::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            db: RwLock::new(db),
        })
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Db> {
        self.db.read().await
    }

    /// Apply `op` to a draft of the document and persist the result.
    /// The draft replaces the live document only after the file write
    /// succeeds; any failure rolls the whole mutation back.
    pub async fn mutate<T, E, F>(&self, op: F) -> Result<T, E>
    where
        F: FnOnce(&mut Db) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut guard = self.db.write().await;
        let mut draft = guard.clone();
        let out = op(&mut draft)?;
        self.write_file(&draft).await.map_err(E::from)?;
        *guard = draft;
        Ok(out)
    }

    async fn write_file(&self, db: &Db) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(db)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
