//! Environment-derived configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct Config {
    /// TCP port to listen on. `PORT`, default 3000 (the port the mock
    /// store historically used).
    pub port: u16,
    /// Path of the JSON document. `STORE_PATH`, default `db.json`.
    pub store_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => 3000,
        };
        let store_path = std::env::var("STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("db.json"));
        Ok(Self { port, store_path })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
