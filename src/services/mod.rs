//! Business logic operating on the store document.
//!
//! Handlers stay thin: they take the store lock (or open a mutation) and
//! delegate here. Everything in this tree is synchronous and side-effect
//! free outside the `&mut Db` it is handed, which keeps it directly
//! testable without a server.

pub mod auth;
pub mod cart;
pub mod orders;
pub mod revenue;
