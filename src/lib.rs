//! Inventory API - item CRUD over HTTP
//!
//! Four authenticated endpoints over a single `Item` resource, with a
//! read-through TTL cache in front of the item store.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::{AppState, AuthState};
pub use config::Config;
pub use tasks::spawn_cleanup_task;
