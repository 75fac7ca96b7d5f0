//! API Module
//!
//! HTTP handlers, routing and authentication for the inventory REST API.
//!
//! # Endpoints
//! - `POST /items/` - Create an item
//! - `GET /items/:id/` - Read an item
//! - `PUT /items/:id/` - Update an item
//! - `DELETE /items/:id/` - Delete an item
//! - `GET /health` - Health check endpoint

pub mod auth;
pub mod handlers;
pub mod routes;

pub use auth::AuthState;
pub use handlers::*;
pub use routes::create_router;
