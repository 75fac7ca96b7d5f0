//! Item model and request/response types for the inventory API
//!
//! `requests` plays the serializer role: it turns raw JSON bodies into
//! validated values or a per-field error map.

pub mod item;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use item::{Item, ItemChanges, ItemId, NewItem};
pub use requests::{validate_create, validate_update, FieldErrors};
pub use responses::{ErrorResponse, HealthResponse};
