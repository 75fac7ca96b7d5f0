//! API Handlers
//!
//! HTTP request handlers for the item resource and health check.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::cache::{cache_key, ItemCache, MemoryCache};
use crate::error::{ApiError, Result};
use crate::models::{validate_create, validate_update, HealthResponse, Item, ItemId};
use crate::store::{ItemStore, MemoryItemStore};

/// Application state shared across all handlers.
///
/// Store and cache are injected as trait objects so either can be swapped.
#[derive(Clone)]
pub struct AppState {
    /// Authoritative item storage
    pub store: Arc<dyn ItemStore>,
    /// Read-through cache in front of the store
    pub cache: Arc<dyn ItemCache>,
    /// Lifetime of entries written on a read miss
    pub cache_ttl: Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>, cache: Arc<dyn ItemCache>, cache_ttl: Duration) -> Self {
        Self {
            store,
            cache,
            cache_ttl,
        }
    }

    /// Builds state over the in-memory backends.
    ///
    /// The concrete cache is returned as well so the caller can run the
    /// cleanup task against it.
    pub fn in_memory(config: &crate::config::Config) -> (Self, Arc<MemoryCache>) {
        let cache = Arc::new(MemoryCache::new());
        let state = Self::new(
            Arc::new(MemoryItemStore::new()),
            cache.clone(),
            config.cache_ttl(),
        );
        (state, cache)
    }
}

/// Fetches an item or fails with `NotFound`.
async fn fetch_item(store: &dyn ItemStore, id: ItemId) -> Result<Item> {
    store
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(id.to_string()))
}

fn parse_id(raw: &str) -> Result<ItemId> {
    ItemId::parse(raw).ok_or_else(|| ApiError::NotFound(raw.to_string()))
}

/// Handler for POST /items/
pub async fn create_item(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>)> {
    let Json(data) = payload?;
    let new_item = validate_create(&data).map_err(ApiError::Validation)?;

    let item = state.store.insert(new_item).await?;
    info!(id = %item.id, name = %item.name, "item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Handler for GET /items/:id/
///
/// Serves from the cache when possible; a miss loads from the store and
/// populates the cache.
pub async fn read_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Item>> {
    let id = parse_id(&raw_id)?;
    let key = cache_key(id);

    if let Some(item) = state.cache.get(&key).await {
        debug!(%id, "cache hit");
        return Ok(Json(item));
    }

    debug!(%id, "cache miss");
    let item = fetch_item(state.store.as_ref(), id).await?;
    state.cache.set(&key, item.clone(), state.cache_ttl).await;

    Ok(Json(item))
}

/// Handler for PUT /items/:id/
///
/// Applies a partial update. The cache entry is invalidated before the
/// response is returned.
pub async fn update_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Item>> {
    let id = parse_id(&raw_id)?;
    let item = fetch_item(state.store.as_ref(), id).await?;

    let Json(data) = payload?;
    let changes = validate_update(&data).map_err(ApiError::Validation)?;

    let updated = state.store.update(item.apply(changes)).await?;
    state.cache.delete(&cache_key(id)).await;
    info!(%id, "item updated");

    Ok(Json(updated))
}

/// Handler for DELETE /items/:id/
pub async fn delete_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&raw_id)?;
    fetch_item(state.store.as_ref(), id).await?;

    if !state.store.delete(id).await? {
        // Removed by a concurrent request after the lookup
        return Err(ApiError::NotFound(id.to_string()));
    }
    state.cache.delete(&cache_key(id)).await;
    info!(%id, "item deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
