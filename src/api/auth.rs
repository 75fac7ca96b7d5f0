//! Bearer token authentication
//!
//! Applied as a route layer over the item endpoints so handlers never see an
//! unauthenticated request.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::error::{ApiError, Result};

/// Accepted bearer tokens.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    tokens: Arc<HashSet<String>>,
}

impl AuthState {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: Arc::new(tokens.into_iter().map(Into::into).collect()),
        }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.api_tokens.iter().cloned())
    }

    pub fn accepts(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

/// Rejects requests without a known `Authorization: Bearer <token>` header.
pub async fn require_bearer(
    State(auth): State<AuthState>,
    req: Request,
    next: Next,
) -> Result<Response> {
    let accepted = extract_bearer(req.headers()).and_then(|token| {
        if auth.accepts(token) {
            Ok(())
        } else {
            Err(ApiError::Unauthorized("invalid token".to_string()))
        }
    });

    if let Err(e) = accepted {
        warn!(method = %req.method(), uri = %req.uri(), "{}", e);
        return Err(e);
    }

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("missing credentials".to_string()))?;

    // Auth scheme names are case-insensitive
    let token = header
        .to_str()
        .ok()
        .and_then(|h| h.trim_start().split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
        .map(|(_, token)| token.trim())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("malformed authorization header".to_string()))?;

    Ok(token)
}
