//! Identity Middleware
//!
//! The authentication half of the access gate: every privileged route is
//! verified from the bearer token alone, no server-side session state.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::token::{AccessTokenService, extract_bearer};

use crate::application::config::IdentityConfig;
use crate::error::IdentityError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState {
    pub tokens: Arc<AccessTokenService>,
}

impl AuthGateState {
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            tokens: Arc::new(config.token_service()),
        }
    }
}

/// Middleware that requires a valid bearer token
///
/// - Missing `Authorization` header: 401 Unauthorized
/// - Present but failing verification: 403 Forbidden
///
/// On success the decoded claims are attached to the request extensions for
/// downstream handlers.
pub async fn require_auth(
    State(gate): State<AuthGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = match extract_bearer(req.headers()) {
        Some(token) => token,
        None => return Err(IdentityError::MissingToken.into_response()),
    };

    let claims = match gate.tokens.verify(token) {
        Some(claims) => claims,
        None => return Err(IdentityError::InvalidToken.into_response()),
    };

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
