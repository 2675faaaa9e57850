//! Shipment Middleware
//!
//! The access gate applied to shipment routes. Two checks, in order:
//! authentication (valid bearer token) and, for admin routes,
//! authorization (role == admin).

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::token::{AccessClaims, AccessTokenService, extract_bearer};

use crate::error::ShipmentError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState {
    pub tokens: Arc<AccessTokenService>,
}

impl AuthGateState {
    pub fn new(tokens: AccessTokenService) -> Self {
        Self {
            tokens: Arc::new(tokens),
        }
    }
}

/// Middleware that requires a valid bearer token
///
/// - Missing `Authorization` header: 401 Unauthorized
/// - Present but failing verification: 403 Forbidden
///
/// On success the decoded claims are attached to the request extensions for
/// downstream middleware and handlers.
pub async fn require_auth(
    State(gate): State<AuthGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = match extract_bearer(req.headers()) {
        Some(token) => token,
        None => return Err(ShipmentError::MissingToken.into_response()),
    };

    let claims = match gate.tokens.verify(token) {
        Some(claims) => claims,
        None => return Err(ShipmentError::InvalidToken.into_response()),
    };

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Middleware that requires the admin role
///
/// Runs after `require_auth`; reads the claims it attached. A missing
/// extension means the auth check never ran, which is rejected the same
/// way as a missing token.
pub async fn require_admin(
    State(_gate): State<AuthGateState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let claims = match req.extensions().get::<AccessClaims>() {
        Some(claims) => claims,
        None => return Err(ShipmentError::MissingToken.into_response()),
    };

    if !claims.is_admin() {
        return Err(ShipmentError::AdminRequired.into_response());
    }

    Ok(next.run(req).await)
}
