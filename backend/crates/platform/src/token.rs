//! Access Token Infrastructure
//!
//! Signed, time-bounded bearer tokens carrying caller identity and role.
//! Tokens are stateless: every privileged call is verified from the token
//! alone, no session state is kept server-side.
//!
//! Verification fails closed: any parse, signature, or expiry error yields
//! `None`, never an error that could leak why the token was rejected.

use axum::http::{HeaderMap, header};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default token validity window (24 hours)
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 24 * 3600;

/// Role code carried in admin claims
pub const ADMIN_ROLE_CODE: &str = "admin";

/// Claims embedded in an access token
///
/// `sub` is the numeric user id; `role` is the role code at issuance time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: user id
    pub sub: i64,
    /// Email at issuance time
    pub email: String,
    /// Role code ("client" / "admin")
    pub role: String,
    /// Issued-at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

impl AccessClaims {
    /// Whether these claims carry the admin role
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE_CODE
    }
}

/// Token signing errors
///
/// Signing only fails on an unexpected crypto/serialization error; it is
/// treated as fatal by callers (500-class).
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to sign access token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// HS256 access-token service
///
/// Owns the signing/verification keys and the validity window. Constructed
/// once at startup and shared via `Arc`.
#[derive(Clone)]
pub struct AccessTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl AccessTokenService {
    /// Create a service with an explicit validity window
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Create a service with the default 24-hour validity window
    pub fn with_default_ttl(secret: &[u8]) -> Self {
        Self::new(secret, Duration::seconds(DEFAULT_TOKEN_TTL_SECS))
    }

    /// Issue a signed token for the given identity
    pub fn issue(&self, user_id: i64, email: &str, role: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: user_id,
            email: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verify a token and return its claims
    ///
    /// Fails closed: `None` for anything that is not a well-formed,
    /// correctly signed, unexpired token.
    pub fn verify(&self, token: &str) -> Option<AccessClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        // The validity window is exactly the configured TTL
        validation.leeway = 0;

        decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .ok()
            .map(|data| data.claims)
    }
}

/// Extract the bearer token from an `Authorization` header
///
/// Expected format: `Authorization: Bearer <token>`
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn service() -> AccessTokenService {
        AccessTokenService::with_default_ttl(b"test-secret")
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let svc = service();
        let token = svc.issue(7, "a@b.com", "client").unwrap();

        let claims = svc.verify(&token).expect("token should verify");
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.role, "client");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        // Negative TTL: the token is already past its validity window
        let svc = AccessTokenService::new(b"test-secret", Duration::seconds(-10));
        let token = svc.issue(7, "a@b.com", "client").unwrap();

        assert!(svc.verify(&token).is_none());
    }

    #[test]
    fn test_wrong_key_is_invalid() {
        let svc = service();
        let token = svc.issue(7, "a@b.com", "client").unwrap();

        let other = AccessTokenService::with_default_ttl(b"different-secret");
        assert!(other.verify(&token).is_none());
    }

    #[test]
    fn test_garbage_is_invalid() {
        let svc = service();
        assert!(svc.verify("not-a-token").is_none());
        assert!(svc.verify("").is_none());
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let svc = service();
        let token = svc.issue(7, "a@b.com", "client").unwrap();

        let mut tampered = token.clone();
        // Flip a character in the payload segment
        let mid = token.len() / 2;
        tampered.replace_range(mid..mid + 1, if &token[mid..mid + 1] == "A" { "B" } else { "A" });
        assert!(svc.verify(&tampered).is_none());
    }

    #[test]
    fn test_is_admin() {
        let svc = service();
        let token = svc.issue(1, "admin@example.com", "admin").unwrap();
        let claims = svc.verify(&token).unwrap();
        assert!(claims.is_admin());

        let token = svc.issue(2, "user@example.com", "client").unwrap();
        let claims = svc.verify(&token).unwrap();
        assert!(!claims.is_admin());
    }

    #[test]
    fn test_extract_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(extract_bearer(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_bearer_missing_or_malformed() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(extract_bearer(&headers), None);
    }
}
