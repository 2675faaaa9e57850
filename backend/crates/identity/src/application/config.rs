//! Application Configuration
//!
//! Configuration for the Identity application layer.

use chrono::Duration;
use platform::token::{AccessTokenService, DEFAULT_TOKEN_TTL_SECS};

/// Identity application configuration
#[derive(Clone)]
pub struct IdentityConfig {
    /// Secret for signing access tokens
    pub token_secret: Vec<u8>,
    /// Token validity window in seconds (24 hours)
    pub token_ttl_secs: i64,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            token_secret: vec![0u8; 32],
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            password_pepper: None,
        }
    }
}

impl IdentityConfig {
    /// Create config from an externally supplied signing secret
    pub fn from_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_bytes(32),
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Build the token service for this configuration
    pub fn token_service(&self) -> AccessTokenService {
        AccessTokenService::new(&self.token_secret, Duration::seconds(self.token_ttl_secs))
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
