//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Register
// ============================================================================

/// Register request
///
/// Fields default to empty so the use case can report every missing field
/// in a single validation error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Responses
// ============================================================================

/// User profile response
///
/// The password hash is not represented here at all.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id.as_i64(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            address: user.address.clone(),
            phone: user.phone.clone(),
            role: user.role.code().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Register / login response: the user plus its bearer token
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_defaults_missing_fields() {
        let req: RegisterRequest = serde_json::from_str(r#"{"name":"Alice"}"#).unwrap();
        assert_eq!(req.name, "Alice");
        assert_eq!(req.email, "");
        assert_eq!(req.password, "");
        assert_eq!(req.phone, None);
    }

    #[test]
    fn test_user_response_is_camel_case_and_has_no_password() {
        let response = UserResponse {
            user_id: 7,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            address: "1 Main St".to_string(),
            phone: None,
            role: "client".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"userId\":7"));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.to_lowercase().contains("password"));
    }
}
