//! User Entity
//!
//! A single `users` row carries the profile, the password hash, and the
//! role. The hash never leaves this crate through a DTO.
//!
//! Ids are store-assigned, so the entity comes in two forms: [`NewUser`]
//! (pre-insert, no id or timestamps) and [`User`] (the stored row).

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::UserPassword, user_role::UserRole,
};

/// A user record as it exists before insertion
#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub password_hash: UserPassword,
    pub address: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

impl NewUser {
    /// Build a registration record
    ///
    /// Role is fixed to `Client`; there is no path that registers an admin.
    pub fn register(
        name: impl Into<String>,
        email: Email,
        password_hash: UserPassword,
        address: impl Into<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email,
            password_hash,
            address: address.into(),
            phone,
            role: UserRole::Client,
        }
        .normalized()
    }

    fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.address = self.address.trim().to_string();
        self.phone = self
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        self
    }
}

/// A stored user row
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier
    pub user_id: UserId,
    pub name: String,
    pub email: Email,
    /// Argon2id hash; excluded from every outward representation
    pub password_hash: UserPassword,
    pub address: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether this user may perform admin-restricted operations
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
