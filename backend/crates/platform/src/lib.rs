//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random secrets, Base64)
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Access-token issuance and verification (signed bearer tokens)

pub mod crypto;
pub mod password;
pub mod token;
