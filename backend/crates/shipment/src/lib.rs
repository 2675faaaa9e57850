//! Shipment Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Shipment creation with tracking-number assignment
//! - Per-user shipment listing (newest first)
//! - Public tracking by tracking number
//! - Admin listing across all users and status updates
//!
//! ## Model
//! - A shipment is owned by exactly one user; ownership is stamped from the
//!   authenticated caller, never from the request body
//! - The tracking number is assigned exactly once, at creation
//! - Status transitions happen only through the explicit update operation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::ShipmentConfig;
pub use error::{ShipmentError, ShipmentResult};
pub use infra::postgres::PgShipmentRepository;
pub use presentation::router::{admin_router, shipment_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgShipmentRepository as ShipmentStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
