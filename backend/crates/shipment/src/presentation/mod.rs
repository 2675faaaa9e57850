//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::ShipmentAppState;
pub use middleware::{AuthGateState, require_admin, require_auth};
pub use router::{admin_router, admin_router_generic, shipment_router, shipment_router_generic};
