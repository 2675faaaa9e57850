//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::shipment::{NewShipment, Shipment, ShipmentWithOwner};
use crate::domain::value_object::{
    shipment_id::{ShipmentId, UserId},
    shipment_status::ShipmentStatus,
};
use crate::error::ShipmentResult;

/// Shipment repository trait
#[trait_variant::make(ShipmentRepository: Send)]
pub trait LocalShipmentRepository {
    /// Persist a new shipment and return the stored row (id and timestamps
    /// assigned by the store)
    async fn create(&self, shipment: &NewShipment) -> ShipmentResult<Shipment>;

    /// All shipments owned by a user, newest-created first
    async fn list_by_user(&self, user_id: &UserId) -> ShipmentResult<Vec<Shipment>>;

    /// Exact-match lookup by tracking number
    async fn find_by_tracking(&self, tracking_number: &str) -> ShipmentResult<Option<Shipment>>;

    /// All shipments joined with owner display fields, newest-created first
    async fn list_all(&self) -> ShipmentResult<Vec<ShipmentWithOwner>>;

    /// Overwrite the status and refresh `updated_at`
    ///
    /// Returns `None` when no shipment has the given id.
    async fn update_status(
        &self,
        shipment_id: &ShipmentId,
        status: ShipmentStatus,
    ) -> ShipmentResult<Option<Shipment>>;
}
