//! Track Shipment Use Case
//!
//! Public exact-match lookup by tracking number. Case sensitivity follows
//! the storage collation; nothing is normalized here.

use std::sync::Arc;

use crate::domain::entity::shipment::Shipment;
use crate::domain::repository::ShipmentRepository;
use crate::error::{ShipmentError, ShipmentResult};

/// Track shipment use case
pub struct TrackShipmentUseCase<S>
where
    S: ShipmentRepository,
{
    shipment_repo: Arc<S>,
}

impl<S> TrackShipmentUseCase<S>
where
    S: ShipmentRepository,
{
    pub fn new(shipment_repo: Arc<S>) -> Self {
        Self { shipment_repo }
    }

    pub async fn execute(&self, tracking_number: &str) -> ShipmentResult<Shipment> {
        self.shipment_repo
            .find_by_tracking(tracking_number)
            .await?
            .ok_or(ShipmentError::NotFound)
    }
}
