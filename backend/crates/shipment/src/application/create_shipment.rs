//! Create Shipment Use Case
//!
//! Validates the request, assigns the tracking number, and persists the
//! shipment with the caller stamped as owner.

use std::sync::Arc;

use chrono::NaiveDate;
use platform::token::AccessClaims;

use crate::application::config::ShipmentConfig;
use crate::domain::entity::shipment::{NewShipment, PackageDetails, Shipment, ShippingOptions};
use crate::domain::repository::ShipmentRepository;
use crate::domain::value_object::{
    party::Party, shipment_id::UserId, shipment_status::ShipmentStatus,
    shipping_method::ShippingMethod, tracking_number::TrackingNumber,
};
use crate::error::{ShipmentError, ShipmentResult};

/// Create shipment input
///
/// The sender block is the caller-supplied snapshot of their profile.
/// The owner id is NOT part of the input; it always comes from the
/// verified claims.
pub struct CreateShipmentInput {
    pub sender: Party,
    pub recipient: Party,
    pub weight: f64,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub package_type: String,
    pub description: String,
    pub declared_value: Option<f64>,
    pub shipping_method: String,
    pub insurance: bool,
    pub signature_required: bool,
    pub shipping_cost: f64,
    pub estimated_delivery_date: Option<NaiveDate>,
}

/// Create shipment use case
pub struct CreateShipmentUseCase<S>
where
    S: ShipmentRepository,
{
    shipment_repo: Arc<S>,
    config: Arc<ShipmentConfig>,
}

impl<S> CreateShipmentUseCase<S>
where
    S: ShipmentRepository,
{
    pub fn new(shipment_repo: Arc<S>, config: Arc<ShipmentConfig>) -> Self {
        Self {
            shipment_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        caller: &AccessClaims,
        input: CreateShipmentInput,
    ) -> ShipmentResult<Shipment> {
        // Every violation is reported in one response, not just the first
        let mut violations = input.recipient.missing_required_fields("recipient");

        // `> 0.0` is false for NaN as well as zero and negatives
        if !(input.weight > 0.0) {
            violations.push("weight".to_string());
        }
        if input.description.trim().is_empty() {
            violations.push("description".to_string());
        }

        let method = match ShippingMethod::from_code(&input.shipping_method) {
            Some(method) => Some(method),
            None => {
                violations.push("shippingMethod".to_string());
                None
            }
        };

        if !violations.is_empty() {
            return Err(ShipmentError::Validation(violations));
        }
        let method = method.expect("validated above");

        // Assigned exactly once; best-effort uniqueness, no store check
        let tracking_number = TrackingNumber::generate(&self.config.tracking_prefix);

        let new_shipment = NewShipment {
            owner: UserId::from_i64(caller.sub),
            tracking_number,
            sender: input.sender,
            recipient: input.recipient,
            package: PackageDetails {
                weight: input.weight,
                length: input.length,
                width: input.width,
                height: input.height,
                package_type: input.package_type,
                description: input.description,
                declared_value: input.declared_value,
            },
            shipping: ShippingOptions {
                method,
                insurance: input.insurance,
                signature_required: input.signature_required,
                shipping_cost: input.shipping_cost,
                estimated_delivery_date: input.estimated_delivery_date,
            },
            status: ShipmentStatus::Pending,
        };

        let shipment = self.shipment_repo.create(&new_shipment).await?;

        tracing::info!(
            shipment_id = %shipment.shipment_id,
            tracking_number = %shipment.tracking_number,
            user_id = caller.sub,
            "Shipment created"
        );

        Ok(shipment)
    }
}
