//! Shipment Entity
//!
//! Ids are store-assigned, so the entity comes in two forms:
//! [`NewShipment`] (pre-insert, no id or timestamps) and [`Shipment`]
//! (the stored row).

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::value_object::{
    party::Party,
    shipment_id::{ShipmentId, UserId},
    shipment_status::ShipmentStatus,
    shipping_method::ShippingMethod,
    tracking_number::TrackingNumber,
};

/// Physical package attributes
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDetails {
    /// Weight in kg; must be > 0
    pub weight: f64,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub package_type: String,
    pub description: String,
    pub declared_value: Option<f64>,
}

/// Selected shipping options
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingOptions {
    pub method: ShippingMethod,
    pub insurance: bool,
    pub signature_required: bool,
    pub shipping_cost: f64,
    pub estimated_delivery_date: Option<NaiveDate>,
}

/// A shipment record as it exists before insertion
///
/// The tracking number is already assigned here: exactly once, never
/// changed afterwards. The owner comes from the authenticated caller.
#[derive(Debug, Clone)]
pub struct NewShipment {
    pub owner: UserId,
    pub tracking_number: TrackingNumber,
    pub sender: Party,
    pub recipient: Party,
    pub package: PackageDetails,
    pub shipping: ShippingOptions,
    pub status: ShipmentStatus,
}

/// A stored shipment row
#[derive(Debug, Clone)]
pub struct Shipment {
    /// Store-assigned identifier
    pub shipment_id: ShipmentId,
    pub owner: UserId,
    pub tracking_number: TrackingNumber,
    pub sender: Party,
    pub recipient: Party,
    pub package: PackageDetails,
    pub shipping: ShippingOptions,
    pub status: ShipmentStatus,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every status change
    pub updated_at: DateTime<Utc>,
}

/// A shipment joined with minimal owner display fields (admin listing)
///
/// Owner fields are optional: the join is a LEFT JOIN, a dangling owner
/// must not hide the shipment from the admin view.
#[derive(Debug, Clone)]
pub struct ShipmentWithOwner {
    pub shipment: Shipment,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}
