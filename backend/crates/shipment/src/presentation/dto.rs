//! API DTOs (Data Transfer Objects)
//!
//! Requests use explicit typed blocks (sender / recipient / package /
//! shipping) rather than one flat bag of fields. Request fields default to
//! empty so the use case can report every violation in a single validation
//! error.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::shipment::{PackageDetails, Shipment, ShipmentWithOwner, ShippingOptions};
use crate::domain::value_object::party::Party;

// ============================================================================
// Blocks
// ============================================================================

/// Contact + address block for one side of a shipment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyDto {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl From<PartyDto> for Party {
    fn from(dto: PartyDto) -> Self {
        Party {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            zip: dto.zip,
            country: dto.country,
        }
    }
}

impl From<&Party> for PartyDto {
    fn from(party: &Party) -> Self {
        PartyDto {
            name: party.name.clone(),
            email: party.email.clone(),
            phone: party.phone.clone(),
            address: party.address.clone(),
            city: party.city.clone(),
            state: party.state.clone(),
            zip: party.zip.clone(),
            country: party.country.clone(),
        }
    }
}

/// Physical package attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageDto {
    pub weight: f64,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub package_type: String,
    pub description: String,
    pub declared_value: Option<f64>,
}

impl From<&PackageDetails> for PackageDto {
    fn from(package: &PackageDetails) -> Self {
        PackageDto {
            weight: package.weight,
            length: package.length,
            width: package.width,
            height: package.height,
            package_type: package.package_type.clone(),
            description: package.description.clone(),
            declared_value: package.declared_value,
        }
    }
}

/// Selected shipping options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingDto {
    pub shipping_method: String,
    pub insurance: bool,
    pub signature_required: bool,
    pub shipping_cost: f64,
    pub estimated_delivery_date: Option<NaiveDate>,
}

impl From<&ShippingOptions> for ShippingDto {
    fn from(shipping: &ShippingOptions) -> Self {
        ShippingDto {
            shipping_method: shipping.method.code().to_string(),
            insurance: shipping.insurance,
            signature_required: shipping.signature_required,
            shipping_cost: shipping.shipping_cost,
            estimated_delivery_date: shipping.estimated_delivery_date,
        }
    }
}

// ============================================================================
// Create Shipment
// ============================================================================

/// Create shipment request
///
/// There is deliberately no owner field: ownership comes from the verified
/// bearer token, never from the body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateShipmentRequest {
    pub sender: PartyDto,
    pub recipient: PartyDto,
    pub package: PackageDto,
    pub shipping: ShippingDto,
}

// ============================================================================
// Update Status
// ============================================================================

/// Update status request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Full shipment response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentResponse {
    pub id: i64,
    pub tracking_number: String,
    pub user_id: i64,
    pub sender: PartyDto,
    pub recipient: PartyDto,
    pub package: PackageDto,
    pub shipping: ShippingDto,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Shipment> for ShipmentResponse {
    fn from(shipment: &Shipment) -> Self {
        Self {
            id: shipment.shipment_id.as_i64(),
            tracking_number: shipment.tracking_number.as_str().to_string(),
            user_id: shipment.owner.as_i64(),
            sender: PartyDto::from(&shipment.sender),
            recipient: PartyDto::from(&shipment.recipient),
            package: PackageDto::from(&shipment.package),
            shipping: ShippingDto::from(&shipment.shipping),
            status: shipment.status.code().to_string(),
            created_at: shipment.created_at,
            updated_at: shipment.updated_at,
        }
    }
}

/// Shipment joined with owner display fields (admin listing)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminShipmentResponse {
    #[serde(flatten)]
    pub shipment: ShipmentResponse,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}

impl From<&ShipmentWithOwner> for AdminShipmentResponse {
    fn from(row: &ShipmentWithOwner) -> Self {
        Self {
            shipment: ShipmentResponse::from(&row.shipment),
            owner_name: row.owner_name.clone(),
            owner_email: row.owner_email.clone(),
        }
    }
}
