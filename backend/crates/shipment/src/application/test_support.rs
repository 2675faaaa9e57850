//! In-memory repository fakes for use-case tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Duration, Utc};

use platform::token::AccessClaims;

use crate::application::create_shipment::CreateShipmentInput;
use crate::domain::entity::shipment::{NewShipment, Shipment, ShipmentWithOwner};
use crate::domain::repository::ShipmentRepository;
use crate::domain::value_object::{
    party::Party,
    shipment_id::{ShipmentId, UserId},
    shipment_status::ShipmentStatus,
};
use crate::error::ShipmentResult;

/// Claims for a client-role caller
pub fn client_claims(user_id: i64) -> AccessClaims {
    let now = Utc::now().timestamp();
    AccessClaims {
        sub: user_id,
        email: format!("user{}@example.com", user_id),
        role: "client".to_string(),
        iat: now,
        exp: now + 24 * 3600,
    }
}

/// Claims for an admin-role caller
pub fn admin_claims(user_id: i64) -> AccessClaims {
    AccessClaims {
        role: "admin".to_string(),
        ..client_claims(user_id)
    }
}

/// A complete contact block
pub fn party(name: &str) -> Party {
    Party {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        address: "2 Side St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip: "62701".to_string(),
        country: "US".to_string(),
    }
}

/// A create input that passes every validation check
pub fn valid_create_input() -> CreateShipmentInput {
    CreateShipmentInput {
        sender: party("Alice"),
        recipient: party("Bob"),
        weight: 2.5,
        length: Some(30.0),
        width: Some(20.0),
        height: None,
        package_type: "box".to_string(),
        description: "Books".to_string(),
        declared_value: Some(40.0),
        shipping_method: "standard".to_string(),
        insurance: false,
        signature_required: false,
        shipping_cost: 12.99,
        estimated_delivery_date: None,
    }
}

/// In-memory `ShipmentRepository` with store-assigned sequential ids
pub struct InMemoryShipmentRepository {
    shipments: Mutex<Vec<Shipment>>,
    owners: Mutex<HashMap<i64, (String, String)>>,
    next_id: AtomicI64,
}

impl InMemoryShipmentRepository {
    pub fn new() -> Self {
        Self {
            shipments: Mutex::new(Vec::new()),
            owners: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Register owner display fields for the admin listing join
    pub fn put_owner(&self, user_id: i64, name: &str, email: &str) {
        self.owners
            .lock()
            .unwrap()
            .insert(user_id, (name.to_string(), email.to_string()));
    }

    pub fn get(&self, shipment_id: i64) -> Option<Shipment> {
        self.shipments
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.shipment_id.as_i64() == shipment_id)
            .cloned()
    }
}

impl ShipmentRepository for InMemoryShipmentRepository {
    async fn create(&self, shipment: &NewShipment) -> ShipmentResult<Shipment> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        // Timestamps strictly increase with insertion order so that
        // created_at ordering is deterministic in tests
        let now = Utc::now() + Duration::milliseconds(id);

        let stored = Shipment {
            shipment_id: ShipmentId::from_i64(id),
            owner: shipment.owner,
            tracking_number: shipment.tracking_number.clone(),
            sender: shipment.sender.clone(),
            recipient: shipment.recipient.clone(),
            package: shipment.package.clone(),
            shipping: shipment.shipping.clone(),
            status: shipment.status,
            created_at: now,
            updated_at: now,
        };

        self.shipments.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_by_user(&self, user_id: &UserId) -> ShipmentResult<Vec<Shipment>> {
        let mut owned: Vec<Shipment> = self
            .shipments
            .lock()
            .unwrap()
            .iter()
            .filter(|s| &s.owner == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn find_by_tracking(&self, tracking_number: &str) -> ShipmentResult<Option<Shipment>> {
        Ok(self
            .shipments
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.tracking_number.as_str() == tracking_number)
            .cloned())
    }

    async fn list_all(&self) -> ShipmentResult<Vec<ShipmentWithOwner>> {
        let owners = self.owners.lock().unwrap();
        let mut all: Vec<ShipmentWithOwner> = self
            .shipments
            .lock()
            .unwrap()
            .iter()
            .map(|s| {
                let owner = owners.get(&s.owner.as_i64());
                ShipmentWithOwner {
                    shipment: s.clone(),
                    owner_name: owner.map(|(name, _)| name.clone()),
                    owner_email: owner.map(|(_, email)| email.clone()),
                }
            })
            .collect();
        all.sort_by(|a, b| b.shipment.created_at.cmp(&a.shipment.created_at));
        Ok(all)
    }

    async fn update_status(
        &self,
        shipment_id: &ShipmentId,
        status: ShipmentStatus,
    ) -> ShipmentResult<Option<Shipment>> {
        let mut shipments = self.shipments.lock().unwrap();
        match shipments
            .iter_mut()
            .find(|s| &s.shipment_id == shipment_id)
        {
            Some(shipment) => {
                shipment.status = status;
                shipment.updated_at = shipment.updated_at + Duration::milliseconds(1);
                Ok(Some(shipment.clone()))
            }
            None => Ok(None),
        }
    }
}
