//! List All Shipments Use Case
//!
//! Admin-only listing across every user, joined with minimal owner display
//! fields.

use std::sync::Arc;

use platform::token::AccessClaims;

use crate::domain::entity::shipment::ShipmentWithOwner;
use crate::domain::repository::ShipmentRepository;
use crate::error::{ShipmentError, ShipmentResult};

/// List all shipments use case
pub struct ListAllShipmentsUseCase<S>
where
    S: ShipmentRepository,
{
    shipment_repo: Arc<S>,
}

impl<S> ListAllShipmentsUseCase<S>
where
    S: ShipmentRepository,
{
    pub fn new(shipment_repo: Arc<S>) -> Self {
        Self { shipment_repo }
    }

    pub async fn execute(&self, caller: &AccessClaims) -> ShipmentResult<Vec<ShipmentWithOwner>> {
        if !caller.is_admin() {
            return Err(ShipmentError::AdminRequired);
        }

        self.shipment_repo.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::ShipmentConfig;
    use crate::application::create_shipment::CreateShipmentUseCase;
    use crate::application::test_support::{
        InMemoryShipmentRepository, admin_claims, client_claims, valid_create_input,
    };

    #[tokio::test]
    async fn test_admin_sees_all_shipments_with_owner_fields() {
        let repo = Arc::new(InMemoryShipmentRepository::new());
        repo.put_owner(7, "Alice", "alice@example.com");
        repo.put_owner(8, "Bob", "bob@example.com");

        let create = CreateShipmentUseCase::new(repo.clone(), Arc::new(ShipmentConfig::default()));
        create
            .execute(&client_claims(7), valid_create_input())
            .await
            .unwrap();
        create
            .execute(&client_claims(8), valid_create_input())
            .await
            .unwrap();

        let uc = ListAllShipmentsUseCase::new(repo);
        let all = uc.execute(&admin_claims(1)).await.unwrap();

        assert_eq!(all.len(), 2);
        // Newest-created first
        assert!(all[0].shipment.created_at > all[1].shipment.created_at);
        assert_eq!(all[0].owner_name.as_deref(), Some("Bob"));
        assert_eq!(all[1].owner_email.as_deref(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn test_client_caller_is_forbidden() {
        let uc = ListAllShipmentsUseCase::new(Arc::new(InMemoryShipmentRepository::new()));
        let err = uc.execute(&client_claims(7)).await.unwrap_err();
        assert!(matches!(err, ShipmentError::AdminRequired));
    }
}
