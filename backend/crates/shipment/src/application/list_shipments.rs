//! List Shipments Use Case
//!
//! Lists a user's shipments, newest-created first. A client may only list
//! their own; an admin may list anyone's.

use std::sync::Arc;

use platform::token::AccessClaims;

use crate::domain::entity::shipment::Shipment;
use crate::domain::repository::ShipmentRepository;
use crate::domain::value_object::shipment_id::UserId;
use crate::error::{ShipmentError, ShipmentResult};

/// List shipments use case
pub struct ListShipmentsUseCase<S>
where
    S: ShipmentRepository,
{
    shipment_repo: Arc<S>,
}

impl<S> ListShipmentsUseCase<S>
where
    S: ShipmentRepository,
{
    pub fn new(shipment_repo: Arc<S>) -> Self {
        Self { shipment_repo }
    }

    pub async fn execute(
        &self,
        caller: &AccessClaims,
        user_id: UserId,
    ) -> ShipmentResult<Vec<Shipment>> {
        if caller.sub != user_id.as_i64() && !caller.is_admin() {
            return Err(ShipmentError::OwnerOnly);
        }

        self.shipment_repo.list_by_user(&user_id).await
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

    async fn seeded_repo() -> Arc<InMemoryShipmentRepository> {
        let repo = Arc::new(InMemoryShipmentRepository::new());
        let create = CreateShipmentUseCase::new(repo.clone(), Arc::new(ShipmentConfig::default()));

        // Two shipments for user 7 (t1 then t2), one for user 8
        create
            .execute(&client_claims(7), valid_create_input())
            .await
            .unwrap();
        create
            .execute(&client_claims(7), valid_create_input())
            .await
            .unwrap();
        create
            .execute(&client_claims(8), valid_create_input())
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_list_returns_only_own_shipments_newest_first() {
        let repo = seeded_repo().await;
        let uc = ListShipmentsUseCase::new(repo);

        let shipments = uc
            .execute(&client_claims(7), UserId::from_i64(7))
            .await
            .unwrap();

        assert_eq!(shipments.len(), 2);
        assert!(shipments.iter().all(|s| s.owner.as_i64() == 7));
        // The shipment created at t2 comes before the one created at t1
        assert!(shipments[0].created_at > shipments[1].created_at);
    }

    #[tokio::test]
    async fn test_list_for_other_user_is_forbidden() {
        let repo = seeded_repo().await;
        let uc = ListShipmentsUseCase::new(repo);

        let err = uc
            .execute(&client_claims(7), UserId::from_i64(8))
            .await
            .unwrap_err();
        assert!(matches!(err, ShipmentError::OwnerOnly));
    }

    #[tokio::test]
    async fn test_admin_may_list_any_user() {
        let repo = seeded_repo().await;
        let uc = ListShipmentsUseCase::new(repo);

        let shipments = uc
            .execute(&admin_claims(1), UserId::from_i64(8))
            .await
            .unwrap();
        assert_eq!(shipments.len(), 1);
    }

    #[tokio::test]
    async fn test_list_for_user_without_shipments_is_empty() {
        let repo = seeded_repo().await;
        let uc = ListShipmentsUseCase::new(repo);

        let shipments = uc
            .execute(&client_claims(9), UserId::from_i64(9))
            .await
            .unwrap();
        assert!(shipments.is_empty());
    }
}
