//! Shipment Routers

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch, post},
};
use std::sync::Arc;

use platform::token::AccessTokenService;

use crate::application::config::ShipmentConfig;
use crate::domain::repository::ShipmentRepository;
use crate::infra::postgres::PgShipmentRepository;
use crate::presentation::handlers::{self, ShipmentAppState};
use crate::presentation::middleware::{AuthGateState, require_admin, require_auth};

/// Create the shipment router with PostgreSQL repository
pub fn shipment_router(
    repo: PgShipmentRepository,
    config: ShipmentConfig,
    tokens: AccessTokenService,
) -> Router {
    shipment_router_generic(repo, config, tokens)
}

/// Create a generic shipment router for any repository implementation
pub fn shipment_router_generic<R>(
    repo: R,
    config: ShipmentConfig,
    tokens: AccessTokenService,
) -> Router
where
    R: ShipmentRepository + Clone + Send + Sync + 'static,
{
    let state = ShipmentAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };
    let gate = AuthGateState::new(tokens);

    Router::new()
        .route("/", post(handlers::create_shipment::<R>))
        .route("/user/{user_id}", get(handlers::list_for_user::<R>))
        .route_layer(from_fn_with_state(gate, require_auth))
        .route("/track/{tracking_number}", get(handlers::track::<R>))
        .with_state(state)
}

/// Create the admin router with PostgreSQL repository
pub fn admin_router(
    repo: PgShipmentRepository,
    config: ShipmentConfig,
    tokens: AccessTokenService,
) -> Router {
    admin_router_generic(repo, config, tokens)
}

/// Create a generic admin router for any repository implementation
pub fn admin_router_generic<R>(
    repo: R,
    config: ShipmentConfig,
    tokens: AccessTokenService,
) -> Router
where
    R: ShipmentRepository + Clone + Send + Sync + 'static,
{
    let state = ShipmentAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };
    let gate = AuthGateState::new(tokens);

    Router::new()
        .route("/shipments", get(handlers::admin_list_all::<R>))
        .route(
            "/shipments/{id}/status",
            patch(handlers::admin_update_status::<R>),
        )
        // Layers wrap outside-in: require_auth (added last) runs first,
        // then require_admin reads the claims it attached
        .route_layer(from_fn_with_state(gate.clone(), require_admin))
        .route_layer(from_fn_with_state(gate, require_auth))
        .with_state(state)
}
