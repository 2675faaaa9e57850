//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::token::AccessClaims;

use crate::application::config::ShipmentConfig;
use crate::application::{
    CreateShipmentInput, CreateShipmentUseCase, ListAllShipmentsUseCase, ListShipmentsUseCase,
    TrackShipmentUseCase, UpdateStatusUseCase,
};
use crate::domain::repository::ShipmentRepository;
use crate::domain::value_object::shipment_id::{ShipmentId, UserId};
use crate::error::ShipmentResult;
use crate::presentation::dto::{
    AdminShipmentResponse, CreateShipmentRequest, ShipmentResponse, UpdateStatusRequest,
};

/// Shared state for shipment handlers
#[derive(Clone)]
pub struct ShipmentAppState<R>
where
    R: ShipmentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ShipmentConfig>,
}

// ============================================================================
// Create Shipment
// ============================================================================

/// POST /api/shipments
///
/// Requires `require_auth`; the claims arrive via request extensions.
pub async fn create_shipment<R>(
    State(state): State<ShipmentAppState<R>>,
    Extension(claims): Extension<AccessClaims>,
    Json(req): Json<CreateShipmentRequest>,
) -> ShipmentResult<impl IntoResponse>
where
    R: ShipmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateShipmentUseCase::new(state.repo.clone(), state.config.clone());

    let input = CreateShipmentInput {
        sender: req.sender.into(),
        recipient: req.recipient.into(),
        weight: req.package.weight,
        length: req.package.length,
        width: req.package.width,
        height: req.package.height,
        package_type: req.package.package_type,
        description: req.package.description,
        declared_value: req.package.declared_value,
        shipping_method: req.shipping.shipping_method,
        insurance: req.shipping.insurance,
        signature_required: req.shipping.signature_required,
        shipping_cost: req.shipping.shipping_cost,
        estimated_delivery_date: req.shipping.estimated_delivery_date,
    };

    let shipment = use_case.execute(&claims, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShipmentResponse::from(&shipment)),
    ))
}

// ============================================================================
// List For User
// ============================================================================

/// GET /api/shipments/user/{user_id}
pub async fn list_for_user<R>(
    State(state): State<ShipmentAppState<R>>,
    Extension(claims): Extension<AccessClaims>,
    Path(user_id): Path<i64>,
) -> ShipmentResult<Json<Vec<ShipmentResponse>>>
where
    R: ShipmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListShipmentsUseCase::new(state.repo.clone());

    let shipments = use_case
        .execute(&claims, UserId::from_i64(user_id))
        .await?;

    Ok(Json(
        shipments.iter().map(ShipmentResponse::from).collect(),
    ))
}

// ============================================================================
// Track
// ============================================================================

/// GET /api/shipments/track/{tracking_number}
///
/// Public: anyone holding a tracking number may look it up.
pub async fn track<R>(
    State(state): State<ShipmentAppState<R>>,
    Path(tracking_number): Path<String>,
) -> ShipmentResult<Json<ShipmentResponse>>
where
    R: ShipmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = TrackShipmentUseCase::new(state.repo.clone());

    let shipment = use_case.execute(&tracking_number).await?;

    Ok(Json(ShipmentResponse::from(&shipment)))
}

// ============================================================================
// Admin: List All
// ============================================================================

/// GET /api/admin/shipments
pub async fn admin_list_all<R>(
    State(state): State<ShipmentAppState<R>>,
    Extension(claims): Extension<AccessClaims>,
) -> ShipmentResult<Json<Vec<AdminShipmentResponse>>>
where
    R: ShipmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListAllShipmentsUseCase::new(state.repo.clone());

    let shipments = use_case.execute(&claims).await?;

    Ok(Json(
        shipments.iter().map(AdminShipmentResponse::from).collect(),
    ))
}

// ============================================================================
// Admin: Update Status
// ============================================================================

/// PATCH /api/admin/shipments/{id}/status
pub async fn admin_update_status<R>(
    State(state): State<ShipmentAppState<R>>,
    Extension(claims): Extension<AccessClaims>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> ShipmentResult<Json<ShipmentResponse>>
where
    R: ShipmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateStatusUseCase::new(state.repo.clone());

    let shipment = use_case
        .execute(&claims, ShipmentId::from_i64(id), &req.status)
        .await?;

    Ok(Json(ShipmentResponse::from(&shipment)))
}
