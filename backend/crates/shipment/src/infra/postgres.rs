//! PostgreSQL Repository Implementations

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::domain::entity::shipment::{
    NewShipment, PackageDetails, Shipment, ShipmentWithOwner, ShippingOptions,
};
use crate::domain::repository::ShipmentRepository;
use crate::domain::value_object::{
    party::Party,
    shipment_id::{ShipmentId, UserId},
    shipment_status::ShipmentStatus,
    shipping_method::ShippingMethod,
    tracking_number::TrackingNumber,
};
use crate::error::ShipmentResult;

/// Column list shared by every query that reads a full shipment row
const SHIPMENT_COLUMNS: &str = "\
    id, user_id, tracking_number, \
    sender_name, sender_email, sender_phone, sender_address, \
    sender_city, sender_state, sender_zip, sender_country, \
    recipient_name, recipient_email, recipient_phone, recipient_address, \
    recipient_city, recipient_state, recipient_zip, recipient_country, \
    weight, length, width, height, package_type, description, declared_value, \
    shipping_method, insurance, signature_required, shipping_cost, \
    estimated_delivery_date, status, created_at, updated_at";

/// PostgreSQL-backed shipment repository
#[derive(Clone)]
pub struct PgShipmentRepository {
    pool: PgPool,
}

impl PgShipmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Shipment Repository Implementation
// ============================================================================

impl ShipmentRepository for PgShipmentRepository {
    async fn create(&self, shipment: &NewShipment) -> ShipmentResult<Shipment> {
        let sql = format!(
            r#"
            INSERT INTO shipments (
                user_id, tracking_number,
                sender_name, sender_email, sender_phone, sender_address,
                sender_city, sender_state, sender_zip, sender_country,
                recipient_name, recipient_email, recipient_phone, recipient_address,
                recipient_city, recipient_state, recipient_zip, recipient_country,
                weight, length, width, height, package_type, description, declared_value,
                shipping_method, insurance, signature_required, shipping_cost,
                estimated_delivery_date, status
            ) VALUES (
                $1, $2,
                $3, $4, $5, $6,
                $7, $8, $9, $10,
                $11, $12, $13, $14,
                $15, $16, $17, $18,
                $19, $20, $21, $22, $23, $24, $25,
                $26, $27, $28, $29,
                $30, $31
            )
            RETURNING {SHIPMENT_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, ShipmentRow>(&sql)
            .bind(shipment.owner.as_i64())
            .bind(shipment.tracking_number.as_str())
            .bind(&shipment.sender.name)
            .bind(&shipment.sender.email)
            .bind(&shipment.sender.phone)
            .bind(&shipment.sender.address)
            .bind(&shipment.sender.city)
            .bind(&shipment.sender.state)
            .bind(&shipment.sender.zip)
            .bind(&shipment.sender.country)
            .bind(&shipment.recipient.name)
            .bind(&shipment.recipient.email)
            .bind(&shipment.recipient.phone)
            .bind(&shipment.recipient.address)
            .bind(&shipment.recipient.city)
            .bind(&shipment.recipient.state)
            .bind(&shipment.recipient.zip)
            .bind(&shipment.recipient.country)
            .bind(shipment.package.weight)
            .bind(shipment.package.length)
            .bind(shipment.package.width)
            .bind(shipment.package.height)
            .bind(&shipment.package.package_type)
            .bind(&shipment.package.description)
            .bind(shipment.package.declared_value)
            .bind(shipment.shipping.method.code())
            .bind(shipment.shipping.insurance)
            .bind(shipment.shipping.signature_required)
            .bind(shipment.shipping.shipping_cost)
            .bind(shipment.shipping.estimated_delivery_date)
            .bind(shipment.status.code())
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into_shipment())
    }

    async fn list_by_user(&self, user_id: &UserId) -> ShipmentResult<Vec<Shipment>> {
        let sql = format!(
            r#"
            SELECT {SHIPMENT_COLUMNS}
            FROM shipments
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#
        );

        let rows = sqlx::query_as::<_, ShipmentRow>(&sql)
            .bind(user_id.as_i64())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ShipmentRow::into_shipment).collect())
    }

    async fn find_by_tracking(&self, tracking_number: &str) -> ShipmentResult<Option<Shipment>> {
        let sql = format!(
            r#"
            SELECT {SHIPMENT_COLUMNS}
            FROM shipments
            WHERE tracking_number = $1
            LIMIT 1
            "#
        );

        let row = sqlx::query_as::<_, ShipmentRow>(&sql)
            .bind(tracking_number)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ShipmentRow::into_shipment))
    }

    async fn list_all(&self) -> ShipmentResult<Vec<ShipmentWithOwner>> {
        // LEFT JOIN: a dangling owner must not hide the shipment
        let sql = format!(
            r#"
            SELECT
                s.*,
                u.name AS owner_name,
                u.email AS owner_email
            FROM (SELECT {SHIPMENT_COLUMNS} FROM shipments) s
            LEFT JOIN users u ON s.user_id = u.id
            ORDER BY s.created_at DESC
            "#
        );

        let rows = sqlx::query_as::<_, AdminShipmentRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(AdminShipmentRow::into_shipment_with_owner)
            .collect())
    }

    async fn update_status(
        &self,
        shipment_id: &ShipmentId,
        status: ShipmentStatus,
    ) -> ShipmentResult<Option<Shipment>> {
        let sql = format!(
            r#"
            UPDATE shipments
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING {SHIPMENT_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, ShipmentRow>(&sql)
            .bind(status.code())
            .bind(shipment_id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ShipmentRow::into_shipment))
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ShipmentRow {
    id: i64,
    user_id: i64,
    tracking_number: String,
    sender_name: String,
    sender_email: String,
    sender_phone: Option<String>,
    sender_address: String,
    sender_city: String,
    sender_state: String,
    sender_zip: String,
    sender_country: String,
    recipient_name: String,
    recipient_email: String,
    recipient_phone: Option<String>,
    recipient_address: String,
    recipient_city: String,
    recipient_state: String,
    recipient_zip: String,
    recipient_country: String,
    weight: f64,
    length: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    package_type: String,
    description: String,
    declared_value: Option<f64>,
    shipping_method: String,
    insurance: bool,
    signature_required: bool,
    shipping_cost: f64,
    estimated_delivery_date: Option<NaiveDate>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ShipmentRow {
    fn into_shipment(self) -> Shipment {
        let status = ShipmentStatus::from_code(&self.status).unwrap_or_else(|| {
            tracing::error!(
                status = %self.status,
                shipment_id = self.id,
                "Unknown status code in shipments row"
            );
            ShipmentStatus::default()
        });

        let method = ShippingMethod::from_code(&self.shipping_method).unwrap_or_else(|| {
            tracing::error!(
                shipping_method = %self.shipping_method,
                shipment_id = self.id,
                "Unknown shipping method in shipments row"
            );
            ShippingMethod::Standard
        });

        Shipment {
            shipment_id: ShipmentId::from_i64(self.id),
            owner: UserId::from_i64(self.user_id),
            tracking_number: TrackingNumber::from_db(self.tracking_number),
            sender: Party {
                name: self.sender_name,
                email: self.sender_email,
                phone: self.sender_phone,
                address: self.sender_address,
                city: self.sender_city,
                state: self.sender_state,
                zip: self.sender_zip,
                country: self.sender_country,
            },
            recipient: Party {
                name: self.recipient_name,
                email: self.recipient_email,
                phone: self.recipient_phone,
                address: self.recipient_address,
                city: self.recipient_city,
                state: self.recipient_state,
                zip: self.recipient_zip,
                country: self.recipient_country,
            },
            package: PackageDetails {
                weight: self.weight,
                length: self.length,
                width: self.width,
                height: self.height,
                package_type: self.package_type,
                description: self.description,
                declared_value: self.declared_value,
            },
            shipping: ShippingOptions {
                method,
                insurance: self.insurance,
                signature_required: self.signature_required,
                shipping_cost: self.shipping_cost,
                estimated_delivery_date: self.estimated_delivery_date,
            },
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AdminShipmentRow {
    #[sqlx(flatten)]
    shipment: ShipmentRow,
    owner_name: Option<String>,
    owner_email: Option<String>,
}

impl AdminShipmentRow {
    fn into_shipment_with_owner(self) -> ShipmentWithOwner {
        ShipmentWithOwner {
            shipment: self.shipment.into_shipment(),
            owner_name: self.owner_name,
            owner_email: self.owner_email,
        }
    }
}
