//! Unit tests for the shipment crate

#[cfg(test)]
mod tracking_tests {
    use crate::domain::value_object::tracking_number::TrackingNumber;

    #[test]
    fn test_generate_matches_documented_pattern() {
        // ^[A-Z]{2}\d{2}[A-Z0-9]{6}$
        for _ in 0..100 {
            let tn = TrackingNumber::generate("CS");
            assert!(
                TrackingNumber::is_well_formed(tn.as_str()),
                "malformed tracking number: {}",
                tn
            );
        }
    }

    #[test]
    fn test_generate_is_effectively_unique() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            assert!(seen.insert(TrackingNumber::generate("CS")));
        }
    }

    #[test]
    fn test_example_from_tracking_pattern() {
        assert!(TrackingNumber::is_well_formed("CS25ABCDEF"));
    }
}

#[cfg(test)]
mod status_tests {
    use crate::domain::value_object::shipment_status::ShipmentStatus;

    #[test]
    fn test_all_statuses_roundtrip_through_codes() {
        for status in ShipmentStatus::ALL {
            assert_eq!(ShipmentStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_initial_state_is_pending() {
        assert_eq!(ShipmentStatus::default(), ShipmentStatus::Pending);
    }

    #[test]
    fn test_unrecognized_codes_are_rejected() {
        for code in ["returned", "out_for_delivery", "Pending", "IN_TRANSIT", ""] {
            assert_eq!(ShipmentStatus::from_code(code), None, "code: {}", code);
        }
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::ShipmentConfig;

    #[test]
    fn test_default_config() {
        let config = ShipmentConfig::default();
        assert_eq!(config.tracking_prefix, "CS");
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_create_request_accepts_partial_body() {
        // Missing blocks default to empty; validation happens in the use case
        let req: CreateShipmentRequest = serde_json::from_str(
            r#"{"recipient": {"name": "Bob"}, "package": {"weight": 2.5}}"#,
        )
        .unwrap();

        assert_eq!(req.recipient.name, "Bob");
        assert_eq!(req.recipient.zip, "");
        assert_eq!(req.package.weight, 2.5);
        assert_eq!(req.sender, PartyDto::default());
        assert_eq!(req.shipping.shipping_method, "");
    }

    #[test]
    fn test_create_request_is_camel_case() {
        let req: CreateShipmentRequest = serde_json::from_str(
            r#"{
                "shipping": {
                    "shippingMethod": "express",
                    "signatureRequired": true,
                    "shippingCost": 25.5,
                    "estimatedDeliveryDate": "2025-07-01"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(req.shipping.shipping_method, "express");
        assert!(req.shipping.signature_required);
        assert_eq!(req.shipping.shipping_cost, 25.5);
        assert!(req.shipping.estimated_delivery_date.is_some());
    }

    #[test]
    fn test_update_status_request_defaults_status() {
        let req: UpdateStatusRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.status, "");

        let req: UpdateStatusRequest =
            serde_json::from_str(r#"{"status": "delivered"}"#).unwrap();
        assert_eq!(req.status, "delivered");
    }

    #[test]
    fn test_admin_response_flattens_shipment_fields() {
        use crate::domain::entity::shipment::{
            PackageDetails, Shipment, ShipmentWithOwner, ShippingOptions,
        };
        use crate::domain::value_object::{
            party::Party,
            shipment_id::{ShipmentId, UserId},
            shipment_status::ShipmentStatus,
            shipping_method::ShippingMethod,
            tracking_number::TrackingNumber,
        };
        use chrono::Utc;

        let shipment = Shipment {
            shipment_id: ShipmentId::from_i64(1),
            owner: UserId::from_i64(7),
            tracking_number: TrackingNumber::from_db("CS25ABCDEF"),
            sender: Party::default(),
            recipient: Party::default(),
            package: PackageDetails {
                weight: 2.5,
                length: None,
                width: None,
                height: None,
                package_type: "box".to_string(),
                description: "Books".to_string(),
                declared_value: None,
            },
            shipping: ShippingOptions {
                method: ShippingMethod::Standard,
                insurance: false,
                signature_required: false,
                shipping_cost: 12.99,
                estimated_delivery_date: None,
            },
            status: ShipmentStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let response = AdminShipmentResponse::from(&ShipmentWithOwner {
            shipment,
            owner_name: Some("Alice".to_string()),
            owner_email: Some("alice@example.com".to_string()),
        });

        let json = serde_json::to_value(&response).unwrap();
        // Flattened: shipment fields and owner fields sit side by side
        assert_eq!(json["trackingNumber"], "CS25ABCDEF");
        assert_eq!(json["userId"], 7);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["ownerName"], "Alice");
        assert_eq!(json["ownerEmail"], "alice@example.com");
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::ShipmentError;
    use axum::http::StatusCode;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            ShipmentError::Validation(vec!["weight".to_string()]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ShipmentError::UnknownStatus("returned".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ShipmentError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ShipmentError::MissingToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        // Present-but-invalid tokens are 403, not 401
        assert_eq!(
            ShipmentError::InvalidToken.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ShipmentError::AdminRequired.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ShipmentError::OwnerOnly.status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_validation_message_enumerates_fields() {
        let err = ShipmentError::Validation(vec![
            "recipient.name".to_string(),
            "weight".to_string(),
        ]);
        assert_eq!(err.to_string(), "Validation failed: recipient.name, weight");
    }

    #[test]
    fn test_internal_errors_do_not_leak_detail() {
        let err = ShipmentError::Internal("connection refused to 10.0.0.5".to_string());
        let app_err = err.to_app_error();
        assert_eq!(app_err.message(), "Server error");
        assert_eq!(app_err.kind(), ErrorKind::InternalServerError);
    }
}
