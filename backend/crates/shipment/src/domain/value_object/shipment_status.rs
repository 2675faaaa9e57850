//! Shipment Status Value Object
//!
//! `Pending` is the sole initial state. No transition graph is enforced:
//! any status may overwrite any other through the explicit update
//! operation. Incoming codes are validated against the four recognized
//! values, nothing more.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shipment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShipmentStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
    Cancelled,
}

impl ShipmentStatus {
    /// Every recognized status
    pub const ALL: [ShipmentStatus; 4] = [
        ShipmentStatus::Pending,
        ShipmentStatus::InTransit,
        ShipmentStatus::Delivered,
        ShipmentStatus::Cancelled,
    ];

    /// Stable code used in storage and API payloads
    #[inline]
    pub const fn code(&self) -> &'static str {
        use ShipmentStatus::*;
        match self {
            Pending => "pending",
            InTransit => "in_transit",
            Delivered => "delivered",
            Cancelled => "cancelled",
        }
    }

    /// Parse from a stored or submitted code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use ShipmentStatus::*;
        match code {
            "pending" => Some(Pending),
            "in_transit" => Some(InTransit),
            "delivered" => Some(Delivered),
            "cancelled" => Some(Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
