//! Shipping Method Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shipping method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShippingMethod {
    Standard,
    Priority,
    Express,
}

impl ShippingMethod {
    /// Stable code used in storage and API payloads
    #[inline]
    pub const fn code(&self) -> &'static str {
        use ShippingMethod::*;
        match self {
            Standard => "standard",
            Priority => "priority",
            Express => "express",
        }
    }

    /// Parse from a stored or submitted code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use ShippingMethod::*;
        match code {
            "standard" => Some(Standard),
            "priority" => Some(Priority),
            "express" => Some(Express),
            _ => None,
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
