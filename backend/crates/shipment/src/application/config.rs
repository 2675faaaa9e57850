//! Application Configuration
//!
//! Configuration for the Shipment application layer.

/// Shipment application configuration
#[derive(Debug, Clone)]
pub struct ShipmentConfig {
    /// Fixed 2-letter tracking-number prefix
    pub tracking_prefix: String,
}

impl Default for ShipmentConfig {
    fn default() -> Self {
        Self {
            tracking_prefix: "CS".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix() {
        assert_eq!(ShipmentConfig::default().tracking_prefix, "CS");
    }
}
