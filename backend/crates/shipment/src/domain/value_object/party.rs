//! Party Value Object
//!
//! The structured address + contact block duplicated per shipment for both
//! the sender and the recipient. The sender block is a snapshot of the
//! creating user's profile at creation time, not a live reference.

/// Contact + address block for one side of a shipment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Party {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl Party {
    /// Names of the required fields that are empty, prefixed with `label`
    ///
    /// Required for a recipient block: name, address, city, state, zip.
    pub fn missing_required_fields(&self, label: &str) -> Vec<String> {
        let mut missing = Vec::new();

        let required = [
            ("name", &self.name),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip", &self.zip),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                missing.push(format!("{}.{}", label, field));
            }
        }

        missing
    }
}
