//! Tracking Number Value Object
//!
//! The externally visible shipment identifier, distinct from the internal
//! numeric id. Format: a fixed 2-letter prefix, the 2-digit current year,
//! and a 6-character uppercase base-36 suffix, e.g. `CS25A7K2QX`.
//!
//! Uniqueness is best-effort only: the suffix carries about 31 bits of
//! randomness and no store-level uniqueness check exists. A collision is
//! unlikely but possible at scale.

use chrono::{Datelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Suffix length in characters
const SUFFIX_LEN: usize = 6;

/// Base-36 alphabet, uppercase
const SUFFIX_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Tracking number value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Generate a new tracking number
    ///
    /// Assigned exactly once, at shipment creation; it never changes.
    pub fn generate(prefix: &str) -> Self {
        let year = Utc::now().year() % 100;

        let mut rng = rand::rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect();

        let value = format!("{}{:02}{}", prefix, year, suffix);
        debug_assert!(Self::is_well_formed(&value));
        Self(value)
    }

    /// Create from database value (assumed already assigned)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Whether a string matches the generated format
    /// (`^[A-Z]{2}\d{2}[A-Z0-9]{6}$`)
    pub fn is_well_formed(value: &str) -> bool {
        let bytes = value.as_bytes();
        if bytes.len() != 2 + 2 + SUFFIX_LEN {
            return false;
        }
        bytes[..2].iter().all(|b| b.is_ascii_uppercase())
            && bytes[2..4].iter().all(|b| b.is_ascii_digit())
            && bytes[4..]
                .iter()
                .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    }

    /// Get the tracking number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TrackingNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
