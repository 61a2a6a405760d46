//! Equipment and maintenance record identifiers.
//!
//! Records are keyed by opaque string IDs so the engine can sit on top of
//! any document store. `new()` mints a UUIDv4 value for stores that leave
//! key generation to the caller; IDs issued elsewhere round-trip untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque equipment identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentId(pub String);

impl EquipmentId {
    /// Mint a fresh random identifier.
    pub fn new() -> Self {
        EquipmentId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EquipmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EquipmentId {
    fn from(s: &str) -> Self {
        EquipmentId(s.to_string())
    }
}

impl From<String> for EquipmentId {
    fn from(s: String) -> Self {
        EquipmentId(s)
    }
}

/// Opaque maintenance record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaintenanceId(pub String);

impl MaintenanceId {
    /// Mint a fresh random identifier.
    pub fn new() -> Self {
        MaintenanceId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MaintenanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MaintenanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MaintenanceId {
    fn from(s: &str) -> Self {
        MaintenanceId(s.to_string())
    }
}

impl From<String> for MaintenanceId {
    fn from(s: String) -> Self {
        MaintenanceId(s)
    }
}
