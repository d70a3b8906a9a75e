use serde::{Deserialize, Serialize};

/// Read view of an open profile, kept in step with every applied edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    pub sensitivity: u8,
    /// Stored SHA-1 digest of the profile body, lowercase hex.
    pub digest: String,
}
