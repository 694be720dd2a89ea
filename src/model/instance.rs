//! Instance records - registered benchmark problems

use serde::{Deserialize, Serialize};

/// One canonical benchmark instance runs can be attributed to.
///
/// The precomputed statistical features of an instance live with the
/// catalogue configuration, not here; the model only needs the canonical
/// name as an attribution target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRecord {
    name: String,
}

impl InstanceRecord {
    /// Create an instance record for a canonical name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the canonical instance name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
