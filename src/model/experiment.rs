//! Experiment records - root entities runs are grouped under

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One experiment, named after the directory that bounded its scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    name: String,
    created_at: DateTime<Utc>,
}

impl ExperimentRecord {
    /// Create an experiment record with the current timestamp.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// Get the experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experiment_record_new() {
        let record = ExperimentRecord::new("aco");
        assert_eq!(record.name(), "aco");
        assert!(record.created_at().timestamp() > 0);
    }

    #[test]
    fn test_experiment_record_serialization() {
        let record = ExperimentRecord::new("sa");
        let json = serde_json::to_string(&record).expect("serialization failed");
        let back: ExperimentRecord = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(record, back);
    }
}
