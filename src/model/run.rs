//! Run records - one recorded execution trace per log file

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RunHandle;

/// One recorded run: a sequence of data points plus named parameters.
///
/// Data points are stored verbatim, in file order; tokenizing them
/// against the registered dimensions is left to consumers of the model.
/// Parameters from all parameter sections of the file are merged into
/// one map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    source: PathBuf,
    experiment: String,
    instance: String,
    data_points: Vec<String>,
    parameters: BTreeMap<String, String>,
    loaded_at: DateTime<Utc>,
}

impl RunRecord {
    /// Create an empty run for the given log file and scope labels.
    #[must_use]
    pub fn new(
        source: impl Into<PathBuf>,
        experiment: impl Into<String>,
        instance: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            experiment: experiment.into(),
            instance: instance.into(),
            data_points: Vec::new(),
            parameters: BTreeMap::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Path of the log file the run was read from.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Name of the experiment the run belongs to.
    #[must_use]
    pub fn experiment(&self) -> &str {
        &self.experiment
    }

    /// Canonical name of the benchmark instance the run was executed on.
    #[must_use]
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// Data points, verbatim, in file order.
    #[must_use]
    pub fn data_points(&self) -> &[String] {
        &self.data_points
    }

    /// All recorded parameters.
    #[must_use]
    pub const fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    /// Look up one parameter value.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// Get the load timestamp.
    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl RunHandle for RunRecord {
    fn add_data_point(&mut self, point: &str) {
        self.data_points.push(point.to_owned());
    }

    fn set_parameter(&mut self, key: &str, value: &str) {
        self.parameters.insert(key.to_owned(), value.to_owned());
    }
}
