//! Experiment-data model fed by the ingestion core.
//!
//! The walker and parser drive any type implementing [`ExperimentModel`];
//! [`ExperimentStore`] is the in-memory implementation shipped with the
//! crate.
//!
//! ## Schema overview
//!
//! ```text
//! ExperimentRecord (1) ──< RunRecord (N) ──> InstanceRecord (1)
//!                              │
//!                              ├── data points  [file order]
//!                              └── parameters   [key:value]
//! DimensionRecord (5)  — the measurement axes data points are typed against
//! ```

mod dimension;
mod experiment;
mod instance;
mod run;
mod store;

pub use dimension::{standard_dimensions, DimensionKind, DimensionRecord, ValueType};
pub use experiment::ExperimentRecord;
pub use instance::InstanceRecord;
pub use run::RunRecord;
pub use store::ExperimentStore;

use std::path::Path;

use crate::context::ScopeStack;
use crate::error::Result;

/// Scopes a visited directory opens, as decided by the host model.
///
/// Both fields may be set at once: a directory can bound an experiment
/// and an instance-runs scope simultaneously.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryScopes {
    /// Label for a new experiment scope bounded at this directory.
    pub experiment: Option<String>,
    /// Canonical instance name for a new instance-runs scope.
    pub instance_runs: Option<String>,
}

/// Host-model lifecycle consumed while ingesting a result tree.
///
/// The ingestion core owns the traversal and the parsing; everything it
/// learns flows through these three calls plus the [`RunHandle`] the
/// model hands out per run.
pub trait ExperimentModel {
    /// Run handle produced by [`begin_run`](Self::begin_run).
    type Run: RunHandle;

    /// Decide which scopes `dir` opens, given the live scope stack.
    ///
    /// Called once per directory, before its subtree is visited.
    fn classify_directory(&mut self, dir: &Path, scope: &ScopeStack) -> DirectoryScopes;

    /// Open the run a log file will be parsed into.
    ///
    /// Called lazily, at the first section marker of a file; a file
    /// without section markers never opens a run.
    ///
    /// # Errors
    ///
    /// Implementations reject files that cannot be attributed, e.g. a run
    /// log outside any instance-runs scope.
    fn begin_run(&mut self, file: &Path, scope: &ScopeStack) -> Result<Self::Run>;

    /// Take a finished run back.
    ///
    /// Every opened run is finished exactly once, also when its file
    /// ended mid-section or failed mid-read.
    fn finish_run(&mut self, run: Self::Run);
}

/// One open run being filled while its log file is parsed.
pub trait RunHandle {
    /// Append one opaque data-point line, in file order.
    fn add_data_point(&mut self, point: &str);

    /// Record one `key:value` parameter.
    fn set_parameter(&mut self, key: &str, value: &str);
}
