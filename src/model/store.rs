//! Experiment store - in-memory model fed by the ingestion walker
//!
//! Construction registers the standard measurement dimensions and one
//! instance record per catalogue entry; ingestion then adds experiments
//! and runs as the walker discovers them.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::{
    standard_dimensions, DimensionRecord, DirectoryScopes, ExperimentModel, ExperimentRecord,
    InstanceRecord, RunRecord,
};
use crate::catalog::InstanceCatalog;
use crate::context::ScopeStack;
use crate::error::{Error, Result};

/// In-memory experiment-data model.
///
/// Directory classification: a directory whose name resolves in the
/// catalogue opens an instance-runs scope under the resolved canonical
/// name (and, when no experiment scope is live yet, an experiment scope
/// named after the same directory); any other directory entered without a
/// live experiment scope opens an experiment scope named after itself.
/// Nested experiment directories do not stack.
#[derive(Debug, Serialize)]
pub struct ExperimentStore {
    #[serde(skip)]
    catalog: InstanceCatalog,
    dimensions: Vec<DimensionRecord>,
    instances: HashMap<String, InstanceRecord>,
    experiments: HashMap<String, ExperimentRecord>,
    runs: Vec<RunRecord>,
}

impl ExperimentStore {
    /// Store over the builtin instance catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(InstanceCatalog::builtin())
    }

    /// Store over a caller-provided catalogue.
    #[must_use]
    pub fn with_catalog(catalog: InstanceCatalog) -> Self {
        let instances = catalog
            .names()
            .map(|name| (name.to_owned(), InstanceRecord::new(name)))
            .collect();
        Self {
            catalog,
            dimensions: standard_dimensions(),
            instances,
            experiments: HashMap::new(),
            runs: Vec::new(),
        }
    }

    /// Registered measurement dimensions, in column order.
    #[must_use]
    pub fn dimensions(&self) -> &[DimensionRecord] {
        &self.dimensions
    }

    /// Number of registered instances.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Number of experiments discovered so far.
    #[must_use]
    pub fn experiment_count(&self) -> usize {
        self.experiments.len()
    }

    /// Number of finished runs.
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Get an instance record by canonical name.
    #[must_use]
    pub fn get_instance(&self, name: &str) -> Option<&InstanceRecord> {
        self.instances.get(name)
    }

    /// Get an experiment record by name.
    #[must_use]
    pub fn get_experiment(&self, name: &str) -> Option<&ExperimentRecord> {
        self.experiments.get(name)
    }

    /// All finished runs, in ingestion order.
    #[must_use]
    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }

    /// All runs belonging to one experiment.
    #[must_use]
    pub fn runs_for_experiment(&self, name: &str) -> Vec<&RunRecord> {
        self.runs.iter().filter(|run| run.experiment() == name).collect()
    }

    /// All runs executed on one benchmark instance.
    #[must_use]
    pub fn runs_for_instance(&self, name: &str) -> Vec<&RunRecord> {
        self.runs.iter().filter(|run| run.instance() == name).collect()
    }

    /// Export dimensions, instances, experiments and runs as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }
}

impl Default for ExperimentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperimentModel for ExperimentStore {
    type Run = RunRecord;

    fn classify_directory(&mut self, dir: &Path, scope: &ScopeStack) -> DirectoryScopes {
        let Some(name) = dir.file_name().map(|name| name.to_string_lossy()) else {
            return DirectoryScopes::default();
        };
        let mut scopes = DirectoryScopes::default();
        if let Some(canonical) = self.catalog.resolve(&name) {
            scopes.instance_runs = Some(canonical.to_owned());
            if scope.experiment().is_none() {
                scopes.experiment = Some(name.to_string());
            }
        } else if scope.experiment().is_none() {
            scopes.experiment = Some(name.to_string());
        }
        if let Some(experiment) = &scopes.experiment {
            self.experiments
                .entry(experiment.clone())
                .or_insert_with(|| ExperimentRecord::new(experiment.clone()));
        }
        scopes
    }

    fn begin_run(&mut self, file: &Path, scope: &ScopeStack) -> Result<RunRecord> {
        let Some(instance) = scope.instance() else {
            return Err(Error::OrphanRunLog {
                path: file.to_path_buf(),
            });
        };
        let experiment = scope.experiment().unwrap_or(instance);
        debug!(file = %file.display(), experiment, instance, "run opened");
        Ok(RunRecord::new(file, experiment, instance))
    }

    fn finish_run(&mut self, run: RunRecord) {
        debug!(
            source = %run.source().display(),
            points = run.data_points().len(),
            parameters = run.parameters().len(),
            "run finished"
        );
        self.runs.push(run);
    }
}
