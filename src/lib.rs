//! # tspsuite-ingest: TSPSuite run-log ingestion
//!
//! Walks a benchmark result tree written by the TSPSuite harness, parses
//! every run-log file in it, and attaches the reconstructed runs to an
//! experiment-data model.
//!
//! ## Result-tree convention
//!
//! ```text
//! results/
//! ├── aco/                 experiment root
//! │   ├── att48/           instance-runs root (canonical catalogue name)
//! │   │   ├── run_01.txt
//! │   │   └── run_02.TXT
//! │   └── berlin52/
//! │       └── run_01.txt
//! └── sa/
//!     └── att48/
//!         └── run_01.txt
//! ```
//!
//! Traversal is strictly sequential and depth-first; at most one file is
//! open at any time. A malformed line inside a good file is skipped
//! silently; a failing file fails loudly and aborts the remaining
//! traversal.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tspsuite_ingest::model::ExperimentStore;
//! use tspsuite_ingest::TspSuiteLoader;
//!
//! let mut store = ExperimentStore::new();
//! let stats = TspSuiteLoader::new().load("results".as_ref(), &mut store)?;
//! println!("{} runs from {} files", stats.runs_loaded, stats.files_loaded);
//! # Ok::<(), tspsuite_ingest::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod catalog;
pub mod context;
pub mod error;
pub mod model;
pub mod parser;
pub mod text;
pub mod walker;

pub use catalog::InstanceCatalog;
pub use error::{Error, Result};
pub use text::Decoding;
pub use walker::LoadStats;

use std::path::Path;

use model::ExperimentModel;
use walker::IngestionWalker;

/// Loader for TSPSuite benchmark result trees.
///
/// Holds only immutable configuration; one loader serves any number of
/// [`load`](Self::load) calls, each against its own model. Obtain one via
/// [`new`](Self::new) or [`builder`](Self::builder).
#[derive(Debug, Clone, Copy, Default)]
pub struct TspSuiteLoader {
    decoding: Decoding,
}

impl TspSuiteLoader {
    /// Loader with default configuration (lossy UTF-8 decoding).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader builder.
    #[must_use]
    pub fn builder() -> TspSuiteLoaderBuilder {
        TspSuiteLoaderBuilder::default()
    }

    /// Ingest every run log under `root` into `model`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotADirectory`] when `root` is not a directory.
    /// An I/O or attribution failure on a single file aborts the
    /// remaining traversal and surfaces here.
    pub fn load<M: ExperimentModel>(&self, root: &Path, model: &mut M) -> Result<LoadStats> {
        IngestionWalker::new(model, self.decoding).ingest(root)
    }
}

/// Builder for [`TspSuiteLoader`].
#[derive(Debug, Default)]
pub struct TspSuiteLoaderBuilder {
    decoding: Decoding,
}

impl TspSuiteLoaderBuilder {
    /// Set the UTF-8 decoding policy for run-log files.
    #[must_use]
    pub const fn decoding(mut self, decoding: Decoding) -> Self {
        self.decoding = decoding;
        self
    }

    /// Build the loader.
    #[must_use]
    pub const fn build(self) -> TspSuiteLoader {
        TspSuiteLoader {
            decoding: self.decoding,
        }
    }
}
