//! Depth-first ingestion of a benchmark result tree.
//!
//! The walker enumerates directory entries strictly sequentially; on a
//! subdirectory it asks the model which scopes open, pushes the matching
//! frames, recurses, and pops them on the way back up; on a loadable file
//! it builds the decoded line stream and hands it to the parser. At most
//! one file is open at any time, and its streams are released before the
//! next entry is visited.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::context::{ScopeKind, ScopeStack};
use crate::error::{Error, Result};
use crate::model::ExperimentModel;
use crate::parser::parse_run_log;
use crate::text::{DecodedLines, Decoding};

/// Counters accumulated over one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Directories entered, the root included.
    pub directories_visited: usize,
    /// Run-log files parsed to completion.
    pub files_loaded: usize,
    /// Non-loadable files passed over.
    pub files_skipped: usize,
    /// Runs attached to the model.
    pub runs_loaded: usize,
}

/// Loadability rule for run-log files.
///
/// The last four characters of the file name must be `.` then `txt`,
/// matched character-by-character from the end with either case accepted
/// per letter. `run1.TXT` loads, `run1.txtx` does not.
#[must_use]
pub fn is_run_log(file_name: &str) -> bool {
    let mut rev = file_name.chars().rev();
    matches!(
        (rev.next(), rev.next(), rev.next(), rev.next()),
        (
            Some('t' | 'T'),
            Some('x' | 'X'),
            Some('t' | 'T'),
            Some('.')
        )
    )
}

/// One traversal over a result tree, feeding a model.
pub(crate) struct IngestionWalker<'m, M: ExperimentModel> {
    model: &'m mut M,
    scope: ScopeStack,
    decoding: Decoding,
    stats: LoadStats,
}

impl<'m, M: ExperimentModel> IngestionWalker<'m, M> {
    pub(crate) fn new(model: &'m mut M, decoding: Decoding) -> Self {
        Self {
            model,
            scope: ScopeStack::new(),
            decoding,
            stats: LoadStats::default(),
        }
    }

    /// Ingest everything under `root`.
    pub(crate) fn ingest(mut self, root: &Path) -> Result<LoadStats> {
        if !root.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }
        self.visit_directory(root)?;
        Ok(self.stats)
    }

    /// Scan one directory's entries, recursing into subdirectories.
    ///
    /// Sibling order is whatever the filesystem yields; run attribution
    /// depends only on the file path and the live scope stack.
    fn visit_directory(&mut self, dir: &Path) -> Result<()> {
        self.stats.directories_visited += 1;
        let entries = fs::read_dir(dir).map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| Error::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let mut file_type = entry.file_type().map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            if file_type.is_symlink() {
                // decide on the link target, not the link itself
                file_type = fs::metadata(&path)
                    .map_err(|source| Error::Io {
                        path: path.clone(),
                        source,
                    })?
                    .file_type();
            }
            if file_type.is_dir() {
                self.enter_directory(&path)?;
            } else if file_type.is_file() {
                self.visit_file(&path)?;
            }
        }
        Ok(())
    }

    /// Push the scopes a directory opens, visit its subtree, and pop them
    /// again. The frames come back off even when the subtree fails, so
    /// push/pop stay paired per boundary.
    fn enter_directory(&mut self, dir: &Path) -> Result<()> {
        let scopes = self.model.classify_directory(dir, &self.scope);
        if let Some(label) = scopes.experiment {
            debug!(dir = %dir.display(), experiment = %label, "experiment scope opened");
            self.scope.push(ScopeKind::ExperimentRoot, dir, label);
        }
        if let Some(label) = scopes.instance_runs {
            debug!(dir = %dir.display(), instance = %label, "instance-runs scope opened");
            self.scope.push(ScopeKind::InstanceRunsRoot, dir, label);
        }
        let outcome = self.visit_directory(dir);
        self.scope.leave(dir);
        outcome
    }

    /// Load one file if the suffix rule accepts it.
    fn visit_file(&mut self, path: &Path) -> Result<()> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        if !is_run_log(&name) {
            trace!(file = %path.display(), "not a run log, skipped");
            self.stats.files_skipped += 1;
            return Ok(());
        }
        debug!(file = %path.display(), "loading run log");
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lines = DecodedLines::new(BufReader::new(file), self.decoding);
        let produced = parse_run_log(lines, path, &self.scope, self.model)?;
        self.stats.files_loaded += 1;
        if produced {
            self.stats.runs_loaded += 1;
        }
        Ok(())
    }
}
