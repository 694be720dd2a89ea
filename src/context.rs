//! Directory scope tracking during traversal.
//!
//! The walker pushes a frame when the host model declares a directory to
//! be an experiment root or an instance-runs root, and pops it again when
//! the traversal leaves exactly that directory. Boundary identity is
//! filesystem identity via canonicalized paths, not lexical string
//! comparison, so `.`/`..` segments and symlinks do not desynchronize the
//! pairing.

use std::fs;
use std::path::{Path, PathBuf};

/// Which scope a boundary frame opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Directory bounding one experiment's runs.
    ExperimentRoot,
    /// Directory bounding the runs on one benchmark instance.
    InstanceRunsRoot,
}

/// One pushed boundary: the canonical path that opened the scope and the
/// label runs inside it inherit.
#[derive(Debug, Clone)]
struct ScopeFrame {
    boundary: PathBuf,
    label: String,
}

/// Stack of live experiment and instance-runs scopes.
///
/// The two kinds are tracked independently: leaving a directory may close
/// one, both, or neither. Per-kind depth never goes negative; leaving a
/// directory that pushed nothing is a no-op.
#[derive(Debug, Default)]
pub struct ScopeStack {
    experiments: Vec<ScopeFrame>,
    instance_runs: Vec<ScopeFrame>,
}

impl ScopeStack {
    /// Empty stack, no live scope of either kind.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a scope of `kind` bounded at `dir`.
    pub fn push(&mut self, kind: ScopeKind, dir: &Path, label: impl Into<String>) {
        let frame = ScopeFrame {
            boundary: canonical_boundary(dir),
            label: label.into(),
        };
        self.stack_mut(kind).push(frame);
    }

    /// Close whichever scopes are bounded at `dir`.
    ///
    /// Each kind's top frame is checked independently against the
    /// directory being left. Only exact boundary matches pop; skipped-over
    /// frames are not detected, matching the lenient behavior of the
    /// harness convention.
    pub fn leave(&mut self, dir: &Path) {
        let boundary = canonical_boundary(dir);
        for kind in [ScopeKind::InstanceRunsRoot, ScopeKind::ExperimentRoot] {
            let stack = self.stack_mut(kind);
            if stack.last().is_some_and(|frame| frame.boundary == boundary) {
                stack.pop();
            }
        }
    }

    /// Label of the innermost live experiment scope.
    #[must_use]
    pub fn experiment(&self) -> Option<&str> {
        self.experiments.last().map(|frame| frame.label.as_str())
    }

    /// Canonical instance name of the innermost live instance-runs scope.
    #[must_use]
    pub fn instance(&self) -> Option<&str> {
        self.instance_runs.last().map(|frame| frame.label.as_str())
    }

    /// Live scope depth of one kind.
    #[must_use]
    pub fn depth(&self, kind: ScopeKind) -> usize {
        match kind {
            ScopeKind::ExperimentRoot => self.experiments.len(),
            ScopeKind::InstanceRunsRoot => self.instance_runs.len(),
        }
    }

    fn stack_mut(&mut self, kind: ScopeKind) -> &mut Vec<ScopeFrame> {
        match kind {
            ScopeKind::ExperimentRoot => &mut self.experiments,
            ScopeKind::InstanceRunsRoot => &mut self.instance_runs,
        }
    }
}

/// Filesystem identity for a boundary.
///
/// Canonicalized when possible, the lexical path otherwise. Push and
/// leave both come through here, so the two sides agree even when
/// canonicalization fails (e.g. a directory removed mid-traversal).
fn canonical_boundary(dir: &Path) -> PathBuf {
    fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
}
