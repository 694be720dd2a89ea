//! Run-log parsing: a line-oriented state machine over labeled sections.
//!
//! A run-log file describes at most one run, split over any mix of a
//! log-data section and parameter sections:
//!
//! ```text
//! ALGORITHM_DATA_SECTION
//! algorithm: aco
//! seed: 42
//! SECTION_END
//! LOG_DATA_SECTION
//! 108 108 21 0.0014 36542   // FEs DEs AT NT L
//! 512 512 96 0.0067 34102
//! SECTION_END
//! ```
//!
//! Section markers are matched case-insensitively against filtered lines.
//! Format looseness (malformed parameter lines, stray lines outside
//! sections, a missing final `SECTION_END`) is recovered locally and never
//! aborts a file; stream errors are fatal for the file.

use std::io;
use std::path::Path;

use tracing::{trace, warn};

use crate::context::ScopeStack;
use crate::error::{Error, Result};
use crate::model::{ExperimentModel, RunHandle};
use crate::text::filter_line;

/// Marker opening the log-data section.
pub const LOG_DATA_SECTION: &str = "LOG_DATA_SECTION";
/// Marker opening the algorithm parameter section.
pub const ALGORITHM_DATA_SECTION: &str = "ALGORITHM_DATA_SECTION";
/// Marker opening the deterministic-initialization parameter section.
pub const DETERMINISTIC_INITIALIZATION_SECTION: &str = "DETERMINISTIC_INITIALIZATION_SECTION";
/// Marker closing the current section.
pub const SECTION_END: &str = "SECTION_END";

/// Parser position within a run-log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// Outside any section.
    Idle,
    /// Inside a log-data section: every line is one data point.
    LogData,
    /// Inside a parameter section: lines are `key:value` pairs.
    ParameterData,
}

/// Parse one run-log file into the model.
///
/// The run is opened lazily at the first section marker and reused across
/// all sections of the file; at end of input an opened run is finished
/// exactly once, also when the file ended mid-section. Returns whether a
/// run was produced.
///
/// # Errors
///
/// A mid-stream I/O error still finishes the opened run, then surfaces as
/// [`Error::Io`] for `file`. [`ExperimentModel::begin_run`] failures
/// propagate unchanged.
pub fn parse_run_log<M, I>(
    lines: I,
    file: &Path,
    scope: &ScopeStack,
    model: &mut M,
) -> Result<bool>
where
    M: ExperimentModel,
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut state = ParserState::Idle;
    let mut run: Option<M::Run> = None;
    let mut stream_error = None;

    for raw in lines {
        let raw = match raw {
            Ok(raw) => raw,
            Err(err) => {
                stream_error = Some(err);
                break;
            }
        };
        let Some(line) = filter_line(&raw) else {
            continue;
        };
        state = match state {
            ParserState::Idle => {
                if line.eq_ignore_ascii_case(LOG_DATA_SECTION) {
                    open_run(&mut run, file, scope, model)?;
                    ParserState::LogData
                } else if line.eq_ignore_ascii_case(ALGORITHM_DATA_SECTION)
                    || line.eq_ignore_ascii_case(DETERMINISTIC_INITIALIZATION_SECTION)
                {
                    open_run(&mut run, file, scope, model)?;
                    ParserState::ParameterData
                } else {
                    trace!(file = %file.display(), line, "line outside any section ignored");
                    ParserState::Idle
                }
            }
            ParserState::LogData => {
                if line.eq_ignore_ascii_case(SECTION_END) {
                    ParserState::Idle
                } else {
                    if let Some(run) = run.as_mut() {
                        run.add_data_point(line);
                    }
                    ParserState::LogData
                }
            }
            ParserState::ParameterData => {
                if line.eq_ignore_ascii_case(SECTION_END) {
                    ParserState::Idle
                } else {
                    match line.find(':') {
                        Some(at) if at > 0 => {
                            if let Some(run) = run.as_mut() {
                                let (key, value) = line.split_at(at);
                                run.set_parameter(key.trim(), value[1..].trim());
                            }
                        }
                        _ => {
                            warn!(file = %file.display(), line, "malformed parameter line skipped");
                        }
                    }
                    ParserState::ParameterData
                }
            }
        };
    }

    let produced = run.is_some();
    if let Some(run) = run.take() {
        model.finish_run(run);
    }
    if let Some(source) = stream_error {
        return Err(Error::Io {
            path: file.to_path_buf(),
            source,
        });
    }
    Ok(produced)
}

/// Open the file's run on the first section marker; later markers reuse it.
fn open_run<M: ExperimentModel>(
    run: &mut Option<M::Run>,
    file: &Path,
    scope: &ScopeStack,
    model: &mut M,
) -> Result<()> {
    if run.is_none() {
        *run = Some(model.begin_run(file, scope)?);
    }
    Ok(())
}
