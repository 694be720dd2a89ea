//! Line-level text handling for run-log files.
//!
//! Two concerns live here: stripping comments and blank lines from raw
//! input lines, and decoding a buffered byte stream into lines under a
//! configurable UTF-8 policy. Everything downstream (the section parser)
//! only ever sees filtered, decoded lines.

use std::io::{self, BufRead};

/// Comment marker for run-log files.
const COMMENT_MARKER: &str = "//";

/// Strip comments and surrounding whitespace from one raw line.
///
/// Returns `None` when nothing remains: blank lines, whitespace-only
/// lines, and lines that are entirely comment (marker at column 0 after
/// trimming). An inline comment is truncated off and the kept prefix
/// re-trimmed. Filtering an already-filtered line yields the same result.
#[must_use]
pub fn filter_line(raw: &str) -> Option<&str> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }
    match line.find(COMMENT_MARKER) {
        Some(0) => None,
        Some(at) => {
            let head = line[..at].trim_end();
            if head.is_empty() {
                None
            } else {
                Some(head)
            }
        }
        None => Some(line),
    }
}

/// UTF-8 decoding policy for run-log files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Decoding {
    /// Invalid UTF-8 surfaces as an `InvalidData` I/O error for the file.
    Strict,
    /// Invalid sequences decode to U+FFFD.
    ///
    /// The harness wrote its logs in whatever the platform charset was;
    /// the payload is ASCII, so substitution never loses run data.
    #[default]
    Lossy,
}

/// Iterator over the decoded lines of a buffered byte stream.
///
/// Splits on `\n` and strips a trailing `\r`, so both Unix and Windows
/// line endings come out clean.
#[derive(Debug)]
pub struct DecodedLines<R> {
    reader: R,
    decoding: Decoding,
    buf: Vec<u8>,
}

impl<R: BufRead> DecodedLines<R> {
    /// Wrap a buffered reader with the given decoding policy.
    pub const fn new(reader: R, decoding: Decoding) -> Self {
        Self {
            reader,
            decoding,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for DecodedLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                let line = match self.decoding {
                    Decoding::Strict => match std::str::from_utf8(&self.buf) {
                        Ok(text) => text.to_owned(),
                        Err(err) => {
                            return Some(Err(io::Error::new(io::ErrorKind::InvalidData, err)))
                        }
                    },
                    Decoding::Lossy => String::from_utf8_lossy(&self.buf).into_owned(),
                };
                Some(Ok(line))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
