// src/readers/summary.rs

//! Implements `Summary` statistics tracking struct.

use crate::common::{Count, FPath, FileSz};

/// Accumulated statistics about processing of a single input source by a
/// [`TimestampReader`].
///
/// For CLI option `--summary`.
///
/// [`TimestampReader`]: crate::readers::timestampreader::TimestampReader
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// the `FPath` of the processed input source
    pub path: FPath,
    /// count of lines read
    pub lines: Count,
    /// count of lines with a matching and parsed timestamp
    pub lines_matched: Count,
    /// count of bytes read, including line terminators
    pub bytes: FileSz,
    /// the error that stopped processing, if any
    pub error: Option<String>,
}

impl Summary {
    pub fn new(path: FPath) -> Summary {
        Summary {
            path,
            ..Default::default()
        }
    }

    /// count of lines without a timestamp
    pub fn lines_unmatched(&self) -> Count {
        self.lines - self.lines_matched
    }
}

pub type Summaries = Vec<Summary>;

/// count of input sources whose processing stopped on an error
pub fn summaries_failed(summaries: &Summaries) -> Count {
    summaries
        .iter()
        .filter(|summary| summary.error.is_some())
        .count() as Count
}
