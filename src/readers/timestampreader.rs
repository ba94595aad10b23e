// src/readers/timestampreader.rs

//! Implements a [`TimestampReader`], the driver of finding and parsing
//! timestamps in the lines of one input source.
//!
//! A line without a regex match is skipped. A line with a regex match that
//! the parse pattern rejects is fatal; the regex and the parse pattern are
//! inconsistent so every further line would be suspect.

use crate::common::{
    fpath_is_stdin,
    Count,
    FPath,
    FPaths,
    FileSz,
    LogFreqError,
    ResultLogFreq,
    ResultS3,
    NLu8,
    PATH_STDIN,
};
use crate::config::{Config, CAPTURE_GROUP_TIMESTAMP};
use crate::data::datetime::Instant;
use crate::data::frequency::FrequencyTable;
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::buffer_to_String_noraw;
#[allow(unused_imports)]
use crate::debug::printers::{de_err, de_wrn, e_err, e_wrn};
use crate::readers::helpers::{fpath_display, fpath_to_path};
use crate::readers::summary::{Summaries, Summary};

use std::fs::File;
use std::io::{BufRead, BufReader};

use ::bstr::io::BufReadExt; // provides `for_byte_line_with_terminator`
use ::bstr::ByteSlice; // provides `to_str` on `&[u8]`
use ::more_asserts::debug_assert_le;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Result of [`TimestampReader::find_timestamp`].
///
/// * `Found` a timestamp was matched and parsed.
/// * `Done` the line has no timestamp.
/// * `Err` a timestamp was matched but could not be parsed.
pub type ResultFindTimestamp = ResultS3<Instant, LogFreqError>;

/// Carriage return, dropped from the end of a line.
#[allow(non_upper_case_globals)]
const CRu8: u8 = b'\r';

/// Finds timestamps in lines of one input source and counts them into a
/// [`FrequencyTable`].
pub struct TimestampReader<'c> {
    config: &'c Config,
    path: FPath,
    summary: Summary,
}

impl std::fmt::Debug for TimestampReader<'_> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter,
    ) -> std::fmt::Result {
        f.debug_struct("TimestampReader")
            .field("path", &self.path)
            .field("summary", &self.summary)
            .finish()
    }
}

impl<'c> TimestampReader<'c> {
    /// Create a new `TimestampReader` for `path`. Nothing is opened until
    /// [`process`] is called.
    ///
    /// [`process`]: TimestampReader::process
    pub fn new(
        config: &'c Config,
        path: FPath,
    ) -> TimestampReader<'c> {
        let summary = Summary::new(path.clone());

        TimestampReader {
            config,
            path,
            summary,
        }
    }

    pub fn path(&self) -> &FPath {
        &self.path
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn into_summary(self) -> Summary {
        self.summary
    }

    /// Find and parse the timestamp in `line`. The line number of errors is
    /// the count of lines read so far.
    pub fn find_timestamp(
        &self,
        line: &[u8],
    ) -> ResultFindTimestamp {
        let captures = match self.config.regex().captures(line) {
            Some(captures) => captures,
            None => return ResultS3::Done,
        };
        // an optional group may not participate in the match
        let capture = match captures.get(CAPTURE_GROUP_TIMESTAMP) {
            Some(capture) => capture,
            None => return ResultS3::Done,
        };
        defo!("captured {:?}", buffer_to_String_noraw(capture.as_bytes()));
        let data: &str = match capture.as_bytes().to_str() {
            Ok(data) => data,
            Err(err) => {
                let value: String = capture
                    .as_bytes()
                    .to_str_lossy()
                    .into_owned();
                return ResultS3::Err(self.error_parse(value, err.to_string()));
            }
        };

        match self.config.parse_instr().parse(data) {
            Ok(instant) => ResultS3::Found(instant),
            Err(err) => ResultS3::Err(self.error_parse(String::from(data), err.to_string())),
        }
    }

    fn error_parse(
        &self,
        value: String,
        reason: String,
    ) -> LogFreqError {
        LogFreqError::Parse {
            path: fpath_display(&self.path),
            line_num: self.summary.lines,
            value,
            pattern: String::from(self.config.time_format()),
            reason,
        }
    }

    /// Read all lines of `reader`, count each timestamp into `table`.
    ///
    /// Lines end with `'\n'`; a `'\r'` before it is dropped.
    pub fn read_lines<R: BufRead>(
        &mut self,
        mut reader: R,
        table: &mut FrequencyTable,
    ) -> ResultLogFreq<()> {
        defn!("({:?})", self.path);
        let granularity = self.config.granularity();
        let mut fatal: Option<LogFreqError> = None;
        let result = reader.for_byte_line_with_terminator(|line_t: &[u8]| {
            self.summary.lines += 1;
            self.summary.bytes += line_t.len() as FileSz;
            let mut line: &[u8] = line_t;
            if let Some((&NLu8, rest)) = line.split_last() {
                line = rest;
            }
            if let Some((&CRu8, rest)) = line.split_last() {
                line = rest;
            }
            match self.find_timestamp(line) {
                ResultS3::Found(instant) => {
                    self.summary.lines_matched += 1;
                    table.add_instant(&instant, granularity);
                    Ok(true)
                }
                ResultS3::Done => Ok(true),
                ResultS3::Err(err) => {
                    fatal = Some(err);
                    // stop reading
                    Ok(false)
                }
            }
        });
        if let Some(err) = fatal {
            self.summary.error = Some(err.to_string());
            defx!("fatal {}", err);
            return Err(err);
        }
        if let Err(err) = result {
            self.summary.error = Some(err.to_string());
            defx!("read error {}", err);
            return Err(LogFreqError::Io {
                path: fpath_display(&self.path),
                err,
            });
        }
        debug_assert_le!(self.summary.lines_matched, self.summary.lines);
        defx!("lines {}, lines_matched {}", self.summary.lines, self.summary.lines_matched);

        Ok(())
    }

    /// Open the input source and call [`read_lines`].
    /// Path [`PATH_STDIN`] is STDIN.
    ///
    /// [`read_lines`]: TimestampReader::read_lines
    pub fn process(
        &mut self,
        table: &mut FrequencyTable,
    ) -> ResultLogFreq<()> {
        defñ!("({:?})", self.path);
        if fpath_is_stdin(&self.path) {
            let stdin = std::io::stdin();
            return self.read_lines(stdin.lock(), table);
        }
        let file = match File::open(fpath_to_path(&self.path)) {
            Ok(file) => file,
            Err(err) => {
                self.summary.error = Some(err.to_string());
                return Err(LogFreqError::Io {
                    path: fpath_display(&self.path),
                    err,
                });
            }
        };

        self.read_lines(BufReader::new(file), table)
    }
}

/// Process every path in order, counting timestamps into `table`.
/// No paths means STDIN.
///
/// An input source that fails to open or read is reported, skipped, and
/// counted in the returned `Ok` value.
/// A timestamp parse failure stops all processing and is returned as `Err`.
///
/// A [`Summary`] for each processed path is pushed to `summaries`.
pub fn process_paths(
    config: &Config,
    paths: &FPaths,
    table: &mut FrequencyTable,
    summaries: &mut Summaries,
) -> ResultLogFreq<Count> {
    defn!("({:?})", paths);
    let stdin_only: FPaths = vec![FPath::from(PATH_STDIN)];
    let paths_: &FPaths = if paths.is_empty() { &stdin_only } else { paths };

    let mut failures: Count = 0;
    let mut stdin_check = false;
    for path in paths_.iter() {
        if fpath_is_stdin(path) {
            if stdin_check {
                e_wrn!("passed special PATHS argument {:?} more than once", PATH_STDIN);
                continue;
            }
            stdin_check = true;
        }
        let mut reader = TimestampReader::new(config, path.clone());
        let result = reader.process(table);
        summaries.push(reader.into_summary());
        match result {
            Ok(_) => {}
            Err(err @ LogFreqError::Io { .. }) => {
                e_err!("{}", err);
                failures += 1;
            }
            Err(err) => {
                defx!("return Err {}", err);
                return Err(err);
            }
        }
    }
    defx!("return Ok({})", failures);

    Ok(failures)
}
