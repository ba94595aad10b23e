// src/common.rs

//! Common imports, type aliases, and other globals for _lflib_
//! (avoids circular imports).

use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
pub type FPaths = Vec<FPath>;
pub type FileSz = u64;

/// A general-purpose counting type
pub type Count = u64;

/// Line number within an input source, starting at `1`.
pub type LineNum = u64;

/// User-passed path signifying the data is read from STDIN.
pub const PATH_STDIN: &str = "-";

/// Returns `true` if `path` refers to STDIN.
#[inline(always)]
pub fn fpath_is_stdin(path: &FPath) -> bool {
    path.as_str() == PATH_STDIN
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// lines
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Single-byte newLine char as u8
#[allow(non_upper_case_globals)]
pub const NLu8: u8 = 10;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// custom Results enums
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `Result` Extended
/// for per-line searching functions
#[derive(Debug, PartialEq)]
pub enum ResultS3<T, E> {
    /// Contains the success data
    Found(T),
    /// Nothing to return, but no bad errors happened
    Done,
    /// Contains the error value, something bad happened
    Err(E),
}

impl<T, E> ResultS3<T, E> {
    /// Returns `true` if the result is [`Found`].
    ///
    /// [`Found`]: ResultS3::Found
    #[inline(always)]
    pub const fn is_found(&self) -> bool {
        matches!(*self, ResultS3::Found(_))
    }

    /// Returns `true` if the result is [`Done`].
    ///
    /// [`Done`]: ResultS3::Done
    #[inline(always)]
    pub const fn is_done(&self) -> bool {
        matches!(*self, ResultS3::Done)
    }

    /// Returns `true` if the result is [`Err`].
    ///
    /// [`Err`]: ResultS3::Err
    #[inline(always)]
    pub const fn is_err(&self) -> bool {
        matches!(*self, ResultS3::Err(_))
    }

    /// Converts from `ResultS3<T, E>` to [`Option<T>`], discarding the
    /// error, if any.
    #[inline(always)]
    pub fn ok(self) -> Option<T> {
        match self {
            ResultS3::Found(x) => Some(x),
            ResultS3::Done => None,
            ResultS3::Err(_) => None,
        }
    }
}

impl<T, E> fmt::Display for ResultS3<T, E>
where
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultS3::Found(_) => write!(f, "ResultS3::Found"),
            ResultS3::Done => write!(f, "ResultS3::Done"),
            ResultS3::Err(err) => write!(f, "ResultS3::Err({})", err),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// errors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Errors of _lflib_.
///
/// * [`Config`] and [`Regex`] are found at startup, before any input is read.
/// * [`Io`] is isolated to one input source; other sources are still
///   processed.
/// * [`Parse`] is a regex match that the parse pattern rejects. It means the
///   regex and the parse pattern disagree so the entire run is aborted.
///
/// [`Config`]: LogFreqError::Config
/// [`Regex`]: LogFreqError::Regex
/// [`Io`]: LogFreqError::Io
/// [`Parse`]: LogFreqError::Parse
#[derive(Debug)]
pub enum LogFreqError {
    /// Bad user-passed configuration.
    Config(String),
    /// The regular expression failed to compile.
    Regex(regex::Error),
    /// Failed to open or read an input source.
    Io {
        path: FPath,
        err: std::io::Error,
    },
    /// A captured timestamp could not be parsed.
    Parse {
        path: FPath,
        line_num: LineNum,
        value: String,
        pattern: String,
        reason: String,
    },
}

impl fmt::Display for LogFreqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFreqError::Config(message) => write!(f, "{}", message),
            LogFreqError::Regex(err) => write!(f, "bad time regex; {}", err),
            LogFreqError::Io { path, err } => write!(f, "{} for {:?}", err, path),
            LogFreqError::Parse {
                path,
                line_num,
                value,
                pattern,
                reason,
            } => write!(
                f,
                "parsing time {:?} as {:?}: {} ({}:{})",
                value, pattern, reason, path, line_num
            ),
        }
    }
}

impl std::error::Error for LogFreqError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogFreqError::Regex(err) => Some(err),
            LogFreqError::Io { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl From<regex::Error> for LogFreqError {
    fn from(err: regex::Error) -> Self {
        LogFreqError::Regex(err)
    }
}

pub type ResultLogFreq<T> = std::result::Result<T, LogFreqError>;
