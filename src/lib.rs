// src/lib.rs

//! _lflib_ is the library behind the `logfreq` command-line program.
//!
//! `logfreq` finds one timestamp in each line of log files, truncates each
//! timestamp to a chosen [`Granularity`] and prints how many lines fell into
//! each time bucket, with a running cumulative count.
//!
//! The flow of data:
//!
//! 1. a user time format like `"%F %T"` is translated by [`tokens`] into a
//!    regular expression and a chrono strftime pattern
//! 2. a [`Config`] is built once from those
//! 3. a [`TimestampReader`] reads the lines of each input source, finds the
//!    timestamp substring and parses it into an [`Instant`]
//! 4. each `Instant` is counted into a [`FrequencyTable`]
//! 5. the table is printed by [`report`]
//!
//! [`Granularity`]: crate::data::datetime::Granularity
//! [`tokens`]: crate::data::tokens
//! [`Config`]: crate::config::Config
//! [`TimestampReader`]: crate::readers::timestampreader::TimestampReader
//! [`Instant`]: crate::data::datetime::Instant
//! [`FrequencyTable`]: crate::data::frequency::FrequencyTable
//! [`report`]: crate::printer::report

pub mod common;
pub mod config;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
