// src/readers/mod.rs

//! "Readers" for _lflib_.
//!
//! ## Overview of readers
//!
//! * [`process_paths`] drives one [`TimestampReader`] per input source, in
//!   order, all counting into one [`FrequencyTable`].
//! * A `TimestampReader` reads lines, finds a timestamp in each with the
//!   regex of the [`Config`] and parses it into an [`Instant`].
//! * A `TimestampReader` records a [`Summary`] of its input source.
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [`Read`]: std::io::Read
//! [`process_paths`]: crate::readers::timestampreader::process_paths
//! [`TimestampReader`]: crate::readers::timestampreader::TimestampReader
//! [`FrequencyTable`]: crate::data::frequency::FrequencyTable
//! [`Config`]: crate::config::Config
//! [`Instant`]: crate::data::datetime::Instant
//! [`Summary`]: crate::readers::summary::Summary

pub mod helpers;
pub mod summary;
pub mod timestampreader;
