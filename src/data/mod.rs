// src/data/mod.rs

//! The `data` module is specialized data containers and the functions
//! that derive them.
//!
//! ## Definitions of data
//!
//! ### Format
//!
//! A "format" is a user-passed string of `%`-tokens and literal characters,
//! e.g. `"%F %T"`. It is translated by [`tokens`] into a regular expression
//! and a chrono strftime pattern.
//!
//! ### Instant
//!
//! An [`Instant`] is a timestamp parsed from the part of a line matched by
//! the regular expression.
//!
//! ### BucketKey
//!
//! A [`BucketKey`] is an `Instant` rendered at a [`Granularity`],
//! e.g. `"2024/01/02 03"` for hours.
//!
//! ### FrequencyTable
//!
//! A [`FrequencyTable`] counts `BucketKey`s over all lines of all input
//! sources.
//!
//! [`tokens`]: crate::data::tokens
//! [`Instant`]: crate::data::datetime::Instant
//! [`Granularity`]: crate::data::datetime::Granularity
//! [`BucketKey`]: crate::data::frequency::BucketKey
//! [`FrequencyTable`]: crate::data::frequency::FrequencyTable

pub mod datetime;
pub mod frequency;
pub mod tokens;
