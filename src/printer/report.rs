// src/printer/report.rs

//! The frequency report: a header, then one row per [`BucketKey`] in
//! chronological order with the count and a cumulative count.
//!
//! Rows may be partitioned into groups by [`GroupBy`]. A blank separator
//! line precedes each new group and the cumulative count restarts.
//!
//! [`BucketKey`]: crate::data::frequency::BucketKey

use crate::common::Count;
use crate::data::datetime::Granularity;
use crate::data::frequency::FrequencyTable;

use std::fmt;
use std::io::Write;

use ::lazy_static::lazy_static;
use ::more_asserts::debug_assert_le;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// First line of the report.
pub const REPORT_HEADER: &str = "date time frequency cumulative";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GroupBy
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

lazy_static! {
    static ref REGEX_GROUP_DAY: Regex = Regex::new(r"^\d{4}/\d\d/\d\d").unwrap();
    static ref REGEX_GROUP_MONTH: Regex = Regex::new(r"^\d{4}/\d\d").unwrap();
    static ref REGEX_GROUP_YEAR: Regex = Regex::new(r"^\d{4}").unwrap();
}

/// How report rows are partitioned.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum GroupBy {
    /// one group; the cumulative count never restarts
    #[default]
    None,
    Day,
    Month,
    Year,
}

impl GroupBy {
    /// The [`Granularity`] of this group's key.
    pub const fn granularity(&self) -> Option<Granularity> {
        match self {
            GroupBy::None => None,
            GroupBy::Day => Some(Granularity::Day),
            GroupBy::Month => Some(Granularity::Month),
            GroupBy::Year => Some(Granularity::Year),
        }
    }

    /// Regex that matches the group key at the start of a `BucketKey`.
    pub fn regex(&self) -> Option<&'static Regex> {
        match self {
            GroupBy::None => None,
            GroupBy::Day => Some(&*REGEX_GROUP_DAY),
            GroupBy::Month => Some(&*REGEX_GROUP_MONTH),
            GroupBy::Year => Some(&*REGEX_GROUP_YEAR),
        }
    }

    /// Can a group key be derived from every `BucketKey` of `bucket`?
    ///
    /// Not when the group is finer than the bucket, e.g. grouping by day
    /// keys `"2024/01"`.
    pub fn fits(
        &self,
        bucket: Granularity,
    ) -> bool {
        match self.granularity() {
            None => true,
            Some(granularity) => granularity >= bucket,
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        let s = match self {
            GroupBy::None => "none",
            GroupBy::Day => "day",
            GroupBy::Month => "month",
            GroupBy::Year => "year",
        };
        write!(f, "{}", s)
    }
}

/// The group key of `key`, e.g. `"2024/01"` of `"2024/01/02 03:04"` for
/// [`GroupBy::Month`].
///
/// `None` for `GroupBy::None` or when `key` is too coarse.
pub fn group_key<'a>(
    key: &'a str,
    group_by: GroupBy,
) -> Option<&'a str> {
    let regex = group_by.regex()?;

    regex
        .find(key)
        .map(|m| m.as_str())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ReportRow
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One line of the report.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReportRow<'a> {
    Header,
    /// blank line between groups
    Separator,
    Bucket {
        key: &'a str,
        count: Count,
        cumulative: Count,
    },
}

impl fmt::Display for ReportRow<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            ReportRow::Header => write!(f, "{}", REPORT_HEADER),
            ReportRow::Separator => Ok(()),
            ReportRow::Bucket {
                key,
                count,
                cumulative,
            } => write!(f, "{} {} {}", key, count, cumulative),
        }
    }
}

/// Create all rows of the report for `table`, in order.
///
/// When the group key of a row differs from the previous group key then a
/// [`Separator`] is inserted and the cumulative count restarts. The first
/// row never has a separator.
///
/// A row without a group key (see [`group_key`]) stays in the current group.
///
/// [`Separator`]: ReportRow::Separator
pub fn report_rows(
    table: &FrequencyTable,
    group_by: GroupBy,
) -> Vec<ReportRow<'_>> {
    defn!("(table len {}, group_by {:?})", table.len(), group_by);
    let entries = table.sorted();
    let mut rows: Vec<ReportRow> = Vec::with_capacity(entries.len() + 1);
    rows.push(ReportRow::Header);

    let mut cumulative: Count = 0;
    let mut group_prev: Option<&str> = None;
    for (key, count) in entries.into_iter() {
        if let Some(group) = group_key(key, group_by) {
            match group_prev {
                Some(prev) if prev != group => {
                    defo!("group change {:?} → {:?}", prev, group);
                    rows.push(ReportRow::Separator);
                    cumulative = 0;
                }
                _ => {}
            }
            group_prev = Some(group);
        }
        cumulative += count;
        debug_assert_le!(cumulative, table.total());
        rows.push(ReportRow::Bucket {
            key: key.as_str(),
            count,
            cumulative,
        });
    }
    defx!("return {} rows", rows.len());

    rows
}

/// Write the report for `table` to `writer`, one row per line.
pub fn write_report<W: Write>(
    writer: &mut W,
    table: &FrequencyTable,
    group_by: GroupBy,
) -> std::io::Result<()> {
    for row in report_rows(table, group_by).iter() {
        writeln!(writer, "{}", row)?;
    }

    Ok(())
}
