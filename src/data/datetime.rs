// src/data/datetime.rs

//! Parse timestamp substrings into an [`Instant`] and render an `Instant` as
//! a [`BucketKey`].
//!
//! Parsing is done by chrono [`strftime`] patterns produced by
//! [`format_to_pattern`]. A pattern may lack some fields, e.g. syslog
//! `"%b %d %T"` has no year and `"%T"` has no date at all. chrono refuses to
//! build a datetime from such a pattern so the missing fields are filled:
//! a filler pattern and filler data are prepended to the pattern and to the
//! parsed data (see [`DateTimeParseInstr`]).
//!
//! Rendering uses one fixed layout `YYYY/MM/DD HH:MM:SS` truncated from the
//! right per [`Granularity`]. Every field is zero-padded and ordered most
//! significant first so sorting `BucketKey` strings sorts chronologically.
//!
//! [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html
//! [`format_to_pattern`]: crate::data::tokens::format_to_pattern
//! [`BucketKey`]: crate::data::frequency::BucketKey

#![allow(non_camel_case_types)]

use crate::data::frequency::BucketKey;
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::str_to_String_noraw;

use std::borrow::Cow;
use std::fmt;

#[doc(hidden)]
pub use ::chrono::{
    Datelike, // adds method `.year()` onto `NaiveDateTime`
    FixedOffset,
    NaiveDate,
    NaiveDateTime,
    NaiveTime,
    ParseError,
    Timelike,
};
use ::chrono::format::{
    parse,
    parse_and_remainder,
    Fixed,
    Item,
    Numeric,
    Parsed,
    StrftimeItems,
};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Instant
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A _Year_ in a date
pub type Year = i32;

/// Crate `chrono` [`strftime`] formatting pattern, passed to
/// [`datetime_parse_from_str`].
///
/// [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html
pub type DateTimePattern_str = str;

/// For patterns without a year, the filler year.
///
/// The year printed is then `0000`.
pub const YEAR_FALLBACKDUMMY: Year = 0;

/// Smallest filler year; keeps the rendered year four digits wide.
pub const YEAR_FILL_MIN: Year = 0;
/// Largest filler year; keeps the rendered year four digits wide.
pub const YEAR_FILL_MAX: Year = 9999;

/// A parsed timestamp.
///
/// `datetime` is the wall-clock datetime as written in the log line.
/// `offset` is the parsed numeric timezone offset, if the pattern has one.
/// The `offset` is never applied to `datetime`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Instant {
    pub datetime: NaiveDateTime,
    pub offset: Option<FixedOffset>,
}

impl Instant {
    pub fn new(
        datetime: NaiveDateTime,
        offset: Option<FixedOffset>,
    ) -> Instant {
        Instant { datetime, offset }
    }

    /// Render this `Instant` at `granularity`.
    pub fn to_bucket_key(
        &self,
        granularity: Granularity,
    ) -> BucketKey {
        self.datetime
            .format(granularity.pattern())
            .to_string()
    }
}

impl fmt::Display for Instant {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{} {}", self.datetime, offset),
            None => write!(f, "{}", self.datetime),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Granularity
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The full bucket key layout. Every [`Granularity`] pattern is a prefix of
/// this.
pub const BUCKET_PATTERN: &DateTimePattern_str = "%Y/%m/%d %H:%M:%S";

/// Resolution of a [`BucketKey`].
///
/// Ordered from finest to coarsest.
///
/// [`BucketKey`]: crate::data::frequency::BucketKey
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Granularity {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

pub const GRANULARITY_ALL: [Granularity; 6] = [
    Granularity::Second,
    Granularity::Minute,
    Granularity::Hour,
    Granularity::Day,
    Granularity::Month,
    Granularity::Year,
];

impl Granularity {
    /// chrono strftime pattern that renders a [`BucketKey`] of this
    /// granularity.
    ///
    /// [`BucketKey`]: crate::data::frequency::BucketKey
    pub const fn pattern(&self) -> &'static DateTimePattern_str {
        match self {
            Granularity::Second => "%Y/%m/%d %H:%M:%S",
            Granularity::Minute => "%Y/%m/%d %H:%M",
            Granularity::Hour => "%Y/%m/%d %H",
            Granularity::Day => "%Y/%m/%d",
            Granularity::Month => "%Y/%m",
            Granularity::Year => "%Y",
        }
    }

    /// Length of a rendered [`BucketKey`] of this granularity.
    ///
    /// [`BucketKey`]: crate::data::frequency::BucketKey
    pub const fn key_len(&self) -> usize {
        match self {
            Granularity::Second => 19,
            Granularity::Minute => 16,
            Granularity::Hour => 13,
            Granularity::Day => 10,
            Granularity::Month => 7,
            Granularity::Year => 4,
        }
    }

    /// Default granularity for a user format.
    /// Seconds if the format has seconds resolution, else minutes.
    pub const fn default_for(has_seconds: bool) -> Granularity {
        if has_seconds {
            Granularity::Second
        } else {
            Granularity::Minute
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        let s = match self {
            Granularity::Second => "second",
            Granularity::Minute => "minute",
            Granularity::Hour => "hour",
            Granularity::Day => "day",
            Granularity::Month => "month",
            Granularity::Year => "year",
        };
        write!(f, "{}", s)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DateTimeParseInstr
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Separates the filler from the parsed data.
const FILL_SEP: &str = "|";

/// Which datetime fields does a chrono strftime pattern set?
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PatternFields {
    pub year: bool,
    pub month: bool,
    pub day: bool,
    pub hour: bool,
    pub minute: bool,
    /// has a numeric timezone offset, e.g. `%z`
    pub tz: bool,
}

impl PatternFields {
    /// Inspect the items of chrono strftime `pattern`.
    pub fn new(pattern: &DateTimePattern_str) -> PatternFields {
        let mut fields = PatternFields::default();
        for item in StrftimeItems::new(pattern) {
            match item {
                Item::Numeric(numeric, _pad) => match numeric {
                    Numeric::Year
                    | Numeric::YearMod100
                    | Numeric::IsoYear
                    | Numeric::IsoYearMod100 => fields.year = true,
                    Numeric::Month => fields.month = true,
                    Numeric::Day => fields.day = true,
                    Numeric::Ordinal
                    | Numeric::WeekFromSun
                    | Numeric::WeekFromMon
                    | Numeric::IsoWeek => {
                        fields.month = true;
                        fields.day = true;
                    }
                    Numeric::Hour | Numeric::Hour12 => fields.hour = true,
                    Numeric::Minute => fields.minute = true,
                    Numeric::Timestamp => fields.set_all(),
                    _ => {}
                },
                Item::Fixed(fixed) => match fixed {
                    Fixed::ShortMonthName | Fixed::LongMonthName => fields.month = true,
                    Fixed::TimezoneOffset
                    | Fixed::TimezoneOffsetColon
                    | Fixed::TimezoneOffsetDoubleColon
                    | Fixed::TimezoneOffsetTripleColon
                    | Fixed::TimezoneOffsetColonZ
                    | Fixed::TimezoneOffsetZ => fields.tz = true,
                    Fixed::RFC2822 | Fixed::RFC3339 => {
                        fields.set_all();
                        fields.tz = true;
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        fields
    }

    fn set_all(&mut self) {
        self.year = true;
        self.month = true;
        self.day = true;
        self.hour = true;
        self.minute = true;
    }
}

/// `Instr`uctions for `pars`ing a timestamp substring into an [`Instant`].
///
/// Built once from the user format and reused for every matched line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DateTimeParseInstr {
    /// chrono strftime pattern translated from the user format
    pattern: String,
    /// `pattern` with the filler pattern prepended; passed to chrono
    pattern_filled: String,
    /// filler data prepended to every parsed substring
    data_fill: String,
    fields: PatternFields,
}

impl DateTimeParseInstr {
    /// Prepare to parse with chrono strftime `pattern`. A pattern without a
    /// year uses `year_fill`.
    pub fn new(
        pattern: &DateTimePattern_str,
        year_fill: Year,
    ) -> DateTimeParseInstr {
        defn!("({:?}, {:?})", pattern, year_fill);
        let fields = PatternFields::new(pattern);
        defo!("fields {:?}", fields);

        let mut pattern_fill = String::with_capacity(16);
        let mut data_fill = String::with_capacity(16);
        if !fields.year {
            pattern_fill.push_str("%Y");
            data_fill.push_str(&format!("{:04}", year_fill));
        }
        if !fields.month {
            pattern_fill.push_str("%m");
            data_fill.push_str("01");
        }
        if !fields.day {
            pattern_fill.push_str("%d");
            data_fill.push_str("01");
        }
        if !fields.hour {
            pattern_fill.push_str("%H");
            data_fill.push_str("00");
        }
        if !fields.minute {
            pattern_fill.push_str("%M");
            data_fill.push_str("00");
        }
        let pattern_filled: String = if pattern_fill.is_empty() {
            String::from(pattern)
        } else {
            pattern_fill.push_str(FILL_SEP);
            data_fill.push_str(FILL_SEP);
            pattern_fill + pattern
        };
        defx!("pattern_filled {:?}, data_fill {:?}", pattern_filled, data_fill);

        DateTimeParseInstr {
            pattern: String::from(pattern),
            pattern_filled,
            data_fill,
            fields,
        }
    }

    /// The chrono strftime pattern, without filler.
    pub fn pattern(&self) -> &DateTimePattern_str {
        self.pattern.as_str()
    }

    pub fn fields(&self) -> &PatternFields {
        &self.fields
    }

    /// Parse `data` into an [`Instant`].
    ///
    /// All of `data` must be consumed by the pattern.
    pub fn parse(
        &self,
        data: &str,
    ) -> Result<Instant, ParseError> {
        defn!("(pattern {:?}, data {:?})", self.pattern_filled, str_to_String_noraw(data));
        let data_: Cow<str> = if self.data_fill.is_empty() {
            Cow::Borrowed(data)
        } else {
            Cow::Owned(format!("{}{}", self.data_fill, data))
        };
        let result = datetime_parse_from_str(&data_, &self.pattern_filled, self.fields.tz);
        defx!("return {:?}", result);

        result
    }
}

/// Two-digit years at or above this are 19xx, below are 20xx.
pub const YEAR_2DIGIT_PIVOT: i32 = 69;

/// A zone name (`%Z`) is at most this many ASCII uppercase letters.
pub const ZONE_NAME_LEN_MAX: usize = 4;

/// Skip the zone name at the start of `s`; at most [`ZONE_NAME_LEN_MAX`]
/// ASCII uppercase letters.
fn skip_zone_name(s: &str) -> &str {
    let len = s
        .bytes()
        .take(ZONE_NAME_LEN_MAX)
        .take_while(|b| b.is_ascii_uppercase())
        .count();

    &s[len..]
}

/// Skip a `'.'` at the start of `s` that has no fraction digits after it.
fn skip_bare_dot(s: &str) -> &str {
    match s.strip_prefix('.') {
        Some(rest) if !rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
        _ => s,
    }
}

/// Convert a [`&str`] to an [`Instant`].
///
/// - `data` to parse that has a datetime string
/// - strftime `pattern` to use for parsing
/// - `has_tz`, the `pattern` has a numeric timezone offset (`%z`, etc.)?
///
/// Differs from chrono [`NaiveDateTime::parse_from_str`] in three ways.
/// - A zone name `%Z` consumes only the leading zone letters, not all
///   text up to the next whitespace. The zone name is not applied.
/// - A fraction `%.f` accepts a bare `'.'` with no digits.
/// - A two-digit year `%y` of `69` to `99` is 19xx, else 20xx.
///
/// [`&str`]: str
/// [`NaiveDateTime::parse_from_str`]: https://docs.rs/chrono/0.4.40/chrono/naive/struct.NaiveDateTime.html#method.parse_from_str
pub fn datetime_parse_from_str(
    data: &str,
    pattern: &DateTimePattern_str,
    has_tz: bool,
) -> Result<Instant, ParseError> {
    let mut parsed = Parsed::new();
    let mut rest: &str = data;
    let mut items: Vec<Item> = Vec::with_capacity(pattern.len());
    for item in StrftimeItems::new(pattern) {
        match item {
            Item::Fixed(Fixed::TimezoneName) => {
                rest = parse_and_remainder(&mut parsed, rest, items.drain(..))?;
                rest = skip_zone_name(rest);
            }
            Item::Fixed(Fixed::Nanosecond) => {
                rest = parse_and_remainder(&mut parsed, rest, items.drain(..))?;
                rest = skip_bare_dot(rest);
                items.push(item);
            }
            _ => items.push(item),
        }
    }
    parse(&mut parsed, rest, items.iter())?;
    if parsed.year().is_none() && parsed.year_div_100().is_none() {
        if let Some(year_mod_100) = parsed.year_mod_100() {
            let century: i64 = if year_mod_100 >= YEAR_2DIGIT_PIVOT { 19 } else { 20 };
            parsed.set_year_div_100(century)?;
        }
    }
    // if `has_tz` then create a `DateTime` and keep the offset
    // else create a `NaiveDateTime`
    if has_tz {
        let dt = parsed.to_datetime()?;
        defñ!("to_datetime({:?}, {:?}) {:?}", data, pattern, dt);

        Ok(Instant::new(dt.naive_local(), Some(*dt.offset())))
    } else {
        let dt = parsed.to_naive_datetime_with_offset(0)?;
        defñ!("to_naive_datetime_with_offset({:?}, {:?}) {:?}", data, pattern, dt);

        Ok(Instant::new(dt, None))
    }
}

/// Create an [`Instant`] without an offset. Returns `None` for an invalid
/// datetime.
pub fn ymdhms(
    year: Year,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> Option<Instant> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, min, sec)?;

    Some(Instant::new(NaiveDateTime::new(date, time), None))
}
