// src/config.rs

//! Implements [`Config`], everything derived once from the user-passed
//! arguments and read by the processing and reporting functions.

use crate::common::{LogFreqError, ResultLogFreq};
use crate::data::datetime::{
    DateTimeParseInstr,
    DateTimePattern_str,
    Granularity,
    Year,
    YEAR_FILL_MAX,
    YEAR_FILL_MIN,
};
use crate::data::tokens::{
    format_has_seconds,
    format_to_capture_regex,
    format_to_pattern,
};
use crate::printer::report::GroupBy;

use ::regex::bytes::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Capture group of the timestamp within the time regex.
pub const CAPTURE_GROUP_TIMESTAMP: usize = 1;

/// User-passed settings, prior to validation.
#[derive(Clone, Debug, Default)]
pub struct ConfigArgs {
    /// `-f`; sets both the regex and the time format
    pub format: Option<String>,
    /// `-re`
    pub regex: Option<String>,
    /// `-tf`
    pub time_format: Option<String>,
    /// `-g`
    pub group_by: GroupBy,
    /// `-bucket`; inferred from the time format if `None`
    pub bucket: Option<Granularity>,
    /// `-year`
    pub year_fill: Year,
}

/// Immutable processing configuration.
#[derive(Debug)]
pub struct Config {
    /// the effective time regex, as passed to `Regex::new`
    regex_pattern: String,
    regex: Regex,
    /// the effective user time format, e.g. `"%F %T"`
    time_format: String,
    parse_instr: DateTimeParseInstr,
    granularity: Granularity,
    group_by: GroupBy,
}

impl Config {
    /// Validate `args` and derive the regex, parse instructions and
    /// granularity.
    ///
    /// * `format` overrides `regex` and `time_format`.
    /// * `time_format` without a `regex` implies the regex is the
    ///   translated `time_format` within one capture group.
    /// * a `regex` is used verbatim.
    pub fn new(args: ConfigArgs) -> ResultLogFreq<Config> {
        defn!("({:?})", args);
        // an empty string is the same as not passed
        let format = args.format.filter(|s| !s.is_empty());
        let regex = args.regex.filter(|s| !s.is_empty());
        let (regex_pattern, time_format): (String, String) = match format {
            Some(format) => (format_to_capture_regex(&format), format),
            None => {
                let time_format: String = args.time_format.unwrap_or_default();
                let regex_pattern: String = match regex {
                    Some(regex) => regex,
                    None if !time_format.is_empty() => format_to_capture_regex(&time_format),
                    None => String::new(),
                };
                (regex_pattern, time_format)
            }
        };
        defo!("regex_pattern {:?}", regex_pattern);
        defo!("time_format {:?}", time_format);

        if regex_pattern.is_empty() {
            return Err(LogFreqError::Config(String::from("Time regex must not be empty (-re <regexp>)")));
        }
        if time_format.is_empty() {
            return Err(LogFreqError::Config(String::from("Time format must not be empty (-tf <format>)")));
        }
        if !(YEAR_FILL_MIN..=YEAR_FILL_MAX).contains(&args.year_fill) {
            return Err(LogFreqError::Config(format!(
                "Year {} must be within {}..={}",
                args.year_fill, YEAR_FILL_MIN, YEAR_FILL_MAX
            )));
        }

        let regex = Regex::new(&regex_pattern)?;
        // `captures_len` includes the implicit group 0
        let groups: usize = regex.captures_len() - 1;
        if groups != CAPTURE_GROUP_TIMESTAMP {
            return Err(LogFreqError::Config(format!(
                "Time regex {:?} must have exactly one capturing group, it has {}",
                regex_pattern, groups
            )));
        }

        let pattern: String = format_to_pattern(&time_format);
        let parse_instr = DateTimeParseInstr::new(&pattern, args.year_fill);
        let granularity: Granularity = match args.bucket {
            Some(bucket) => bucket,
            None => Granularity::default_for(format_has_seconds(&time_format)),
        };
        defx!("granularity {:?}, group_by {:?}", granularity, args.group_by);

        Ok(Config {
            regex_pattern,
            regex,
            time_format,
            parse_instr,
            granularity,
            group_by: args.group_by,
        })
    }

    pub fn regex_pattern(&self) -> &str {
        self.regex_pattern.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn time_format(&self) -> &str {
        self.time_format.as_str()
    }

    /// The chrono strftime pattern translated from the time format.
    pub fn pattern(&self) -> &DateTimePattern_str {
        self.parse_instr.pattern()
    }

    pub fn parse_instr(&self) -> &DateTimeParseInstr {
        &self.parse_instr
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn group_by(&self) -> GroupBy {
        self.group_by
    }

    /// Can the group key be derived from every bucket key? If not then
    /// those rows never start a new group.
    pub fn group_fits_bucket(&self) -> bool {
        self.group_by.fits(self.granularity)
    }
}
