// src/data/tokens.rs

//! Translate a user-passed time format of `%`-tokens into
//! 1. a regular expression that finds the timestamp substring in a line
//! 2. a chrono [`strftime`] pattern that parses the found substring
//!
//! Both are derived from one static table, [`TOKEN_RULES`].
//!
//! A recognized token is replaced by its fragment. Everything else, including
//! unrecognized `%`-tokens, is copied unchanged into both outputs.
//!
//! [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html

#![allow(non_camel_case_types)]

use crate::data::datetime::DateTimePattern_str;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// token rules
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A user-passed time format, e.g. `"%F %T"`.
pub type FormatSpec_str = str;

/// Regular expression fragment or pattern, passed to [`regex::bytes::Regex`].
///
/// [`regex::bytes::Regex`]: https://docs.rs/regex/1.11.1/regex/bytes/struct.Regex.html
pub type TimeRegex_str = str;

/// One token of a [`FormatSpec_str`], e.g. `"%T"`.
pub type Token_str = str;

/// Every token is a `'%'` followed by one ASCII character.
pub const TOKEN_LEN: usize = 2;

/// Leading character of a token.
pub const TOKEN_LEAD: char = '%';

/// Instructions to replace one token.
#[derive(Debug, Eq, Hash, PartialEq)]
pub struct TokenRule<'a> {
    /// the token, e.g. `"%Y"`
    pub token: &'a Token_str,
    /// regular expression fragment that matches any text the `pattern`
    /// fragment formats or parses
    pub regex: &'a TimeRegex_str,
    /// chrono strftime fragment
    pub pattern: &'a DateTimePattern_str,
    /// The token has seconds resolution.
    pub has_seconds: bool,
    /// Hardcoded self-test values. Each must be matched by `regex` and
    /// parsed by `pattern`.
    #[cfg(any(debug_assertions, test))]
    pub _test_cases: &'a [&'a str],
}

/// Declare a [`TokenRule`] more easily.
macro_rules! TR {
    (
        $token:literal,
        $regex:literal,
        $pattern:literal,
        $has_seconds:literal,
        $test_cases:expr,
    ) => {
        TokenRule {
            token: $token,
            regex: $regex,
            pattern: $pattern,
            has_seconds: $has_seconds,
            #[cfg(any(debug_assertions, test))]
            _test_cases: $test_cases,
        }
    };
}

pub const TOKEN_RULES_LEN: usize = 12;

/// The recognized tokens.
///
/// `%C` is a two-digit year. The chrono equivalent is `%y`; chrono `%C` is
/// the century. `69` to `99` is 19xx, `00` to `68` is 20xx.
///
/// `%S` accepts an optional fraction, e.g. `"05"`, `"05.123"` or `"05."`.
///
/// `%Z` is a zone name of three or four uppercase letters. It is matched but
/// not applied.
pub static TOKEN_RULES: [TokenRule; TOKEN_RULES_LEN] = [
    TR!("%Z", r"[A-Z]{3,4}", "%Z", false, &["UTC", "PST", "AEST"],),
    TR!("%z", r"[+-]\d{4}", "%z", false, &["+0000", "-0700", "+0930"],),
    TR!("%b", r"[A-Z][a-z][a-z]", "%b", false, &["Jan", "Sep", "Dec"],),
    TR!("%T", r"\d\d:\d\d:\d\d", "%H:%M:%S", true, &["00:00:00", "10:04:05", "23:59:59"],),
    TR!("%F", r"\d{4}-\d\d-\d\d", "%Y-%m-%d", false, &["2024-01-01", "1999-12-31", "2000-02-29"],),
    TR!("%C", r"\d\d", "%y", false, &["00", "24", "68", "69", "99"],),
    TR!("%H", r"\d\d", "%H", false, &["00", "09", "23"],),
    TR!("%M", r"\d\d", "%M", false, &["00", "04", "59"],),
    TR!("%S", r"\d\d(?:\.\d*)?", "%S%.f", true, &["00", "05", "59", "05.", "05.1", "05.123456"],),
    TR!("%m", r"\d\d", "%m", false, &["01", "06", "12"],),
    TR!("%d", r"\d\d", "%d", false, &["01", "15", "31"],),
    TR!("%Y", r"\d{4}", "%Y", false, &["0000", "1970", "2024"],),
];

/// Return the [`TokenRule`] for the token at the beginning of `s`.
pub fn token_rule_at(s: &str) -> Option<&'static TokenRule<'static>> {
    if !s.starts_with(TOKEN_LEAD) {
        return None;
    }
    TOKEN_RULES
        .iter()
        .find(|rule| s.starts_with(rule.token))
}

/// Replace every recognized token in `format` with the fragment chosen by
/// `fragment`. Other characters are copied as-is.
///
/// One left-to-right pass; a replaced fragment is never scanned again.
fn translate(
    format: &FormatSpec_str,
    fragment: fn(&'static TokenRule<'static>) -> &'static str,
) -> String {
    let mut out = String::with_capacity(format.len() * 4);
    let mut at: usize = 0;
    while at < format.len() {
        let rest = &format[at..];
        match token_rule_at(rest) {
            Some(rule) => {
                out.push_str(fragment(rule));
                at += TOKEN_LEN;
            }
            None => {
                // `at` is always on a char boundary
                let c = match rest.chars().next() {
                    Some(c) => c,
                    None => break,
                };
                out.push(c);
                at += c.len_utf8();
            }
        }
    }

    out
}

/// Translate `format` into a regular expression that matches the timestamp.
pub fn format_to_regex(format: &FormatSpec_str) -> String {
    defn!("({:?})", format);
    let regex = translate(format, |rule| rule.regex);
    defx!("return {:?}", regex);

    regex
}

/// Translate `format` into a regular expression with one capturing group
/// around the entire timestamp.
pub fn format_to_capture_regex(format: &FormatSpec_str) -> String {
    format!("({})", format_to_regex(format))
}

/// Translate `format` into a chrono strftime pattern.
pub fn format_to_pattern(format: &FormatSpec_str) -> String {
    defn!("({:?})", format);
    let pattern = translate(format, |rule| rule.pattern);
    defx!("return {:?}", pattern);

    pattern
}

/// Does the `format` have a token with seconds resolution (`%T` or `%S`)?
pub fn format_has_seconds(format: &FormatSpec_str) -> bool {
    TOKEN_RULES
        .iter()
        .filter(|rule| rule.has_seconds)
        .any(|rule| format.contains(rule.token))
}
