// src/tests/tokens_tests.rs

//! tests for `tokens.rs` functions

#![allow(non_snake_case)]

use crate::data::datetime::{DateTimeParseInstr, YEAR_FALLBACKDUMMY};
use crate::data::tokens::{
    format_has_seconds,
    format_to_capture_regex,
    format_to_pattern,
    format_to_regex,
    token_rule_at,
    TokenRule,
    TOKEN_LEAD,
    TOKEN_LEN,
    TOKEN_RULES,
    TOKEN_RULES_LEN,
};

use std::collections::HashSet;

use ::regex::Regex;
use ::test_case::test_case;

#[test]
fn test_TOKEN_RULES_tokens_unique() {
    let mut tokens: HashSet<&str> = HashSet::new();
    for rule in TOKEN_RULES.iter() {
        assert!(tokens.insert(rule.token), "duplicate token {:?}", rule.token);
    }
    assert_eq!(tokens.len(), TOKEN_RULES_LEN);
}

#[test]
fn test_TOKEN_RULES_tokens_wellformed() {
    for rule in TOKEN_RULES.iter() {
        assert_eq!(rule.token.len(), TOKEN_LEN, "token {:?}", rule.token);
        assert!(rule.token.starts_with(TOKEN_LEAD), "token {:?}", rule.token);
        assert!(!rule._test_cases.is_empty(), "token {:?} has no test cases", rule.token);
    }
}

/// every hardcoded test case must be matched entirely by the regex fragment
/// and parsed by the pattern fragment
#[test]
fn test_TOKEN_RULES_test_cases() {
    for rule in TOKEN_RULES.iter() {
        let rule: &TokenRule = rule;
        let regex = Regex::new(&format!("^(?:{})$", rule.regex)).unwrap();
        let instr = DateTimeParseInstr::new(rule.pattern, YEAR_FALLBACKDUMMY);
        for case in rule._test_cases.iter() {
            assert!(regex.is_match(case), "token {:?} regex {:?} did not match {:?}", rule.token, rule.regex, case);
            let result = instr.parse(case);
            assert!(
                result.is_ok(),
                "token {:?} pattern {:?} failed to parse {:?}; {:?}",
                rule.token,
                rule.pattern,
                case,
                result
            );
        }
    }
}

#[test_case("%F %T", r"\d{4}-\d\d-\d\d \d\d:\d\d:\d\d", "%Y-%m-%d %H:%M:%S"; "F T")]
#[test_case("%Y-%m-%dT%H:%M:%S", r"\d{4}-\d\d-\d\dT\d\d:\d\d:\d\d(?:\.\d*)?", "%Y-%m-%dT%H:%M:%S%.f"; "ISO")]
#[test_case("%b %d %T", r"[A-Z][a-z][a-z] \d\d \d\d:\d\d:\d\d", "%b %d %H:%M:%S"; "syslog")]
#[test_case("%d/%b/%Y:%T %z", r"\d\d/[A-Z][a-z][a-z]/\d{4}:\d\d:\d\d:\d\d [+-]\d{4}", "%d/%b/%Y:%H:%M:%S %z"; "apache")]
#[test_case("%C%m%d", r"\d\d\d\d\d\d", "%y%m%d"; "C")]
#[test_case("%F %T %Z", r"\d{4}-\d\d-\d\d \d\d:\d\d:\d\d [A-Z]{3,4}", "%Y-%m-%d %H:%M:%S %Z"; "Z")]
#[test_case("", "", ""; "empty")]
fn test_format_translate(
    format: &str,
    expect_regex: &str,
    expect_pattern: &str,
) {
    assert_eq!(format_to_regex(format), expect_regex);
    assert_eq!(format_to_pattern(format), expect_pattern);
}

#[test_case("no tokens here"; "literal")]
#[test_case("%Q %j %%"; "unrecognized tokens")]
#[test_case("%"; "lone lead")]
#[test_case("ÄÖÜ → €"; "non-ascii")]
fn test_format_translate_passthrough(format: &str) {
    assert_eq!(format_to_regex(format), format);
    assert_eq!(format_to_pattern(format), format);
}

#[test]
fn test_format_translate_mixed_nonascii() {
    assert_eq!(format_to_regex("é%Y€%m"), r"é\d{4}€\d\d");
    assert_eq!(format_to_pattern("é%Y€%m"), "é%Y€%m");
}

/// the chrono fragment of `%T` has other tokens in it; they must not be
/// translated again
#[test]
fn test_format_translate_single_pass() {
    assert_eq!(format_to_pattern("%T"), "%H:%M:%S");
    assert_eq!(format_to_pattern("%S"), "%S%.f");
    assert_eq!(format_to_regex("%T"), r"\d\d:\d\d:\d\d");
}

#[test]
fn test_format_to_capture_regex() {
    assert_eq!(format_to_capture_regex("%Y"), r"(\d{4})");
    let regex = Regex::new(&format_to_capture_regex("%F %T")).unwrap();
    let captures = regex
        .captures("x 2024-01-02 03:04:05 y")
        .unwrap();
    assert_eq!(&captures[1], "2024-01-02 03:04:05");
}

#[test_case("%F %T", true)]
#[test_case("%Y%m%d%H%M%S", true)]
#[test_case("%b %d %H:%M", false)]
#[test_case("%F", false)]
#[test_case("", false)]
fn test_format_has_seconds(
    format: &str,
    expect: bool,
) {
    assert_eq!(format_has_seconds(format), expect);
}

#[test_case("%Yabc", Some("%Y"))]
#[test_case("%T", Some("%T"))]
#[test_case("%z", Some("%z"))]
#[test_case("%Z", Some("%Z"))]
#[test_case("Y%", None)]
#[test_case("%", None)]
#[test_case("%Q", None)]
#[test_case("", None)]
fn test_token_rule_at(
    s: &str,
    expect: Option<&str>,
) {
    assert_eq!(token_rule_at(s).map(|rule| rule.token), expect);
}
