// tests/logfreq_tests.rs
//

//! Integration tests of the _lflib_ public API: configure, process files,
//! write the report.

#![allow(non_snake_case)]

extern crate lflib;

use lflib::common::{FPath, FPaths, LogFreqError};
use lflib::config::{Config, ConfigArgs};
use lflib::data::datetime::Granularity;
use lflib::data::frequency::FrequencyTable;
use lflib::printer::report::{write_report, GroupBy};
use lflib::readers::summary::Summaries;
use lflib::readers::timestampreader::process_paths;

use std::io::Write;

use ::tempfile::NamedTempFile;

fn temp_file(data: &str) -> NamedTempFile {
    let mut ntf = NamedTempFile::new().unwrap();
    ntf.write_all(data.as_bytes()).unwrap();

    ntf
}

fn fpath(ntf: &NamedTempFile) -> FPath {
    FPath::from(ntf.path().to_string_lossy())
}

/// run the entire pipeline, return the report text and the count of failed
/// paths
fn run(
    args: ConfigArgs,
    paths: &FPaths,
) -> Result<(String, u64), LogFreqError> {
    let config = Config::new(args)?;
    let mut table = FrequencyTable::new();
    let mut summaries = Summaries::new();
    let failures = process_paths(&config, paths, &mut table, &mut summaries)?;
    let mut buffer: Vec<u8> = Vec::new();
    write_report(&mut buffer, &table, config.group_by()).unwrap();

    Ok((String::from_utf8(buffer).unwrap(), failures))
}

const SYSLOG: &str = "\
Jan 31 23:59:58 host app[1]: a
Jan 31 23:59:59 host app[1]: b
Feb 01 00:00:01 host app[1]: c
  continuation line
Feb 01 00:10:00 host app[1]: d
";

#[test]
fn test_syslog_year_fill_group_month() {
    let ntf = temp_file(SYSLOG);
    let args = ConfigArgs {
        format: Some(String::from("%b %d %T")),
        group_by: GroupBy::Month,
        bucket: Some(Granularity::Hour),
        year_fill: 2023,
        ..Default::default()
    };
    let (report, failures) = run(args, &vec![fpath(&ntf)]).unwrap();
    assert_eq!(failures, 0);
    assert_eq!(
        report,
        "\
date time frequency cumulative
2023/01/31 23 2 2

2023/02/01 00 2 2
"
    );
}

#[test]
fn test_apache_regex_time_format() {
    let ntf = temp_file(
        "\
127.0.0.1 - - [10/Oct/2023:13:55:36 -0700] \"GET / HTTP/1.1\" 200 2326
127.0.0.1 - - [10/Oct/2023:13:56:01 -0700] \"GET /a HTTP/1.1\" 200 10
127.0.0.1 - - [11/Oct/2023:00:00:00 -0700] \"GET /b HTTP/1.1\" 404 0
",
    );
    let args = ConfigArgs {
        regex: Some(String::from(r"\[([^\]]+)\]")),
        time_format: Some(String::from("%d/%b/%Y:%T %z")),
        bucket: Some(Granularity::Day),
        ..Default::default()
    };
    let (report, _) = run(args, &vec![fpath(&ntf)]).unwrap();
    assert_eq!(
        report,
        "\
date time frequency cumulative
2023/10/10 2 2
2023/10/11 1 3
"
    );
}

#[test]
fn test_fractional_seconds() {
    let ntf = temp_file(
        "\
2024-03-01T12:00:00.100Z start
2024-03-01T12:00:00.900Z tick
2024-03-01T12:00:01Z tick
",
    );
    let args = ConfigArgs {
        format: Some(String::from("%Y-%m-%dT%H:%M:%S")),
        ..Default::default()
    };
    let (report, _) = run(args, &vec![fpath(&ntf)]).unwrap();
    assert_eq!(
        report,
        "\
date time frequency cumulative
2024/03/01 12:00:00 2 2
2024/03/01 12:00:01 1 3
"
    );
}

#[test]
fn test_missing_file_not_fatal() {
    let ntf = temp_file("2024-01-01 a\n");
    let args = ConfigArgs {
        format: Some(String::from("%F")),
        bucket: Some(Granularity::Year),
        ..Default::default()
    };
    let paths: FPaths = vec![FPath::from("/nonexistent/logfreq/a.log"), fpath(&ntf)];
    let (report, failures) = run(args, &paths).unwrap();
    assert_eq!(failures, 1);
    assert_eq!(report, "date time frequency cumulative\n2024 1 1\n");
}

#[test]
fn test_parse_mismatch_fatal() {
    let ntf = temp_file("2024-01-01 a\n2024-99-99 b\n");
    let args = ConfigArgs {
        format: Some(String::from("%Y-%m-%d")),
        ..Default::default()
    };
    match run(args, &vec![fpath(&ntf)]) {
        Err(LogFreqError::Parse { value, line_num, .. }) => {
            assert_eq!(value, "2024-99-99");
            assert_eq!(line_num, 2);
        }
        result => panic!("Expected Err(Parse), got {:?}", result),
    }
}

#[test]
fn test_config_error() {
    let args = ConfigArgs {
        regex: Some(String::from("(x)")),
        ..Default::default()
    };
    assert!(matches!(run(args, &vec![]), Err(LogFreqError::Config(_))));
}

/// zone names followed by punctuation, two-digit years around the century
/// pivot
#[test]
fn test_zone_name_two_digit_year() {
    let ntf = temp_file(
        "\
69-12-31 23:59:59 UTC, old
70-01-01 00:00:00 PST, old
24-01-01 10:00:00 CEST, new
24-01-01 10:30:00 AEST, new
",
    );
    let args = ConfigArgs {
        format: Some(String::from("%C-%m-%d %T %Z,")),
        bucket: Some(Granularity::Year),
        ..Default::default()
    };
    let (report, failures) = run(args, &vec![fpath(&ntf)]).unwrap();
    assert_eq!(failures, 0);
    assert_eq!(
        report,
        "\
date time frequency cumulative
1969 1 1
1970 1 2
2024 2 4
"
    );
}
