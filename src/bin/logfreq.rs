// src/bin/logfreq.rs

//! Driver program _logfreq_ drives the [_lflib_].
//!
//! Processes user-passed command-line arguments into a [`Config`].
//! Then processes each input source in order, counting the timestamp of
//! each line into one [`FrequencyTable`]. Finally prints the frequency
//! report to stdout and, if requested, a summary to stderr.
//!
//! [_lflib_]: lflib
//! [`Config`]: lflib::config::Config
//! [`FrequencyTable`]: lflib::data::frequency::FrequencyTable

#![allow(non_camel_case_types)]

use std::process::ExitCode;
use std::time::Instant;

use ::clap::{Parser, ValueEnum};
use ::const_format::concatcp;

use ::lflib::common::{Count, FPath, FPaths, LogFreqError};
use ::lflib::config::{Config, ConfigArgs};
use ::lflib::data::datetime::{Granularity, Year, YEAR_FALLBACKDUMMY};
use ::lflib::data::frequency::FrequencyTable;
#[allow(unused_imports)]
use ::lflib::debug::printers::{de_err, de_wrn, e_err, e_wrn};
use ::lflib::printer::printers::print_report;
use ::lflib::printer::report::GroupBy;
use ::lflib::printer::summary::print_summary;
use ::lflib::readers::summary::{summaries_failed, Summaries};
use ::lflib::readers::timestampreader::process_paths;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::si_trace_print::stack::stack_offset_set;

use ::anyhow;

// --------------------
// command-line parsing

/// general error exit value
const EXIT_ERR: i32 = 1;

/// Long flags that may also be passed with a single leading dash,
/// e.g. `-bucket day` or `-bucket=day`.
const CLI_SINGLE_DASH_LONGS: [&str; 5] = ["re", "tf", "bucket", "year", "summary"];

/// CLI enum that maps to [`GroupBy`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Group {
    none,
    day,
    month,
    year,
}

/// CLI enum that maps to [`Granularity`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Bucket {
    second,
    minute,
    hour,
    day,
    month,
    year,
}

const CLI_HELP_AFTER: &str = "\
Recognized time format tokens:
    %Y  4-digit year             %C  2-digit year
    %m  month 01-12              %b  abbreviated month name
    %d  day of month 01-31       %F  %Y-%m-%d
    %H  hour 00-23               %M  minute 00-59
    %S  second 00-59, optional fraction
    %T  %H:%M:%S
    %z  timezone offset +hhmm    %Z  timezone abbreviation
Other characters, including other %-tokens, are matched literally.

Without --bucket, the bucket is \"second\" if the time format has %S or %T,
else \"minute\".

Single-dash long options like \"-re\", \"-tf\", \"-bucket\", \"-year\" and
\"-summary\" are accepted.

Examples:
    logfreq -f '%F %T' app.log
    logfreq -f '%b %d %T' -year 2024 -bucket hour -g day /var/log/syslog
    logfreq -re '^\\[([^]]+)\\]' -tf '%d/%b/%Y:%T %z' -bucket day access.log";

/// `clap` command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "logfreq",
    // write expanded information for the `--version` output
    version = concatcp!(
        "\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Author: ", env!("CARGO_PKG_AUTHORS"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path(s) of log files.
    /// Path "-" or no paths reads STDIN.
    #[clap(
        required = false,
        verbatim_doc_comment,
    )]
    paths: Vec<String>,

    /// Time format of the timestamp, e.g. "%F %T".
    /// Sets both the time regex and the time format.
    /// Overrides --re and --tf.
    #[clap(
        short = 'f',
        long = "format",
        verbatim_doc_comment,
    )]
    format: Option<String>,

    /// Regular expression with exactly one capturing group around the
    /// timestamp. Requires --tf.
    #[clap(
        long = "re",
        verbatim_doc_comment,
    )]
    regex: Option<String>,

    /// Time format of the timestamp captured by --re.
    /// Without --re the time regex is derived from this.
    #[clap(
        long = "tf",
        verbatim_doc_comment,
    )]
    time_format: Option<String>,

    /// Print a blank line and restart the cumulative count at each new
    /// group.
    #[clap(
        required = false,
        short = 'g',
        long = "group",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Group::none,
    )]
    group: CLI_Group,

    /// Count timestamps per this time bucket.
    #[clap(
        required = false,
        long = "bucket",
        verbatim_doc_comment,
        value_enum,
    )]
    bucket: Option<CLI_Bucket>,

    /// Year for time formats without a year, e.g. "%b %d %T".
    #[clap(
        required = false,
        long = "year",
        verbatim_doc_comment,
        default_value_t = YEAR_FALLBACKDUMMY,
    )]
    year: Year,

    /// Print a summary of files processed to stderr.
    #[clap(
        short,
        long,
        verbatim_doc_comment,
    )]
    summary: bool,
}

/// Rewrite single-dash long options to double-dash long options,
/// e.g. `-bucket=day` to `--bucket=day`.
/// Arguments after `--` are not changed.
fn cli_normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut normalized: Vec<String> = Vec::new();
    let mut options_done = false;
    for arg in args.into_iter() {
        if options_done || arg == "--" {
            options_done = true;
            normalized.push(arg);
            continue;
        }
        let name: Option<&str> = arg
            .strip_prefix('-')
            .filter(|s| !s.starts_with('-'))
            .map(|s| s.split('=').next().unwrap_or(s));
        match name {
            Some(name) if CLI_SINGLE_DASH_LONGS.contains(&name) => {
                defo!("normalize {:?}", arg);
                normalized.push(format!("-{}", arg));
            }
            _ => normalized.push(arg),
        }
    }

    normalized
}

/// Parse `args` with `clap`.
///
/// A usage error exits with [`EXIT_ERR`]. `--help` and `--version` exit
/// successfully.
fn cli_parse_args<I>(args: I) -> CLI_Args
where
    I: IntoIterator<Item = String>,
{
    match CLI_Args::try_parse_from(cli_normalize_args(args)) {
        Ok(args) => args,
        Err(err) => {
            // `--help` and `--version` print to stdout
            if !err.use_stderr() {
                err.exit();
            }
            let _ = err.print();
            std::process::exit(EXIT_ERR);
        }
    }
}

/// Process user-passed command-line arguments into a [`Config`], the input
/// paths, and the `--summary` flag.
///
/// Exits with [`EXIT_ERR`] on any bad argument.
fn cli_process_args() -> (Config, FPaths, bool) {
    let args = cli_parse_args(std::env::args());

    defo!("args {:?}", args);

    // map `CLI_Group` to `GroupBy`
    let group_by: GroupBy = match args.group {
        CLI_Group::none => GroupBy::None,
        CLI_Group::day => GroupBy::Day,
        CLI_Group::month => GroupBy::Month,
        CLI_Group::year => GroupBy::Year,
    };
    // map `CLI_Bucket` to `Granularity`
    let bucket: Option<Granularity> = args.bucket.map(|bucket| match bucket {
        CLI_Bucket::second => Granularity::Second,
        CLI_Bucket::minute => Granularity::Minute,
        CLI_Bucket::hour => Granularity::Hour,
        CLI_Bucket::day => Granularity::Day,
        CLI_Bucket::month => Granularity::Month,
        CLI_Bucket::year => Granularity::Year,
    });

    let config_args = ConfigArgs {
        format: args.format,
        regex: args.regex,
        time_format: args.time_format,
        group_by,
        bucket,
        year_fill: args.year,
    };
    let config: Config = match Config::new(config_args) {
        Ok(config) => config,
        Err(err) => {
            e_err!("{}", err);
            std::process::exit(EXIT_ERR);
        }
    };
    if !config.group_fits_bucket() {
        e_wrn!(
            "group {} is finer than bucket {}; groups will not be separated",
            config.group_by(),
            config.granularity()
        );
    }

    let paths: FPaths = args
        .paths
        .into_iter()
        .map(FPath::from)
        .collect();
    defo!("paths {:?}", paths);

    (config, paths, args.summary)
}

/// Process all `paths` then print the report and the optional summary.
///
/// Returns the count of input sources that failed to open or read.
fn run(
    config: &Config,
    paths: &FPaths,
    cli_opt_summary: bool,
    start_time: Instant,
) -> anyhow::Result<Count> {
    defn!();
    let mut table = FrequencyTable::new();
    let mut summaries: Summaries = Summaries::with_capacity(paths.len() + 1);
    let result: Result<Count, LogFreqError> = process_paths(config, paths, &mut table, &mut summaries);
    let failures: Count = match result {
        Ok(failures) => failures,
        Err(err) => {
            if cli_opt_summary {
                let failures: Count = summaries_failed(&summaries);
                print_summary(config, &summaries, &table, failures, start_time.elapsed());
            }
            defx!("return Err");
            return Err(err.into());
        }
    };

    print_report(&table, config.group_by());
    if cli_opt_summary {
        print_summary(config, &summaries, &table, failures, start_time.elapsed());
    }
    defx!("return Ok({})", failures);

    Ok(failures)
}

/// Process the user-passed command-line arguments.
/// Start function `run`.
/// Determine a process return code.
pub fn main() -> ExitCode {
    let start_time = Instant::now();
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let (config, paths, cli_opt_summary) = cli_process_args();

    let exitcode = match run(&config, &paths, cli_opt_summary, start_time) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_failures) => ExitCode::FAILURE,
        Err(err) => {
            e_err!("{}", err);
            ExitCode::FAILURE
        }
    };
    defx!("exitcode {:?}", exitcode);

    exitcode
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
