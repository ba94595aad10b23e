// src/printer/summary.rs

//! CLI option `--summary` printing functions.
//! Only used by `logfreq.rs`.

use crate::common::{Count, FileSz};
use crate::config::Config;
use crate::data::frequency::FrequencyTable;
#[allow(unused_imports)]
use crate::debug::printers::de_err;
use crate::printer::printers::write_stderr;
use crate::readers::helpers::fpath_display;
use crate::readers::summary::{Summaries, Summary};

use std::io::Write;
use std::time::Duration;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// For printing various levels of indentation.
const OPT_SUMMARY_PRINT_INDENT1: &str = "  ";
const OPT_SUMMARY_PRINT_INDENT2: &str = "      ";

/// Print the settings derived from the user-passed arguments.
fn write_summary_config<W: Write>(
    writer: &mut W,
    config: &Config,
) -> std::io::Result<()> {
    writeln!(writer, "Settings:")?;
    writeln!(writer, "{}time format   : {:?}", OPT_SUMMARY_PRINT_INDENT1, config.time_format())?;
    writeln!(writer, "{}time regex    : {:?}", OPT_SUMMARY_PRINT_INDENT1, config.regex_pattern())?;
    writeln!(writer, "{}parse pattern : {:?}", OPT_SUMMARY_PRINT_INDENT1, config.pattern())?;
    writeln!(writer, "{}bucket        : {}", OPT_SUMMARY_PRINT_INDENT1, config.granularity())?;
    writeln!(writer, "{}group         : {}", OPT_SUMMARY_PRINT_INDENT1, config.group_by())?;

    Ok(())
}

/// Print one input source's [`Summary`] (multiple lines).
fn write_file_summary<W: Write>(
    writer: &mut W,
    summary: &Summary,
) -> std::io::Result<()> {
    writeln!(writer, "{}{:?}", OPT_SUMMARY_PRINT_INDENT1, fpath_display(&summary.path))?;
    writeln!(writer, "{}bytes         : {}", OPT_SUMMARY_PRINT_INDENT2, summary.bytes)?;
    writeln!(writer, "{}lines         : {}", OPT_SUMMARY_PRINT_INDENT2, summary.lines)?;
    writeln!(writer, "{}lines matched : {}", OPT_SUMMARY_PRINT_INDENT2, summary.lines_matched)?;
    writeln!(writer, "{}lines skipped : {}", OPT_SUMMARY_PRINT_INDENT2, summary.lines_unmatched())?;
    if let Some(err) = &summary.error {
        writeln!(writer, "{}Error: {}", OPT_SUMMARY_PRINT_INDENT2, err)?;
    }

    Ok(())
}

/// Write the entire `--summary` to `writer`.
pub fn write_summary<W: Write>(
    writer: &mut W,
    config: &Config,
    summaries: &Summaries,
    table: &FrequencyTable,
    failures: Count,
    elapsed: Duration,
) -> std::io::Result<()> {
    writeln!(writer)?;
    write_summary_config(writer, config)?;

    writeln!(writer, "\nFiles:")?;
    let mut bytes: FileSz = 0;
    let mut lines: Count = 0;
    let mut lines_matched: Count = 0;
    for summary in summaries.iter() {
        write_file_summary(writer, summary)?;
        bytes += summary.bytes;
        lines += summary.lines;
        lines_matched += summary.lines_matched;
    }

    writeln!(writer, "\nTotals:")?;
    writeln!(writer, "{}files         : {}", OPT_SUMMARY_PRINT_INDENT1, summaries.len())?;
    writeln!(writer, "{}files failed  : {}", OPT_SUMMARY_PRINT_INDENT1, failures)?;
    writeln!(writer, "{}bytes         : {}", OPT_SUMMARY_PRINT_INDENT1, bytes)?;
    writeln!(writer, "{}lines         : {}", OPT_SUMMARY_PRINT_INDENT1, lines)?;
    writeln!(writer, "{}lines matched : {}", OPT_SUMMARY_PRINT_INDENT1, lines_matched)?;
    writeln!(writer, "{}buckets       : {}", OPT_SUMMARY_PRINT_INDENT1, table.len())?;
    writeln!(writer, "{}timestamps    : {}", OPT_SUMMARY_PRINT_INDENT1, table.total())?;
    writeln!(writer, "\nProgram Run Time: {:.3} (seconds)", elapsed.as_secs_f64())?;

    Ok(())
}

/// Print the `--summary` to stderr.
pub fn print_summary(
    config: &Config,
    summaries: &Summaries,
    table: &FrequencyTable,
    failures: Count,
    elapsed: Duration,
) {
    defn!("({} summaries)", summaries.len());
    let mut buffer: Vec<u8> = Vec::with_capacity(1024);
    match write_summary(&mut buffer, config, summaries, table, failures, elapsed) {
        Ok(_) => write_stderr(&buffer),
        Err(_err) => {
            de_err!("write_summary failed {}", _err);
        }
    }
    defx!();
}
