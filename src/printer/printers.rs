// src/printer/printers.rs

//! Functions to write the report and other user-facing output to stdout and
//! stderr.

use crate::data::frequency::FrequencyTable;
#[allow(unused_imports)]
use crate::debug::printers::{de_err, de_wrn, e_err, e_wrn};
use crate::printer::report::{write_report, GroupBy};

use std::io::Write;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Safely write the `buffer` to stdout with help of [`StdoutLock`].
///
/// [`StdoutLock`]: std::io::StdoutLock
pub fn write_stdout(buffer: &[u8]) {
    let stdout = std::io::stdout();
    let mut stdout_lock = stdout.lock();
    let _stderr_lock = std::io::stderr().lock();
    match stdout_lock.write_all(buffer) {
        Ok(_) => {}
        Err(_err) => {
            // XXX: this will print when this program stdout is truncated, like to due to `head`
            //          Broken pipe (os error 32)
            //      Not sure if anything should be done about it
            de_err!("stdout_lock.write_all(buffer@{:p} (len {})) error {}", buffer, buffer.len(), _err);
        }
    }
    match stdout_lock.flush() {
        Ok(_) => {}
        Err(_err) => {
            de_err!("stdout_lock.flush() error {}", _err);
        }
    }
}

/// Safely write the `buffer` to stderr with help of [`StderrLock`].
///
/// [`StderrLock`]: std::io::StderrLock
pub fn write_stderr(buffer: &[u8]) {
    let mut stderr_lock = std::io::stderr().lock();
    match stderr_lock.write_all(buffer) {
        Ok(_) => {}
        Err(_err) => {
            de_err!("stderr_lock.write_all(buffer@{:p} (len {})) error {}", buffer, buffer.len(), _err);
        }
    }
    match stderr_lock.flush() {
        Ok(_) => {}
        Err(_err) => {
            de_err!("stderr flushing error {}", _err);
        }
    }
}

/// Print the frequency report of `table` to stdout.
pub fn print_report(
    table: &FrequencyTable,
    group_by: GroupBy,
) {
    defn!("(table len {}, group_by {:?})", table.len(), group_by);
    // 32 bytes is enough for most rows, e.g. "2024/01/02 03:04:05 12 345\n"
    let mut buffer: Vec<u8> = Vec::with_capacity((table.len() + 2) * 32);
    match write_report(&mut buffer, table, group_by) {
        Ok(_) => write_stdout(&buffer),
        Err(err) => {
            // writing to a `Vec` does not fail in practice
            e_err!("write_report failed {}", err);
        }
    }
    defx!();
}
