// src/printer/mod.rs

//! The `printer` module is for printing user-facing output:
//! the frequency report to stdout ([`report`], [`printers`]) and the optional
//! processing summary to stderr ([`summary`]).
//!
//! [`report`]: crate::printer::report
//! [`printers`]: crate::printer::printers
//! [`summary`]: crate::printer::summary

pub mod printers;
pub mod report;
pub mod summary;
