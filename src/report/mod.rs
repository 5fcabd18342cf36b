//! Report rendering for check runs

pub mod formatter;

pub use formatter::{JsonFormatter, ReportFormatter, TextFormatter};
