//! Output formatting for subnet data.
//!
//! - [`terminal`] - fixed-label text report
//! - [`json`] - JSON rendering

mod json;
mod terminal;

pub use json::print_json;
pub use terminal::{print_report, report_lines};
