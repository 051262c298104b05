//! Output formatting for analysis results.
//!
//! This module handles formatting and outputting a [`crate::models::NetworkInfo`]:
//! - report - labeled text lines and the report file
//! - terminal - console output with colors
//! - json - JSON rendering

mod json;
mod report;
mod terminal;

pub use json::to_json;
pub use report::{
    format_broadcast_address, format_cidr_mask, format_classful_status, format_input_ip,
    format_network_address, format_num_hosts, format_subnet_mask, report_file_name, report_lines,
    write_report,
};
pub use terminal::{format_results, print_banner, print_results};
