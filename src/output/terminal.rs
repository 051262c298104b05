//! Terminal output.

use crate::models::NetworkInfo;
use colored::Colorize;

use super::report::report_lines;

const RESULTS_HEADER: &str = "=== Network Analysis Results ===";

/// Console rendering of the report: header, report lines, closing rule.
pub fn format_results(info: &NetworkInfo) -> String {
    let mut out = format!("{}\n", RESULTS_HEADER.bold());
    for line in report_lines(info) {
        out.push_str(&line);
    }
    out.push_str(&"=".repeat(RESULTS_HEADER.len()));
    out.push('\n');
    out
}

/// Print the report to stdout.
pub fn print_results(info: &NetworkInfo) {
    println!();
    print!("{}", format_results(info));
}

/// Program banner shown before prompting.
pub fn print_banner() {
    let rule = "=".repeat(50);
    println!("{rule}");
    println!("{}", "Network Investigation Tool".green().bold());
    println!("{rule}");
    println!();
}
