//! Plain text report of a [`NetworkInfo`].
//!
//! Seven labeled lines, each ending in a newline, written to a
//! `subnet_info_<address>_<id>.txt` file.

use crate::models::{NetworkInfo, SubnetMask};
use std::error::Error;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

pub fn format_input_ip(addr: Ipv4Addr) -> String {
    format!("IP Address: {addr}\n")
}

pub fn format_subnet_mask(mask: SubnetMask) -> String {
    format!("Subnet Mask: {mask}\n")
}

pub fn format_classful_status(label: &str) -> String {
    format!("Classful/Classless: {label}\n")
}

pub fn format_network_address(addr: Ipv4Addr) -> String {
    format!("Network Address: {addr}\n")
}

pub fn format_broadcast_address(addr: Ipv4Addr) -> String {
    format!("Broadcast Address: {addr}\n")
}

pub fn format_num_hosts(hosts: u64) -> String {
    format!("Number of Hosts: {hosts}\n")
}

pub fn format_cidr_mask(prefix: u8) -> String {
    format!("CIDR Mask: /{prefix}\n")
}

/// Report lines in output order.
pub fn report_lines(info: &NetworkInfo) -> Vec<String> {
    vec![
        format_input_ip(info.address),
        format_subnet_mask(info.mask),
        format_classful_status(info.classification.label()),
        format_network_address(info.network_address),
        format_broadcast_address(info.broadcast_address),
        format_num_hosts(info.usable_hosts),
        format_cidr_mask(info.cidr_prefix),
    ]
}

/// Report file name for an address and identifier.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_info::output::report_file_name;
/// assert_eq!(
///     report_file_name(Ipv4Addr::new(10, 0, 0, 1), "42"),
///     "subnet_info_10.0.0.1_42.txt"
/// );
/// ```
pub fn report_file_name(addr: Ipv4Addr, student_id: &str) -> String {
    format!("subnet_info_{addr}_{student_id}.txt")
}

/// Write the report into `output_dir`, replacing any earlier file of the same name.
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err` - If the file can't be written
pub fn write_report(
    info: &NetworkInfo,
    output_dir: &Path,
    student_id: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = output_dir.join(report_file_name(info.address, student_id));
    log::info!("Writing report to {}", path.display());

    std::fs::write(&path, report_lines(info).concat())
        .map_err(|e| format!("Error writing report file {}: {e}", path.display()))?;

    Ok(path)
}
