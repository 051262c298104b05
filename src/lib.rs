//! IPv4 subnet information.
//!
//! Derives the network address, broadcast address, usable host count, CIDR
//! prefix and classful status of an IPv4 address and subnet mask, and renders
//! them as a labeled report.
//!
//! ```
//! let info = subnet_info::analyze("192.168.1.130", "255.255.255.0").unwrap();
//! assert_eq!(info.network_address.to_string(), "192.168.1.0");
//! assert_eq!(info.usable_hosts, 254);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod prompt;

use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use config::{CommandLine, Config};
use models::{parse_address, SubnetMask};

pub use error::SubnetError;
pub use models::NetworkInfo;
pub use processing::analyze;

/// Get the address and mask from the command line, prompting for whichever is missing.
///
/// Values given as flags are trimmed and validated once; a bad flag value is an
/// error. Prompted values are asked for again until valid.
pub fn get_network_info<R: BufRead, W: Write>(
    commands: &CommandLine,
    input: &mut R,
    output: &mut W,
) -> Result<NetworkInfo, Box<dyn Error>> {
    let address = match &commands.ip {
        Some(ip) => parse_address(ip.trim())?,
        None => prompt::prompt_address(input, output)?,
    };
    let mask = match &commands.mask {
        Some(mask) => mask.trim().parse::<SubnetMask>()?,
        None => prompt::prompt_mask(input, output)?,
    };
    Ok(processing::network_info(address, mask))
}

/// Write the report file (unless disabled) and print the results.
///
/// # Returns
/// * `Ok(Some(path))` - The report file that was written
/// * `Ok(None)` - Report file disabled in `cfg`
pub fn generate_output(
    info: &NetworkInfo,
    cfg: &Config,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let path = if cfg.write_file {
        Some(output::write_report(info, &cfg.output_dir, &cfg.student_id)?)
    } else {
        log::info!("Report file disabled");
        None
    };

    if cfg.json {
        println!("{}", output::to_json(info)?);
    } else {
        if let Some(path) = &path {
            println!("\nOutput file generated: {}", path.display());
        }
        output::print_results(info);
    }
    Ok(path)
}
