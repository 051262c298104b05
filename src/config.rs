//! Command line arguments and resolved settings.

use clap::Parser;
use std::path::PathBuf;

/// Identifier used in the report file name when none is configured.
pub const DEFAULT_STUDENT_ID: &str = "123456789";

#[derive(Parser, Debug)]
#[command(name = "subnet-info")]
#[command(version)]
#[command(about = "Network address, broadcast, hosts and class of an IPv4 address and mask.")]
pub struct CommandLine {
    /// IPv4 address (x.x.x.x); prompted for when omitted
    #[arg(long)]
    pub ip: Option<String>,

    /// Subnet mask (x.x.x.x); prompted for when omitted
    #[arg(long)]
    pub mask: Option<String>,

    /// Identifier used in the report file name
    #[arg(long, env = "STUDENT_ID", default_value = DEFAULT_STUDENT_ID)]
    pub student_id: String,

    /// Directory the report file is written to
    #[arg(long, env = "SUBNET_INFO_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Don't write the report file
    #[arg(long)]
    pub no_file: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Settings for a run, resolved from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub student_id: String,
    pub output_dir: PathBuf,
    pub json: bool,
    pub write_file: bool,
}

impl From<&CommandLine> for Config {
    fn from(commands: &CommandLine) -> Self {
        Config {
            student_id: commands.student_id.clone(),
            output_dir: commands.output_dir.clone(),
            json: commands.json,
            write_file: !commands.no_file,
        }
    }
}
