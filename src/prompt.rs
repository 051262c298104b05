//! Interactive prompting for an address and a mask.
//!
//! Bad input is reported and asked for again until a valid value is read.
//! Generic over the reader and writer so the loop can be driven from tests.

use crate::error::SubnetError;
use crate::models::{parse_address, SubnetMask};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::net::Ipv4Addr;

const INVALID_ADDRESS: &str =
    "Error: Invalid IP address. Please enter a valid IP in format x.x.x.x (0-255 for each octet)";
const INVALID_MASK_FORMAT: &str =
    "Error: Invalid subnet mask format. Please enter in format x.x.x.x (0-255 for each octet)";
const INVALID_MASK_SHAPE: &str =
    "Error: Invalid subnet mask. Mask must have contiguous 1s followed by 0s in binary.";

/// Print `prompt` and read one trimmed line.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a valid value was entered",
        ));
    }
    Ok(line.trim().to_string())
}

/// Ask for an IPv4 address until a valid one is entered.
pub fn prompt_address<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Ipv4Addr> {
    loop {
        let line = read_line(input, output, "Enter IP address (x.x.x.x): ")?;
        match parse_address(&line) {
            Ok(addr) => return Ok(addr),
            Err(e) => {
                log::debug!("prompt_address: {e}");
                writeln!(output, "{}", INVALID_ADDRESS.red())?;
            }
        }
    }
}

/// Ask for a subnet mask until one with a valid format and shape is entered.
pub fn prompt_mask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<SubnetMask> {
    loop {
        let line = read_line(input, output, "Enter Subnet Mask (x.x.x.x): ")?;
        match line.parse::<SubnetMask>() {
            Ok(mask) => return Ok(mask),
            Err(e) => {
                log::debug!("prompt_mask: {e}");
                let message = match e {
                    SubnetError::InvalidMaskShape(_) => INVALID_MASK_SHAPE,
                    _ => INVALID_MASK_FORMAT,
                };
                writeln!(output, "{}", message.red())?;
            }
        }
    }
}
