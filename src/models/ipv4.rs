//! IPv4 address codec.
//!
//! Converts between dotted-decimal text, [`Ipv4Addr`] and a 32-element bit
//! sequence. Bits are octet-major with the most significant bit first, so
//! index 0 is the top bit of the first octet.

use crate::error::{Result, SubnetError};
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// An IPv4 address as a sequence of bits, MSB of the first octet at index 0.
pub type Bits = [bool; MAX_LENGTH as usize];

/// Four groups of ASCII digits separated by dots, nothing else.
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("Invalid Regex")
    })
}

/// Parse a dotted-decimal IPv4 address.
///
/// Each part must be plain decimal digits with a value in 0-255. Leading
/// zeros are accepted. Whitespace, signs, empty parts and any other count
/// of parts are rejected.
///
/// # Examples
/// ```
/// use subnet_info::models::parse_address;
/// assert_eq!(parse_address("192.168.1.1").unwrap().octets(), [192, 168, 1, 1]);
/// assert!(parse_address("999.1.1.1").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr> {
    let invalid = || SubnetError::InvalidFormat(text.to_string());

    let caps = get_dotted_quad_regex().captures(text).ok_or_else(invalid)?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        // u8 parse rejects anything above 255, including absurdly long digit runs
        *octet = caps[i + 1].parse().map_err(|_| invalid())?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Convert an address to its 32-bit sequence.
pub fn to_bits(addr: Ipv4Addr) -> Bits {
    let value = u32::from(addr);
    let mut bits = [false; MAX_LENGTH as usize];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = value & (1 << (31 - i)) != 0;
    }
    bits
}

/// Convert a 32-bit sequence back to an address. Inverse of [`to_bits`].
pub fn from_bits(bits: &Bits) -> Ipv4Addr {
    let value = bits
        .iter()
        .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit));
    Ipv4Addr::from(value)
}

/// Render an address as dotted binary, e.g. `11000000.10101000.00000001.00000001`.
pub fn to_binary_string(addr: Ipv4Addr) -> String {
    to_bits(addr)
        .chunks(8)
        .map(|octet| {
            octet
                .iter()
                .map(|&bit| if bit { '1' } else { '0' })
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join(".")
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_info::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefix(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}
