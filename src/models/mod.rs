//! Domain models for subnet analysis.
//!
//! - address codec - dotted-decimal and bit-sequence codec for IPv4 addresses
//! - [`SubnetMask`] - mask with a validated shape
//! - [`NetworkInfo`] - everything derived from an address and mask

mod ipv4;
mod mask;
mod network;

// Re-export public types
pub use ipv4::{
    from_bits, get_cidr_mask, parse_address, to_binary_string, to_bits, Bits, MAX_LENGTH,
};
pub use mask::SubnetMask;
pub use network::{Classification, IpClass, NetworkInfo};
