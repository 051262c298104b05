//! Error types for address and mask validation.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Reasons an address or mask is rejected before any subnet math runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Not four dot-separated decimal octets in 0-255.
    #[error("invalid IPv4 format: {0:?} (expected x.x.x.x with each octet 0-255)")]
    InvalidFormat(String),

    /// Well-formed mask with a 1-bit after a 0-bit.
    #[error("invalid subnet mask {0}: mask must have contiguous 1s followed by 0s")]
    InvalidMaskShape(Ipv4Addr),

    #[error("prefix length /{0} is too long")]
    InvalidPrefix(u8),
}

pub type Result<T> = std::result::Result<T, SubnetError>;
