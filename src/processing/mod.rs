//! Subnet calculations.
//!
//! Everything here is a pure function over an address and a validated mask;
//! [`analyze`] ties validation and the calculations together.

mod subnet;

// Re-export public functions
pub use subnet::{
    analyze, broadcast_address, cidr_prefix, classify, is_classful, network_address,
    network_info, usable_hosts, validate_mask_shape,
};
