//! Subnet engine.
//!
//! Pure functions deriving network properties from an address and a
//! validated [`SubnetMask`].

use crate::error::Result;
use crate::models::{
    parse_address, to_binary_string, Classification, IpClass, NetworkInfo, SubnetMask, MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Check that a mask is a run of 1-bits followed by a run of 0-bits.
///
/// All-zeros and all-ones are both accepted.
pub fn validate_mask_shape(bits: u32) -> bool {
    bits.leading_ones() + bits.trailing_zeros() == MAX_LENGTH as u32
}

/// Network address: address AND mask.
pub fn network_address(addr: Ipv4Addr, mask: SubnetMask) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & mask.bits())
}

/// Broadcast address: network address OR (NOT mask).
pub fn broadcast_address(addr: Ipv4Addr, mask: SubnetMask) -> Ipv4Addr {
    let network_bits = u32::from(network_address(addr, mask));
    Ipv4Addr::from(network_bits | !mask.bits())
}

/// Number of usable hosts: `2^h - 2` where `h` is the count of host bits.
///
/// The all-zero and all-one host parts are reserved for the network and
/// broadcast addresses, so /31 and /32 both give 0.
pub fn usable_hosts(mask: SubnetMask) -> u64 {
    let host_bits = mask.bits().count_zeros();
    if host_bits == 0 {
        return 0;
    }
    (1u64 << host_bits) - 2
}

/// CIDR prefix length, the number of 1-bits in the mask.
pub fn cidr_prefix(mask: SubnetMask) -> u8 {
    mask.bits().count_ones() as u8
}

/// Address class from the first octet.
///
/// 0, 127 (loopback) and 224-255 (multicast/experimental) have no class.
pub fn classify(addr: Ipv4Addr) -> Option<IpClass> {
    match addr.octets()[0] {
        1..=126 => Some(IpClass::A),
        128..=191 => Some(IpClass::B),
        192..=223 => Some(IpClass::C),
        _ => None,
    }
}

/// Classful when the mask prefix equals the default prefix of the address class.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_info::models::SubnetMask;
/// use subnet_info::processing::is_classful;
///
/// let addr = Ipv4Addr::new(10, 0, 0, 1);
/// let status = is_classful(addr, SubnetMask::from_prefix(8).unwrap());
/// assert!(status.is_classful());
/// assert_eq!(status.label(), "Class A");
/// ```
pub fn is_classful(addr: Ipv4Addr, mask: SubnetMask) -> Classification {
    match classify(addr) {
        Some(class) if class.default_prefix() == cidr_prefix(mask) => {
            Classification::classful(class)
        }
        _ => Classification::Classless,
    }
}

/// Validate an address and mask, then derive every [`NetworkInfo`] field.
///
/// Validation order is address format, mask format, mask shape. The first
/// failure is returned and nothing is computed.
///
/// # Arguments
/// * `address_text` - Dotted-decimal address, already trimmed by the caller
/// * `mask_text` - Dotted-decimal subnet mask, already trimmed by the caller
///
/// # Returns
/// * `Ok(NetworkInfo)` - All derived values
/// * `Err(SubnetError)` - `InvalidFormat` or `InvalidMaskShape`
pub fn analyze(address_text: &str, mask_text: &str) -> Result<NetworkInfo> {
    let address = parse_address(address_text)?;
    let mask: SubnetMask = mask_text.parse()?;

    Ok(network_info(address, mask))
}

/// Derive every [`NetworkInfo`] field from an already validated address and mask.
pub fn network_info(address: Ipv4Addr, mask: SubnetMask) -> NetworkInfo {
    log::debug!(
        "network_info address={address} ({}) mask={mask} ({})",
        to_binary_string(address),
        to_binary_string(mask.addr())
    );

    let info = NetworkInfo {
        address,
        mask,
        network_address: network_address(address, mask),
        broadcast_address: broadcast_address(address, mask),
        usable_hosts: usable_hosts(mask),
        cidr_prefix: cidr_prefix(mask),
        classification: is_classful(address, mask),
    };
    log::info!(
        "{address}/{prefix} network={network} broadcast={broadcast} hosts={hosts} {class}",
        prefix = info.cidr_prefix,
        network = info.network_address,
        broadcast = info.broadcast_address,
        hosts = info.usable_hosts,
        class = info.classification,
    );
    info
}
