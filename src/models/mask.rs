//! Subnet mask model.
//!
//! A [`SubnetMask`] can only be built from a bit pattern of contiguous 1s
//! followed by contiguous 0s, so every engine function taking one works on a
//! validated mask.

use super::ipv4::{get_cidr_mask, parse_address};
use crate::error::{Result, SubnetError};
use crate::processing::validate_mask_shape;
use serde::Serialize;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// IPv4 subnet mask with a validated shape.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct SubnetMask(u32);

impl SubnetMask {
    /// Create a mask from an already parsed address.
    ///
    /// # Returns
    /// * `Ok(SubnetMask)` - The bit pattern is 1s followed by 0s
    /// * `Err(SubnetError::InvalidMaskShape)` - A 1-bit follows a 0-bit
    pub fn new(addr: Ipv4Addr) -> Result<SubnetMask> {
        let bits = u32::from(addr);
        if !validate_mask_shape(bits) {
            log::debug!("rejecting mask {addr}: 1-bit after 0-bit");
            return Err(SubnetError::InvalidMaskShape(addr));
        }
        Ok(SubnetMask(bits))
    }

    /// Create a mask from a prefix length, e.g. 24 for `255.255.255.0`.
    pub fn from_prefix(len: u8) -> Result<SubnetMask> {
        Ok(SubnetMask(get_cidr_mask(len)?))
    }

    /// The mask as a native 32-bit value.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// The mask in address form.
    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.0)
    }
}

impl FromStr for SubnetMask {
    type Err = SubnetError;

    /// Format check first, then shape check.
    fn from_str(s: &str) -> Result<SubnetMask> {
        SubnetMask::new(parse_address(s)?)
    }
}

impl TryFrom<Ipv4Addr> for SubnetMask {
    type Error = SubnetError;

    fn try_from(addr: Ipv4Addr) -> Result<SubnetMask> {
        SubnetMask::new(addr)
    }
}

impl std::fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.addr())
    }
}

impl Serialize for SubnetMask {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_from_str() {
        let mask: SubnetMask = "255.255.255.0".parse().unwrap();
        assert_eq!(mask.bits(), 0xFFFFFF00);
        assert_eq!(mask.addr(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(mask.to_string(), "255.255.255.0");
    }

    #[test]
    fn test_mask_shape_rejected() {
        assert_eq!(
            "255.0.255.0".parse::<SubnetMask>(),
            Err(SubnetError::InvalidMaskShape(Ipv4Addr::new(255, 0, 255, 0)))
        );
        assert_eq!(
            SubnetMask::try_from(Ipv4Addr::new(0, 255, 255, 0)),
            Err(SubnetError::InvalidMaskShape(Ipv4Addr::new(0, 255, 255, 0)))
        );
    }

    #[test]
    fn test_mask_format_checked_before_shape() {
        assert_eq!(
            "255.0.256.0".parse::<SubnetMask>(),
            Err(SubnetError::InvalidFormat("255.0.256.0".to_string()))
        );
    }

    #[test]
    fn test_mask_from_prefix() {
        assert_eq!(
            SubnetMask::from_prefix(20).unwrap().addr(),
            Ipv4Addr::new(255, 255, 240, 0)
        );
        assert_eq!(SubnetMask::from_prefix(0).unwrap().bits(), 0);
        assert_eq!(
            SubnetMask::from_prefix(40),
            Err(SubnetError::InvalidPrefix(40))
        );
    }

    #[test]
    fn test_mask_serialize() {
        let mask = SubnetMask::from_prefix(16).unwrap();
        assert_eq!(
            serde_json::to_string(&mask).unwrap(),
            "\"255.255.0.0\""
        );
    }
}
