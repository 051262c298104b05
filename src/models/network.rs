//! Derived network information and address classes.

use super::SubnetMask;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Historical address class, picked from the first octet.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IpClass {
    A,
    B,
    C,
}

impl IpClass {
    /// Default prefix length of the class: A=/8, B=/16, C=/24.
    pub fn default_prefix(&self) -> u8 {
        match self {
            IpClass::A => 8,
            IpClass::B => 16,
            IpClass::C => 24,
        }
    }
}

impl std::fmt::Display for IpClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let letter = match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
        };
        write!(f, "{letter}")
    }
}

/// Classful status of an address/mask pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    ClassA,
    ClassB,
    ClassC,
    Classless,
}

impl Classification {
    /// Classful network of the given class.
    pub fn classful(class: IpClass) -> Classification {
        match class {
            IpClass::A => Classification::ClassA,
            IpClass::B => Classification::ClassB,
            IpClass::C => Classification::ClassC,
        }
    }

    pub fn is_classful(&self) -> bool {
        !matches!(self, Classification::Classless)
    }

    /// Report label: `Class A`, `Class B`, `Class C` or `Classless`.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::ClassA => "Class A",
            Classification::ClassB => "Class B",
            Classification::ClassC => "Class C",
            Classification::Classless => "Classless",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Classification {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// Everything derived from one address and mask.
///
/// Built in one go by [`crate::analyze`]; there is no partially filled value.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    /// The address as entered.
    pub address: Ipv4Addr,
    /// The mask as entered.
    pub mask: SubnetMask,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    /// Host addresses excluding the network and broadcast addresses.
    pub usable_hosts: u64,
    /// Number of leading 1-bits in the mask (0-32).
    pub cidr_prefix: u8,
    pub classification: Classification,
}
