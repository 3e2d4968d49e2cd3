//! Classful address categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Classful category of an IPv4 address, derived from its first octet.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    /// Multicast, 224-239.
    D,
    /// Experimental, 240-255.
    E,
}

impl AddressClass {
    /// Default prefix length of the class, `None` for D and E.
    pub fn default_prefix(self) -> Option<u8> {
        match self {
            AddressClass::A => Some(8),
            AddressClass::B => Some(16),
            AddressClass::C => Some(24),
            AddressClass::D | AddressClass::E => None,
        }
    }

    /// Default mask of the class in dotted notation, `None` for D and E.
    pub fn default_mask(self) -> Option<&'static str> {
        match self {
            AddressClass::A => Some("255.0.0.0"),
            AddressClass::B => Some("255.255.0.0"),
            AddressClass::C => Some("255.255.255.0"),
            AddressClass::D | AddressClass::E => None,
        }
    }

    pub fn is_subnettable(self) -> bool {
        self.default_prefix().is_some()
    }

    /// First-octet range of the class, for user hints.
    pub fn first_octet_range(self) -> &'static str {
        match self {
            AddressClass::A => "1-126",
            AddressClass::B => "128-191",
            AddressClass::C => "192-223",
            AddressClass::D => "224-239",
            AddressClass::E => "240-254",
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
        };
        f.write_str(c)
    }
}

/// Result of classifying an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassInfo {
    pub class: AddressClass,
    pub default_mask: Option<&'static str>,
    pub default_prefix: Option<u8>,
    /// 127.x.x.x is reported as class A but must not be subnetted.
    pub is_loopback: bool,
}

/// Map an address to its class using only the first octet.
///
/// # Examples
/// ```
/// use vlsm_planner::models::{classify, AddressClass};
/// use std::net::Ipv4Addr;
/// let info = classify(Ipv4Addr::new(172, 16, 0, 0));
/// assert_eq!(info.class, AddressClass::B);
/// assert_eq!(info.default_prefix, Some(16));
/// ```
pub fn classify(addr: Ipv4Addr) -> ClassInfo {
    let first = addr.octets()[0];
    let class = match first {
        0..=127 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::D,
        240..=255 => AddressClass::E,
    };
    ClassInfo {
        class,
        default_mask: class.default_mask(),
        default_prefix: class.default_prefix(),
        is_loopback: first == 127,
    }
}
