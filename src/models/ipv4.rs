//! IPv4 address codec and CIDR helpers.
//!
//! Provides the dotted-decimal <-> `u32` conversions every other component
//! builds on, plus the [`Ipv4`] CIDR value used for the parent network.

use crate::error::VlsmError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Split a dotted-decimal string into its four octets.
///
/// Every group must be non-empty, digits only and at most 255. Leading
/// zeros are rejected, so `010` is never read as octal or as ten.
pub fn parse_octets(dotted: &str) -> Result<[u8; 4], VlsmError> {
    if dotted.matches('.').count() != 3 {
        return Err(VlsmError::Format(format!(
            "'{dotted}' must contain exactly three dots"
        )));
    }

    let mut octets = [0u8; 4];
    for (i, group) in dotted.split('.').enumerate() {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VlsmError::Format(format!(
                "'{group}' in '{dotted}' is not a decimal octet"
            )));
        }
        if group.len() > 1 && group.starts_with('0') {
            return Err(VlsmError::Format(format!(
                "'{group}' in '{dotted}' has a leading zero"
            )));
        }
        octets[i] = group.parse::<u8>().map_err(|_| {
            VlsmError::Format(format!("'{group}' in '{dotted}' is out of range 0-255"))
        })?;
    }
    Ok(octets)
}

/// Convert a dotted-decimal string to its 32-bit value.
///
/// # Examples
/// ```
/// use vlsm_planner::models::octets_to_int;
/// assert_eq!(octets_to_int("172.16.0.0").unwrap(), 0xAC10_0000);
/// ```
pub fn octets_to_int(dotted: &str) -> Result<u32, VlsmError> {
    parse_octets(dotted).map(u32::from_be_bytes)
}

/// Convert a 32-bit value back to dotted-decimal notation.
pub fn int_to_octets(value: u32) -> String {
    let [a, b, c, d] = value.to_be_bytes();
    format!("{a}.{b}.{c}.{d}")
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vlsm_planner::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, VlsmError> {
    if len > MAX_LENGTH {
        Err(VlsmError::Format(format!("/{len} is longer than 32 bits")))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Number of addresses in a block with the given prefix, including network and broadcast.
pub fn block_size(len: u8) -> Result<u64, VlsmError> {
    if len > MAX_LENGTH {
        Err(VlsmError::Format(format!("/{len} is longer than 32 bits")))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, VlsmError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, VlsmError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, VlsmError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| VlsmError::Format(format!("'{addr_cidr}' is not address/prefix")))?;
        let addr = Ipv4Addr::from(octets_to_int(addr)?);
        if mask.is_empty() || !mask.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VlsmError::Format(format!("'{mask}' is not a prefix length")));
        }
        let mask: u8 = mask
            .parse()
            .map_err(|_| VlsmError::Format(format!("'{mask}' is not a prefix length")))?;
        if mask > MAX_LENGTH {
            return Err(VlsmError::Format(format!("/{mask} is longer than 32 bits")));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        let mask = mask_bits(self.mask);
        Ipv4Addr::from((u32::from(self.addr) & mask) | !mask)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & mask_bits(self.mask))
    }

    /// Total number of addresses covered by this network.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask.min(MAX_LENGTH))
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }
}

// `mask` is always <= 32 for values built through `Ipv4::new`.
fn mask_bits(len: u8) -> u32 {
    get_cidr_mask(len.min(MAX_LENGTH)).unwrap_or(u32::MAX)
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octets_to_int() {
        assert_eq!(octets_to_int("0.0.0.0").unwrap(), 0);
        assert_eq!(octets_to_int("255.255.255.255").unwrap(), u32::MAX);
        assert_eq!(octets_to_int("172.16.0.0").unwrap(), 0xAC10_0000);
        assert_eq!(octets_to_int("10.0.1.2").unwrap(), 0x0A00_0102);
    }

    #[test]
    fn test_octets_to_int_rejects_malformed() {
        assert!(octets_to_int("10.0.0").is_err());
        assert!(octets_to_int("10.0.0.0.0").is_err());
        assert!(octets_to_int("10..0.0").is_err());
        assert!(octets_to_int("10.a.0.0").is_err());
        assert!(octets_to_int("10.+1.0.0").is_err());
        assert!(octets_to_int("10.-1.0.0").is_err());
        assert!(octets_to_int(" 10.0.0.0").is_err());
        assert!(octets_to_int("10.0.0.256").is_err());
        assert!(octets_to_int("").is_err());
    }

    #[test]
    fn test_octets_to_int_rejects_leading_zeros() {
        assert!(octets_to_int("010.0.0.1").is_err());
        assert!(octets_to_int("10.0.0.0000000001").is_err());
        assert!(octets_to_int("192.168.01.0").is_err());
        assert!(octets_to_int("10.0.0.00").is_err());
        // a lone zero is still an octet
        assert_eq!(octets_to_int("10.0.0.0").unwrap(), 0x0A00_0000);
    }

    #[test]
    fn test_int_to_octets_round_trip() {
        for addr in ["1.2.3.4", "172.16.0.0", "192.168.255.1", "223.255.255.254"] {
            assert_eq!(int_to_octets(octets_to_int(addr).unwrap()), addr);
        }
        assert_eq!(int_to_octets(0), "0.0.0.0");
        assert_eq!(int_to_octets(u32::MAX), "255.255.255.255");
    }

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_block_size() {
        assert_eq!(block_size(32).unwrap(), 1);
        assert_eq!(block_size(30).unwrap(), 4);
        assert_eq!(block_size(24).unwrap(), 256);
        assert_eq!(block_size(0).unwrap(), 1u64 << 32);
        assert!(block_size(33).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert!(broadcast_addr(Ipv4Addr::new(255, 255, 255, 255), 24).is_ok());
    }

    #[test]
    fn test_ipv4_new_and_display() {
        let net = Ipv4::new("172.16.0.0/16").unwrap();
        assert_eq!(net.addr, Ipv4Addr::new(172, 16, 0, 0));
        assert_eq!(net.mask, 16);
        assert_eq!(net.to_string(), "172.16.0.0/16");
        assert_eq!(net.size(), 65536);

        assert!(Ipv4::new("172.16.0.0").is_err());
        assert!(Ipv4::new("172.16.0.0/33").is_err());
        assert!(Ipv4::new("172.16.0.0/+8").is_err());
        assert!(Ipv4::new("172.16.0/8").is_err());
    }

    #[test]
    fn test_ipv4_lo_hi_contains() {
        let net = Ipv4::new("10.2.3.4/16").unwrap();
        assert_eq!(net.lo(), Ipv4Addr::new(10, 2, 0, 0));
        assert_eq!(net.hi(), Ipv4Addr::new(10, 2, 255, 255));
        assert!(net.contains(Ipv4Addr::new(10, 2, 200, 1)));
        assert!(!net.contains(Ipv4Addr::new(10, 3, 0, 0)));
    }

    #[test]
    fn test_ipv4_serde() {
        let net = Ipv4::new("192.168.10.0/24").unwrap();
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(json, "\"192.168.10.0/24\"");
        let back: Ipv4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net);
        assert!(serde_json::from_str::<Ipv4>("\"192.168.10.0\"").is_err());
    }
}
