//! Syntactic and semantic checks for addresses, masks and prefixes.
//!
//! The `is_*` predicates answer yes/no; the `parse_*` functions return the
//! parsed value or a [`VlsmError`] naming the rejected input.

use crate::error::VlsmError;
use crate::models::{classify, mask_to_prefix, parse_octets, ClassInfo};
use std::net::Ipv4Addr;

/// Highest prefix accepted for a subnet; /31 and /32 are not planned.
pub const MAX_SUBNET_PREFIX: u8 = 30;

/// Last mask octet allowed; 254 (/31 point-to-point) is rejected.
const MAX_LAST_MASK_OCTET: u8 = 252;

/// Three dots, four decimal octets, first octet in 1..=254.
pub fn is_address_valid(addr: &str) -> bool {
    parse_address(addr).is_ok()
}

/// Three dots, four decimal octets forming a contiguous run of 1-bits,
/// first octet non-zero and last octet at most 252.
pub fn is_mask_valid(mask: &str) -> bool {
    parse_mask(mask).is_ok()
}

/// Decimal string in 1..=30.
pub fn is_prefix_valid(prefix: &str) -> bool {
    parse_prefix(prefix).is_ok()
}

pub fn parse_address(addr: &str) -> Result<Ipv4Addr, VlsmError> {
    let octets = parse_octets(addr)?;
    if octets[0] == 0 || octets[0] == 255 {
        return Err(VlsmError::Format(format!(
            "'{addr}' must not start with 0 or 255"
        )));
    }
    Ok(Ipv4Addr::from(octets))
}

/// Validate a dotted mask and return its prefix length.
pub fn parse_mask(mask: &str) -> Result<u8, VlsmError> {
    let octets = parse_octets(mask)?;
    let bits = u32::from_be_bytes(octets);

    // ones followed by zeros only
    if bits.leading_ones() + bits.trailing_zeros() != 32 {
        return Err(VlsmError::Format(format!(
            "'{mask}' is not a contiguous subnet mask"
        )));
    }
    if octets[0] == 0 {
        return Err(VlsmError::Format(format!(
            "'{mask}' must not start with 0"
        )));
    }
    if octets[3] > MAX_LAST_MASK_OCTET {
        return Err(VlsmError::Format(format!(
            "'{mask}' leaves fewer than two host addresses"
        )));
    }
    mask_to_prefix(mask)
}

pub fn parse_prefix(prefix: &str) -> Result<u8, VlsmError> {
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VlsmError::Format(format!("'{prefix}' is not a prefix length")));
    }
    match prefix.parse::<u8>() {
        Ok(p) if (1..=MAX_SUBNET_PREFIX).contains(&p) => Ok(p),
        _ => Err(VlsmError::Format(format!(
            "'{prefix}' is outside 1-{MAX_SUBNET_PREFIX}"
        ))),
    }
}

/// Validate and classify the origin of a plan.
///
/// Class D/E and 127.x.x.x addresses are rejected with [`VlsmError::Class`].
pub fn parse_origin(addr: &str) -> Result<(Ipv4Addr, ClassInfo), VlsmError> {
    let ip = parse_address(addr)?;
    let info = classify(ip);
    if info.is_loopback {
        return Err(VlsmError::Class(format!(
            "{ip} is in the reserved 127.x.x.x block; use class A (1-126), B (128-191) or C (192-223)"
        )));
    }
    if !info.class.is_subnettable() {
        return Err(VlsmError::Class(format!(
            "{ip} is class {class} ({range}) and cannot be subnetted; use class A (1-126), B (128-191) or C (192-223)",
            class = info.class,
            range = info.class.first_octet_range(),
        )));
    }
    log::debug!(
        "origin {ip} is class {} default prefix /{:?}",
        info.class,
        info.default_prefix
    );
    Ok((ip, info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressClass;

    #[test]
    fn test_is_address_valid() {
        assert!(is_address_valid("172.16.0.0"));
        assert!(is_address_valid("1.0.0.0"));
        assert!(is_address_valid("254.255.255.255"));
        assert!(!is_address_valid("0.1.2.3"));
        assert!(!is_address_valid("255.1.2.3"));
        assert!(!is_address_valid("10.0.0.256"));
        assert!(!is_address_valid("10.0.0"));
        assert!(!is_address_valid("10.0.0.0.0"));
        assert!(!is_address_valid("10.0.0.a"));
        assert!(!is_address_valid("10.0.0. 1"));
        assert!(!is_address_valid("10.0.0.+1"));
        assert!(!is_address_valid("010.0.0.1"));
    }

    #[test]
    fn test_valid_addresses_round_trip() {
        use crate::models::{int_to_octets, octets_to_int};
        for addr in ["10.0.0.1", "010.0.0.1", "172.16.0.0", "192.168.001.1", "223.0.0.10"] {
            if is_address_valid(addr) {
                assert_eq!(int_to_octets(octets_to_int(addr).unwrap()), addr);
            }
        }
    }

    #[test]
    fn test_is_mask_valid() {
        assert!(is_mask_valid("255.0.0.0"));
        assert!(is_mask_valid("255.255.192.0"));
        assert!(is_mask_valid("255.255.255.0"));
        assert!(is_mask_valid("255.255.255.128"));
        assert!(is_mask_valid("255.255.255.252"));
        assert!(is_mask_valid("128.0.0.0"));
    }

    #[test]
    fn test_is_mask_valid_rejects() {
        // /31 point-to-point and host masks are refused
        assert!(!is_mask_valid("255.255.255.254"));
        assert!(!is_mask_valid("255.255.255.255"));
        assert!(!is_mask_valid("0.0.0.0"));
        assert!(!is_mask_valid("0.255.0.0"));
        assert!(!is_mask_valid("255.0.255.0"));
        assert!(!is_mask_valid("255.255.128.128"));
        assert!(!is_mask_valid("255.255.33.0"));
        assert!(!is_mask_valid("255.255.255"));
        assert!(!is_mask_valid("255.255.x.0"));
        assert!(!is_mask_valid("255.255.256.0"));
    }

    #[test]
    fn test_parse_mask_returns_prefix() {
        assert_eq!(parse_mask("255.255.192.0").unwrap(), 18);
        assert_eq!(parse_mask("255.255.255.0").unwrap(), 24);
    }

    #[test]
    fn test_is_prefix_valid() {
        assert!(is_prefix_valid("1"));
        assert!(is_prefix_valid("24"));
        assert!(is_prefix_valid("30"));
        assert!(!is_prefix_valid("0"));
        assert!(!is_prefix_valid("31"));
        assert!(!is_prefix_valid("32"));
        assert!(!is_prefix_valid("-1"));
        assert!(!is_prefix_valid("+8"));
        assert!(!is_prefix_valid("8.0"));
        assert!(!is_prefix_valid(""));
        assert!(!is_prefix_valid("99999999999"));
        assert!(!is_prefix_valid("/26"));
        assert_eq!(parse_prefix("26").unwrap(), 26);
    }

    #[test]
    fn test_parse_origin() {
        let (ip, info) = parse_origin("172.16.0.0").unwrap();
        assert_eq!(ip, Ipv4Addr::new(172, 16, 0, 0));
        assert_eq!(info.class, AddressClass::B);
        assert_eq!(info.default_prefix, Some(16));
    }

    #[test]
    fn test_parse_origin_rejects_class_d_e_and_loopback() {
        for addr in ["224.0.0.1", "239.1.1.1", "240.0.0.0", "254.0.0.1", "127.0.0.1"] {
            match parse_origin(addr) {
                Err(VlsmError::Class(_)) => {}
                other => panic!("{addr}: expected class error, got {other:?}"),
            }
        }
        assert!(matches!(parse_origin("300.0.0.1"), Err(VlsmError::Format(_))));
    }
}
