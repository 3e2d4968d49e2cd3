//! Prefix <-> dotted mask conversion.

use super::ipv4::{get_cidr_mask, int_to_octets, octets_to_int};
use crate::error::VlsmError;

/// Count the 1-bits of a dotted mask.
///
/// Only meaningful for masks that passed [`crate::validate::is_mask_valid`];
/// a non-contiguous mask still yields its bit count.
pub fn mask_to_prefix(mask: &str) -> Result<u8, VlsmError> {
    let bits = octets_to_int(mask)?;
    Ok(bits.count_ones() as u8)
}

/// Build the dotted mask for a prefix length in 0..=32.
///
/// # Examples
/// ```
/// use vlsm_planner::models::prefix_to_mask;
/// assert_eq!(prefix_to_mask(26).unwrap(), "255.255.255.192");
/// ```
pub fn prefix_to_mask(prefix: u8) -> Result<String, VlsmError> {
    get_cidr_mask(prefix).map(int_to_octets)
}
