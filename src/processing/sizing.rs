//! Block sizing: host counts to prefixes, subnet counts to subnetting bits.

use crate::models::MAX_LENGTH;
use crate::validate::MAX_SUBNET_PREFIX;

/// Number of significant bits, 0 for 0.
pub trait BitLength {
    fn bit_length(&self) -> u32;
}

impl BitLength for u64 {
    fn bit_length(&self) -> u32 {
        64 - self.leading_zeros()
    }
}

impl BitLength for usize {
    fn bit_length(&self) -> u32 {
        usize::BITS - self.leading_zeros()
    }
}

/// Host bits a block needs to hold `hosts` usable addresses plus network
/// and broadcast. Never less than 2 (a /30). May exceed 32 for counts no
/// IPv4 block can hold.
pub fn required_host_bits(hosts: u32) -> u32 {
    let min_bits = u32::from(MAX_LENGTH - MAX_SUBNET_PREFIX);
    (u64::from(hosts) + 1).bit_length().max(min_bits)
}

/// Minimal prefix `p` with `2^(32-p) - 2 >= hosts`, never longer than /30.
///
/// Returns 0 when even the whole address space is too small; the
/// feasibility check rejects such requests before allocation.
///
/// # Examples
/// ```
/// use vlsm_planner::processing::required_prefix;
/// assert_eq!(required_prefix(180), 24);
/// assert_eq!(required_prefix(2), 30);
/// ```
pub fn required_prefix(hosts: u32) -> u8 {
    let host_bits = required_host_bits(hosts).min(u32::from(MAX_LENGTH));
    MAX_LENGTH - host_bits as u8
}

/// Bits needed to number `count` sibling subnets starting at zero.
pub fn required_subnetting_bits(count: usize) -> u32 {
    if count <= 1 {
        0
    } else {
        (count - 1).bit_length()
    }
}

/// `ceil(count * (1 + percent / 100))`, saturating at `u32::MAX`.
pub fn apply_reserve(count: u32, percent: u32) -> u32 {
    u64::from(count)
        .checked_mul(100 + u64::from(percent))
        .map(|scaled| scaled.div_ceil(100))
        .and_then(|total| u32::try_from(total).ok())
        .unwrap_or(u32::MAX)
}

/// Usable hosts of a block, network and broadcast excluded.
pub fn usable_hosts(prefix: u8) -> u64 {
    if prefix >= MAX_LENGTH {
        return 0;
    }
    (1u64 << (MAX_LENGTH - prefix)).saturating_sub(2)
}
