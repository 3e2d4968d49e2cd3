//! Checks whether requested subnets fit the parent network.
//!
//! Requests are bucketed by host count. Each bucket must fit the parent's
//! host bits on its own: subnetting bits for the bucket's multiplicity plus
//! host bits for its host count. Buckets are not combined to share leftover
//! space. Every bucket is checked so that all violations are reported at once.

use super::sizing::{required_host_bits, required_prefix, required_subnetting_bits};
use crate::error::{CapacityViolation, VlsmError};
use crate::models::{block_size, MAX_LENGTH};
use itertools::Itertools;

/// Hosts requested and how many subnets asked for exactly that many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub hosts: u32,
    pub subnets: usize,
}

/// Group host counts by value, largest first.
pub fn bucket_host_counts(host_counts: &[u32]) -> Vec<Bucket> {
    host_counts
        .iter()
        .copied()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .dedup_with_count()
        .map(|(subnets, hosts)| Bucket { hosts, subnets })
        .collect()
}

/// Every bucket whose subnetting plus host bits exceed the parent's host bits.
pub fn bucket_violations(parent_prefix: u8, host_counts: &[u32]) -> Vec<CapacityViolation> {
    let bits_available = u32::from(MAX_LENGTH.saturating_sub(parent_prefix));

    bucket_host_counts(host_counts)
        .into_iter()
        .filter_map(|bucket| {
            let bits_demanded =
                required_subnetting_bits(bucket.subnets) + required_host_bits(bucket.hosts);
            log::trace!(
                "bucket {} x {} hosts: {} bits of {}",
                bucket.subnets,
                bucket.hosts,
                bits_demanded,
                bits_available
            );
            (bits_demanded > bits_available).then_some(CapacityViolation::Bucket {
                hosts: bucket.hosts,
                subnets: bucket.subnets,
                bits_demanded,
                bits_available,
            })
        })
        .collect()
}

/// The blocks laid end to end must not run past the parent network.
pub fn address_space_violation(
    parent_prefix: u8,
    host_counts: &[u32],
) -> Result<Option<CapacityViolation>, VlsmError> {
    let addresses_available = block_size(parent_prefix)?;
    let mut addresses_demanded = 0u64;
    for hosts in host_counts {
        addresses_demanded += block_size(required_prefix(*hosts))?;
    }

    if addresses_demanded > addresses_available {
        Ok(Some(CapacityViolation::AddressSpace {
            addresses_demanded,
            addresses_available,
        }))
    } else {
        Ok(None)
    }
}

/// Verify that `host_counts` (already reserve-adjusted) fit under `parent_prefix`.
///
/// Fails with [`VlsmError::Capacity`] listing every offending bucket. When
/// all buckets fit on their own but the blocks together overflow the
/// parent, the overflow is reported instead.
pub fn check_feasibility(parent_prefix: u8, host_counts: &[u32]) -> Result<(), VlsmError> {
    if parent_prefix > MAX_LENGTH {
        return Err(VlsmError::Format(format!(
            "/{parent_prefix} is longer than 32 bits"
        )));
    }

    let violations = bucket_violations(parent_prefix, host_counts);
    if !violations.is_empty() {
        log::warn!(
            "{} subnet configuration(s) exceed /{parent_prefix}",
            violations.len()
        );
        return Err(VlsmError::Capacity(violations));
    }

    if let Some(overflow) = address_space_violation(parent_prefix, host_counts)? {
        log::warn!("subnets overflow /{parent_prefix}: {overflow}");
        return Err(VlsmError::Capacity(vec![overflow]));
    }

    log::info!(
        "{} subnet(s) fit into /{parent_prefix}",
        host_counts.len()
    );
    Ok(())
}
