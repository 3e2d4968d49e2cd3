//! A finished VLSM plan.

use super::{AddressClass, Ipv4, SubnetRecord, SubnetRequest};
use serde::{Deserialize, Serialize};

/// Parent network plus its allocated subnets, largest first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetPlan {
    pub parent: Ipv4,
    pub class: AddressClass,
    /// Requests in placement order, `requests[i]` produced `records[i]`.
    pub requests: Vec<SubnetRequest>,
    pub records: Vec<SubnetRecord>,
}

impl SubnetPlan {
    /// Addresses consumed by all allocated blocks.
    pub fn addresses_used(&self) -> u64 {
        self.records.iter().map(|r| r.size()).sum()
    }

    /// Addresses of the parent network left unallocated after the last block.
    pub fn addresses_free(&self) -> u64 {
        self.parent.size().saturating_sub(self.addresses_used())
    }

    /// Requests paired with their records, numbered from 1 for display.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &SubnetRequest, &SubnetRecord)> {
        self.requests
            .iter()
            .zip(self.records.iter())
            .enumerate()
            .map(|(i, (req, rec))| (i + 1, req, rec))
    }
}
