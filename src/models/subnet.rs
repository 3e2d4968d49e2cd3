//! Subnet request and allocation result models.

use super::ipv4::Ipv4;
use crate::processing::apply_reserve;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// One subnet the user wants carved out of the parent network.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubnetRequest {
    /// Hosts needed today.
    pub hosts: u32,
    /// Growth reserve in percent, applied on top of `hosts`.
    #[serde(default, alias = "reserve")]
    pub reserve_percent: u32,
}

impl SubnetRequest {
    pub fn new(hosts: u32, reserve_percent: u32) -> Self {
        SubnetRequest {
            hosts,
            reserve_percent,
        }
    }

    /// Host count after the growth reserve, rounded up.
    pub fn total_hosts(&self) -> u32 {
        apply_reserve(self.hosts, self.reserve_percent)
    }

    /// Two hosts and no reserve: a router-to-router link.
    pub fn is_point_to_point(&self) -> bool {
        self.hosts == 2 && self.reserve_percent == 0
    }
}

/// Allocation result for one subnet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetRecord {
    pub network: Ipv4Addr,
    pub prefix: u8,
    pub mask: String,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// Start of the following block; wraps to 0.0.0.0 after the last block of the space.
    pub next_free: Ipv4Addr,
    /// Usable hosts of the block, network and broadcast excluded.
    pub max_hosts: u64,
}

impl SubnetRecord {
    /// The subnet in CIDR notation.
    pub fn cidr(&self) -> Ipv4 {
        Ipv4 {
            addr: self.network,
            mask: self.prefix,
        }
    }

    /// Total addresses in the block, network and broadcast included.
    pub fn size(&self) -> u64 {
        self.cidr().size()
    }

    /// `network < first_host < last_host < broadcast < next_free`, with
    /// `next_free` taken as the unwrapped block end.
    pub fn is_well_formed(&self) -> bool {
        let network = u64::from(u32::from(self.network));
        let first = u64::from(u32::from(self.first_host));
        let last = u64::from(u32::from(self.last_host));
        let broadcast = u64::from(u32::from(self.broadcast));
        let next = network + self.size();
        network < first
            && first < last
            && last < broadcast
            && broadcast < next
            && Ipv4Addr::from(next as u32) == self.next_free
    }
}
