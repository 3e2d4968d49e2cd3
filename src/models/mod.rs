//! Domain models for the VLSM planner.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus the octet codec
//! - [`AddressClass`] - classful category of an address
//! - [`SubnetRequest`] and [`SubnetRecord`] - what is asked for and what was allocated
//! - [`SubnetPlan`] - the complete allocation result

mod class;
mod ipv4;
mod mask;
mod plan;
mod subnet;

// Re-export public types
pub use class::{classify, AddressClass, ClassInfo};
pub use ipv4::{
    block_size, broadcast_addr, cut_addr, get_cidr_mask, int_to_octets, octets_to_int,
    parse_octets, Ipv4, MAX_LENGTH,
};
pub use mask::{mask_to_prefix, prefix_to_mask};
pub use plan::SubnetPlan;
pub use subnet::{SubnetRecord, SubnetRequest};
