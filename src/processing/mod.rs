//! Subnet planning logic.
//!
//! This module contains the planning pipeline after validation:
//! - [`sizing`] - Host counts and reserves to prefixes
//! - [`feasibility`] - Whether the prefixes fit the parent network
//! - [`allocator`] - Contiguous largest-first placement

mod allocator;
mod feasibility;
mod sizing;

// Re-export public functions
pub use allocator::{allocate, place_block, Allocator, AllocatorState};
pub use feasibility::{
    address_space_violation, bucket_host_counts, bucket_violations, check_feasibility, Bucket,
};
pub use sizing::{
    apply_reserve, required_host_bits, required_prefix, required_subnetting_bits, usable_hosts,
    BitLength,
};
