//! Largest-first placement of contiguous subnet blocks.
//!
//! The allocator walks a cursor through the parent network. Each step
//! places one block of exactly `2^(32 - prefix)` addresses at the cursor
//! and moves the cursor past it, so blocks never overlap and leave no gaps.

use crate::error::VlsmError;
use crate::models::{prefix_to_mask, SubnetRecord, MAX_LENGTH};
use crate::processing::sizing::usable_hosts;
use crate::validate::MAX_SUBNET_PREFIX;
use std::net::Ipv4Addr;

/// Where the allocator is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocatorState {
    Start,
    Sorted,
    /// Next block to place.
    Placing(usize),
    Done,
}

/// Places blocks for a set of prefixes, one [`SubnetRecord`] per step.
#[derive(Debug, Clone)]
pub struct Allocator {
    prefixes: Vec<u8>,
    cursor: u32,
    state: AllocatorState,
}

impl Allocator {
    /// Start an allocation at `parent` for the given prefixes.
    ///
    /// Prefixes must be in 0..=30.
    pub fn new(parent: Ipv4Addr, prefixes: &[u8]) -> Result<Allocator, VlsmError> {
        if let Some(bad) = prefixes.iter().find(|p| **p > MAX_SUBNET_PREFIX) {
            return Err(VlsmError::Format(format!(
                "/{bad} is longer than /{MAX_SUBNET_PREFIX}"
            )));
        }
        Ok(Allocator {
            prefixes: prefixes.to_vec(),
            cursor: u32::from(parent),
            state: AllocatorState::Start,
        })
    }

    pub fn state(&self) -> AllocatorState {
        self.state
    }

    /// Prefixes in placement order once sorted.
    pub fn prefixes(&self) -> &[u8] {
        &self.prefixes
    }

    /// Stable sort, shortest prefix (largest block) first.
    fn sort(&mut self) {
        self.prefixes.sort();
        self.state = AllocatorState::Sorted;
        log::debug!("placement order {:?}", self.prefixes);
    }

    /// Advance by one state transition, returning the record placed, if any.
    pub fn step(&mut self) -> Option<SubnetRecord> {
        match self.state {
            AllocatorState::Start => {
                self.sort();
                self.step()
            }
            AllocatorState::Sorted => {
                self.state = if self.prefixes.is_empty() {
                    AllocatorState::Done
                } else {
                    AllocatorState::Placing(0)
                };
                self.step()
            }
            AllocatorState::Placing(i) => {
                let record = place_block(self.cursor, self.prefixes[i]);
                log::trace!("placed {} at index {i}", record.cidr());
                self.cursor = u32::from(record.next_free);
                self.state = if i + 1 < self.prefixes.len() {
                    AllocatorState::Placing(i + 1)
                } else {
                    AllocatorState::Done
                };
                Some(record)
            }
            AllocatorState::Done => None,
        }
    }
}

impl Iterator for Allocator {
    type Item = SubnetRecord;

    fn next(&mut self) -> Option<SubnetRecord> {
        self.step()
    }
}

/// Describe the block of `prefix` starting at `network`.
///
/// Offsets wrap modulo 2^32.
pub fn place_block(network: u32, prefix: u8) -> SubnetRecord {
    let size = 1u64 << (MAX_LENGTH - prefix.min(MAX_LENGTH));
    let at = |offset: u64| Ipv4Addr::from(network.wrapping_add(offset as u32));

    SubnetRecord {
        network: Ipv4Addr::from(network),
        prefix,
        // prefix is at most 32 here
        mask: prefix_to_mask(prefix.min(MAX_LENGTH)).unwrap_or_default(),
        first_host: at(1),
        last_host: at(size.saturating_sub(2)),
        broadcast: at(size - 1),
        next_free: at(size),
        max_hosts: usable_hosts(prefix),
    }
}

/// Run an allocation to completion.
///
/// Callers must have checked feasibility first; blocks past the end of the
/// address space wrap around.
pub fn allocate(parent: Ipv4Addr, prefixes: &[u8]) -> Result<Vec<SubnetRecord>, VlsmError> {
    Ok(Allocator::new(parent, prefixes)?.collect())
}
