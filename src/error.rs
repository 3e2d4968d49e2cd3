//! Error types shared by the planner pipeline.

use std::fmt;
use std::io;
use thiserror::Error;

/// A single reason why a set of requests does not fit the parent network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapacityViolation {
    /// All subnets asking for `hosts` hosts together need more bits than the parent leaves.
    Bucket {
        /// Reserve-adjusted host count shared by the bucket.
        hosts: u32,
        /// How many subnets requested exactly `hosts` hosts.
        subnets: usize,
        /// Subnetting bits plus host bits needed by the bucket.
        bits_demanded: u32,
        /// Host bits of the parent network.
        bits_available: u32,
    },
    /// Every bucket fits on its own, but the blocks added up overflow the parent.
    AddressSpace {
        addresses_demanded: u64,
        addresses_available: u64,
    },
}

impl fmt::Display for CapacityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityViolation::Bucket {
                hosts,
                subnets,
                bits_demanded,
                bits_available,
            } => write!(
                f,
                "{subnets} x {hosts} hosts needs {bits_demanded} bits, only {bits_available} available"
            ),
            CapacityViolation::AddressSpace {
                addresses_demanded,
                addresses_available,
            } => write!(
                f,
                "subnets need {addresses_demanded} addresses in total, parent network holds {addresses_available}"
            ),
        }
    }
}

fn join_violations(violations: &[CapacityViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum VlsmError {
    // Malformed dotted-decimal address, mask or prefix
    #[error("Format error: {0}")]
    Format(String),

    // Class D/E or loopback origin
    #[error("Class error: {0}")]
    Class(String),

    #[error("Capacity exceeded: {}", join_violations(.0))]
    Capacity(Vec<CapacityViolation>),

    // Request shorthand or plan file could not produce any subnet
    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VlsmError {
    /// The capacity violations, if this is a capacity error.
    pub fn violations(&self) -> &[CapacityViolation] {
        match self {
            VlsmError::Capacity(v) => v,
            _ => &[],
        }
    }
}
