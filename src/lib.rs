// cargo watch -x 'fmt' -x 'test'

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod validate;

pub use error::{CapacityViolation, VlsmError};

use models::{
    broadcast_addr, cut_addr, AddressClass, Ipv4, SubnetPlan, SubnetRecord, SubnetRequest,
};
use processing::{allocate, check_feasibility, required_prefix};
use validate::{parse_origin, MAX_SUBNET_PREFIX};

/// Validate `origin` and work out the parent network.
///
/// Without `prefix` the classful default applies. An explicit prefix may
/// only narrow the classful network and must leave room for a /30. Host
/// bits of `origin` below the parent prefix are cleared.
pub fn resolve_parent(origin: &str, prefix: Option<u8>) -> Result<(Ipv4, AddressClass), VlsmError> {
    let (addr, info) = parse_origin(origin)?;
    let class_prefix = info.default_prefix.ok_or_else(|| {
        VlsmError::Class(format!("class {} has no default prefix", info.class))
    })?;

    let parent_prefix = match prefix {
        None => class_prefix,
        Some(p) if p < class_prefix => {
            return Err(VlsmError::Format(format!(
                "/{p} is shorter than the class {} default /{class_prefix}",
                info.class
            )));
        }
        Some(p) if p > MAX_SUBNET_PREFIX => {
            return Err(VlsmError::Format(format!(
                "/{p} leaves no room for hosts, use /{MAX_SUBNET_PREFIX} or shorter"
            )));
        }
        Some(p) => p,
    };

    let network = cut_addr(addr, parent_prefix)?;
    if network != addr {
        log::warn!("{addr} has host bits set below /{parent_prefix}, using {network}");
    }
    let parent = Ipv4 {
        addr: network,
        mask: parent_prefix,
    };
    log::info!("Parent network {parent} (class {})", info.class);
    Ok((parent, info.class))
}

/// Plan `requests` inside the classful network of `origin`.
///
/// # Examples
/// ```
/// use vlsm_planner::models::SubnetRequest;
/// let requests = [SubnetRequest::new(150, 20), SubnetRequest::new(2, 0)];
/// let plan = vlsm_planner::plan_subnets("172.16.0.0", &requests).unwrap();
/// assert_eq!(plan.records[0].cidr().to_string(), "172.16.0.0/24");
/// assert_eq!(plan.records[1].cidr().to_string(), "172.16.1.0/30");
/// ```
pub fn plan_subnets(origin: &str, requests: &[SubnetRequest]) -> Result<SubnetPlan, VlsmError> {
    plan_subnets_within(origin, None, requests)
}

/// Plan `requests` inside `origin`, optionally narrowed to `prefix`.
///
/// Feasibility is checked in full before anything is placed, so a plan is
/// either complete or an error.
pub fn plan_subnets_within(
    origin: &str,
    prefix: Option<u8>,
    requests: &[SubnetRequest],
) -> Result<SubnetPlan, VlsmError> {
    if requests.is_empty() {
        return Err(VlsmError::ConfigParse(
            "at least one subnet is required".to_string(),
        ));
    }
    let (parent, class) = resolve_parent(origin, prefix)?;

    let host_counts: Vec<u32> = requests.iter().map(SubnetRequest::total_hosts).collect();
    check_feasibility(parent.mask, &host_counts)?;

    // Largest block first; equal sizes keep their input order.
    let mut sized: Vec<(u8, SubnetRequest)> = requests
        .iter()
        .map(|r| (required_prefix(r.total_hosts()), *r))
        .collect();
    sized.sort_by_key(|(p, _)| *p);

    let prefixes: Vec<u8> = sized.iter().map(|(p, _)| *p).collect();
    let records = allocate(parent.addr, &prefixes)?;
    debug_assert!(
        records.iter().all(|r| is_placed_within(&parent, r)),
        "allocation left {parent}"
    );
    log::info!("Allocated {} subnets in {parent}", records.len());

    Ok(SubnetPlan {
        parent,
        class,
        requests: sized.into_iter().map(|(_, r)| r).collect(),
        records,
    })
}

/// `record` is an aligned block lying entirely inside `parent`.
fn is_placed_within(parent: &Ipv4, record: &SubnetRecord) -> bool {
    record.is_well_formed()
        && parent.contains(record.network)
        && parent.contains(record.broadcast)
        && broadcast_addr(record.network, record.prefix).ok() == Some(record.broadcast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_resolve_parent_defaults() {
        let (parent, class) = resolve_parent("172.16.0.0", None).unwrap();
        assert_eq!(parent.to_string(), "172.16.0.0/16");
        assert_eq!(class, AddressClass::B);

        let (parent, class) = resolve_parent("10.1.2.3", None).unwrap();
        assert_eq!(parent.to_string(), "10.0.0.0/8");
        assert_eq!(class, AddressClass::A);
    }

    #[test]
    fn test_resolve_parent_with_prefix() {
        let (parent, _) = resolve_parent("192.168.10.77", Some(26)).unwrap();
        assert_eq!(parent.to_string(), "192.168.10.64/26");

        assert!(matches!(
            resolve_parent("192.168.10.0", Some(16)),
            Err(VlsmError::Format(_))
        ));
        assert!(matches!(
            resolve_parent("192.168.10.0", Some(31)),
            Err(VlsmError::Format(_))
        ));
        assert!(matches!(
            resolve_parent("224.0.0.1", None),
            Err(VlsmError::Class(_))
        ));
    }

    #[test]
    fn test_plan_subnets_orders_largest_first() {
        let requests = [
            SubnetRequest::new(7, 35),
            SubnetRequest::new(2, 0),
            SubnetRequest::new(150, 20),
            SubnetRequest::new(30, 50),
            SubnetRequest::new(2, 0),
        ];
        let plan = plan_subnets("172.16.0.0", &requests).unwrap();

        let prefixes: Vec<u8> = plan.records.iter().map(|r| r.prefix).collect();
        assert_eq!(prefixes, vec![24, 26, 28, 30, 30]);
        assert_eq!(plan.requests[0], SubnetRequest::new(150, 20));
        assert_eq!(plan.requests[2], SubnetRequest::new(7, 35));
        assert_eq!(plan.records[4].network, Ipv4Addr::new(172, 16, 1, 84));
    }

    #[test]
    fn test_plan_subnets_zero_hosts_gets_smallest_block() {
        let plan = plan_subnets("192.168.0.0", &[SubnetRequest::new(0, 0)]).unwrap();
        assert_eq!(plan.records[0].prefix, 30);
    }

    #[test]
    fn test_plan_subnets_rejects_empty_and_oversized() {
        assert!(matches!(
            plan_subnets("192.168.0.0", &[]),
            Err(VlsmError::ConfigParse(_))
        ));
        let requests = vec![SubnetRequest::new(600, 0); 10];
        let err = plan_subnets("192.168.0.0", &requests).unwrap_err();
        assert_eq!(err.violations().len(), 1);
    }

    #[test]
    fn test_plan_subnets_huge_request_is_capacity_error() {
        let requests = config::parse_requests("4294967295:4294967295", config::ParsePolicy::Strict)
            .unwrap();
        assert_eq!(requests[0].total_hosts(), u32::MAX);
        let err = plan_subnets("10.0.0.0", &requests).unwrap_err();
        assert!(matches!(err, VlsmError::Capacity(_)));
    }

    #[test]
    fn test_plan_subnets_equal_blocks_keep_input_order() {
        let requests = [
            SubnetRequest::new(10, 0),
            SubnetRequest::new(100, 0),
            SubnetRequest::new(12, 0),
            SubnetRequest::new(11, 0),
        ];
        let plan = plan_subnets("192.168.5.0", &requests).unwrap();

        let hosts: Vec<u32> = plan.requests.iter().map(|r| r.hosts).collect();
        assert_eq!(hosts, vec![100, 10, 12, 11]);
        let cidrs: Vec<String> = plan.records.iter().map(|r| r.cidr().to_string()).collect();
        assert_eq!(
            cidrs,
            vec![
                "192.168.5.0/25",
                "192.168.5.128/28",
                "192.168.5.144/28",
                "192.168.5.160/28",
            ]
        );
    }

    #[test]
    fn test_is_placed_within() {
        let plan = plan_subnets("192.168.5.0", &[SubnetRequest::new(20, 0)]).unwrap();
        assert!(is_placed_within(&plan.parent, &plan.records[0]));

        let outside = processing::place_block(u32::from(Ipv4Addr::new(192, 168, 6, 0)), 27);
        assert!(!is_placed_within(&plan.parent, &outside));
        let unaligned = processing::place_block(u32::from(Ipv4Addr::new(192, 168, 5, 16)), 27);
        assert!(!is_placed_within(&plan.parent, &unaligned));
    }
}
