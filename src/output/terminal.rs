//! Terminal output.
//!
//! Renders plans, summaries and capacity reports as text. Everything returns
//! a `String` so the CLI decides where it goes.

use crate::error::{CapacityViolation, VlsmError};
use crate::models::{SubnetPlan, SubnetRequest};
use crate::processing::required_prefix;
use colored::Colorize;
use std::fmt;

fn describe_request(request: &SubnetRequest) -> String {
    if request.is_point_to_point() {
        format!("{} hosts, PTP", request.hosts)
    } else {
        format!(
            "{} hosts, {}% reserve",
            request.hosts, request.reserve_percent
        )
    }
}

struct Summary<'a>(&'a SubnetPlan);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        writeln!(
            f,
            "Summary: Original network: {} (class {})",
            plan.parent.to_string().bold(),
            plan.class
        )?;
        writeln!(f, "         {} total subnets:", plan.requests.len())?;

        let width = plan.requests.len().to_string().len();
        for (i, request) in plan.requests.iter().enumerate() {
            let total = request.total_hosts();
            writeln!(
                f,
                "            ({n:>width$}) {desc:<24} (total: {total}, block /{prefix})",
                n = i + 1,
                desc = describe_request(request),
                prefix = required_prefix(total),
            )?;
        }
        Ok(())
    }
}

struct PlanTable<'a>(&'a SubnetPlan);

impl fmt::Display for PlanTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        for (n, _request, record) in plan.numbered() {
            writeln!(
                f,
                "Subnet ({n}): Network addr: {cidr} ({hosts} hosts)",
                cidr = record.cidr().to_string().green().bold(),
                hosts = record.max_hosts,
            )?;
            writeln!(f, "            Subnet mask:  {}", record.mask)?;
            writeln!(f, "            First host:   {}", record.first_host)?;
            writeln!(f, "            Last host:    {}", record.last_host)?;
            writeln!(f, "            Broadcast:    {}", record.broadcast)?;
            writeln!(f)?;
        }
        writeln!(
            f,
            "{} of {} addresses allocated, {} left in reserve",
            plan.addresses_used(),
            plan.parent.size(),
            plan.addresses_free()
        )
    }
}

struct CapacityReport<'a>(&'a [CapacityViolation]);

impl fmt::Display for CapacityReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}",
            "Sorry, some of your subnets exceed their maximum blocksize!".red()
        )?;
        writeln!(f, " -> Take a look at these subnets:")?;
        for v in self.0 {
            writeln!(f, "\t/!\\ {v}")?;
        }
        writeln!(f)?;
        writeln!(f, " You have to figure out if you:")?;
        writeln!(f, "   a) exceeded the maximum subnets for this prefix or")?;
        writeln!(
            f,
            "   b) exceeded the maximum hosts, causing a collision with the subnetting block."
        )?;
        writeln!(f)?;
        writeln!(f, " These options might help you:")?;
        writeln!(f, "   1) Reduce the amount of hosts in these subnets,")?;
        writeln!(f, "   2) Reduce the amount of troublesome subnets themselves or")?;
        writeln!(
            f,
            "   3) If possible, use a larger parent network (shorter prefix or a lower address class)."
        )
    }
}

/// Parent network plus the numbered request list, largest first.
pub fn render_summary(plan: &SubnetPlan) -> String {
    Summary(plan).to_string()
}

/// One block per subnet, numbered from 1.
pub fn render_plan(plan: &SubnetPlan) -> String {
    PlanTable(plan).to_string()
}

/// Explain which subnets did not fit and what the user can change.
pub fn render_capacity_report(violations: &[CapacityViolation]) -> String {
    CapacityReport(violations).to_string()
}

/// Human-readable error text for the CLI.
pub fn render_error(err: &VlsmError) -> String {
    match err {
        VlsmError::Capacity(violations) => render_capacity_report(violations),
        other => format!("{}", other.to_string().red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddressClass, Ipv4};
    use crate::processing::allocate;

    fn sample_plan() -> SubnetPlan {
        let parent = Ipv4::new("192.168.10.0/24").unwrap();
        let requests = vec![SubnetRequest::new(50, 20), SubnetRequest::new(2, 0)];
        let records = allocate(parent.addr, &[26, 30]).unwrap();
        SubnetPlan {
            parent,
            class: AddressClass::C,
            requests,
            records,
        }
    }

    #[test]
    fn test_render_summary() {
        let text = render_summary(&sample_plan());
        assert!(text.contains("192.168.10.0/24"));
        assert!(text.contains("2 total subnets"));
        assert!(text.contains("50 hosts, 20% reserve"));
        assert!(text.contains("(total: 60, block /26)"));
        assert!(text.contains("2 hosts, PTP"));
    }

    #[test]
    fn test_render_plan() {
        let text = render_plan(&sample_plan());
        assert!(text.contains("Subnet (1): Network addr: "));
        assert!(text.contains("192.168.10.0/26"));
        assert!(text.contains("(62 hosts)"));
        assert!(text.contains("Subnet mask:  255.255.255.192"));
        assert!(text.contains("Broadcast:    192.168.10.63"));
        assert!(text.contains("192.168.10.64/30"));
        assert!(text.contains("Last host:    192.168.10.66"));
        assert!(text.contains("68 of 256 addresses allocated, 188 left in reserve"));
    }

    #[test]
    fn test_render_capacity_report_lists_all() {
        let text = render_capacity_report(&[
            CapacityViolation::Bucket {
                hosts: 600,
                subnets: 10,
                bits_demanded: 14,
                bits_available: 8,
            },
            CapacityViolation::AddressSpace {
                addresses_demanded: 384,
                addresses_available: 256,
            },
        ]);
        assert!(text.contains("10 x 600 hosts needs 14 bits, only 8 available"));
        assert!(text.contains("384 addresses"));
        assert!(text.contains("Reduce the amount of hosts"));
        assert!(text.contains("\t/!\\ 10 x 600"));
    }
}
