//! CSV export of a finished plan.

use crate::error::VlsmError;
use crate::models::SubnetPlan;
use std::path::Path;

pub const CSV_HEADER: [&str; 7] = [
    "Subnet",
    "Max hosts",
    "Network",
    "Mask",
    "First host",
    "Last host",
    "Broadcast",
];

/// Quote a field when it holds a comma, quote or line break.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains([',', '"', '\n', '\r']) {
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

fn csv_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| escape_csv_field(f))
        .collect::<Vec<String>>()
        .join(",")
}

/// Header plus one line per subnet, numbered from 1.
pub fn render_csv(plan: &SubnetPlan) -> String {
    let header: Vec<String> = CSV_HEADER.iter().map(|h| h.to_string()).collect();
    let mut s = csv_line(&header);
    s.push('\n');

    for (n, _request, record) in plan.numbered() {
        let fields = [
            n.to_string(),
            record.max_hosts.to_string(),
            record.cidr().to_string(),
            record.mask.clone(),
            record.first_host.to_string(),
            record.last_host.to_string(),
            record.broadcast.to_string(),
        ];
        s.push_str(&csv_line(&fields));
        s.push('\n');
    }
    s
}

pub fn write_csv<P: AsRef<Path>>(path: P, plan: &SubnetPlan) -> Result<(), VlsmError> {
    let path = path.as_ref();
    std::fs::write(path, render_csv(plan))?;
    log::info!(
        "Wrote {} subnets to {}",
        plan.records.len(),
        path.display()
    );
    Ok(())
}
