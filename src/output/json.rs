//! JSON rendering of a plan for other tools.

use crate::error::VlsmError;
use crate::models::{AddressClass, Ipv4, SubnetPlan, SubnetRecord, SubnetRequest};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize, Debug)]
struct JsonSubnet<'a> {
    number: usize,
    request: &'a SubnetRequest,
    total_hosts: u32,
    #[serde(flatten)]
    record: &'a SubnetRecord,
}

#[derive(Serialize, Debug)]
struct JsonPlan<'a> {
    generated_at: DateTime<Utc>,
    parent: Ipv4,
    class: AddressClass,
    addresses_used: u64,
    addresses_free: u64,
    subnets: Vec<JsonSubnet<'a>>,
}

/// Pretty-printed JSON document stamped with the current UTC time.
pub fn render_json(plan: &SubnetPlan) -> Result<String, VlsmError> {
    render_json_at(plan, Utc::now())
}

pub fn render_json_at(plan: &SubnetPlan, generated_at: DateTime<Utc>) -> Result<String, VlsmError> {
    let doc = JsonPlan {
        generated_at,
        parent: plan.parent,
        class: plan.class,
        addresses_used: plan.addresses_used(),
        addresses_free: plan.addresses_free(),
        subnets: plan
            .numbered()
            .map(|(number, request, record)| JsonSubnet {
                number,
                request,
                total_hosts: request.total_hosts(),
                record,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
