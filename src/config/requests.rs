//! Subnet request notation and plan files.
//!
//! Shorthand: comma-separated `<hosts>:<reserve percent>(<count>)` fragments,
//! e.g. `2:0(2),150:20(3)` asks for two point-to-point links and three
//! subnets of 150 hosts with 20% reserve. `:<reserve>` and `(<count>)` are
//! optional.

use crate::error::VlsmError;
use crate::models::SubnetRequest;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Upper bound for one repeat count: the /30 blocks of a class A network.
pub const MAX_REPEAT: usize = 1 << 22;

lazy_static! {
    static ref FRAGMENT_RE: Regex =
        Regex::new(r"^(\d+)(?::(\d+))?(?:\((\d+)\))?$").expect("Invalid Regex?");
}

/// What to do with a fragment that does not match the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Skip malformed fragments; fail only when nothing valid is left.
    #[default]
    Lenient,
    /// Fail on the first malformed fragment.
    Strict,
}

impl FromStr for ParsePolicy {
    type Err = VlsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(ParsePolicy::Lenient),
            "strict" => Ok(ParsePolicy::Strict),
            other => Err(VlsmError::ConfigParse(format!(
                "unknown parse policy '{other}', expected 'lenient' or 'strict'"
            ))),
        }
    }
}

/// One parsed fragment: a request repeated `count` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fragment {
    request: SubnetRequest,
    count: usize,
}

fn parse_fragment(fragment: &str) -> Option<Fragment> {
    let caps = FRAGMENT_RE.captures(fragment)?;
    let hosts: u32 = caps.get(1)?.as_str().parse().ok()?;
    let reserve_percent: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let count: usize = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 1,
    };
    if count == 0 || count > MAX_REPEAT {
        return None;
    }
    Some(Fragment {
        request: SubnetRequest::new(hosts, reserve_percent),
        count,
    })
}

/// Expand the shorthand notation into one request per subnet, in input order.
///
/// # Examples
/// ```
/// use vlsm_planner::config::{parse_requests, ParsePolicy};
/// let requests = parse_requests("2:0(2),150:20", ParsePolicy::Lenient).unwrap();
/// assert_eq!(requests.len(), 3);
/// ```
pub fn parse_requests(input: &str, policy: ParsePolicy) -> Result<Vec<SubnetRequest>, VlsmError> {
    let mut requests = Vec::new();

    for fragment in input.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        match parse_fragment(fragment) {
            Some(parsed) => {
                log::trace!("fragment '{fragment}' -> {parsed:?}");
                requests.extend(std::iter::repeat(parsed.request).take(parsed.count));
            }
            None if policy == ParsePolicy::Strict => {
                return Err(VlsmError::ConfigParse(format!(
                    "'{fragment}' does not match <hosts>:<reserve>(<count>)"
                )));
            }
            None => log::warn!("ignoring malformed subnet config '{fragment}'"),
        }
    }

    if requests.is_empty() {
        return Err(VlsmError::ConfigParse(format!(
            "no subnet config found in '{input}', e.g. '160:40,50:25' or '160:40(2)'"
        )));
    }
    Ok(requests)
}

fn default_count() -> usize {
    1
}

/// One line of a plan file's `subnets` list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub hosts: u32,
    #[serde(default, alias = "reserve")]
    pub reserve_percent: u32,
    #[serde(default = "default_count")]
    pub count: usize,
}

/// A plan stored as JSON.
///
/// ```json
/// { "network": "172.16.0.0", "subnets": [ { "hosts": 150, "reserve": 20, "count": 3 } ] }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanFile {
    pub network: String,
    /// Parent prefix, overriding the classful default.
    #[serde(default)]
    pub prefix: Option<u8>,
    /// Parent mask, alternative to `prefix`.
    #[serde(default)]
    pub mask: Option<String>,
    pub subnets: Vec<PlanEntry>,
}

impl PlanFile {
    /// Expand the entries into one request per subnet.
    pub fn requests(&self) -> Result<Vec<SubnetRequest>, VlsmError> {
        let mut requests = Vec::new();
        for (i, entry) in self.subnets.iter().enumerate() {
            if entry.count == 0 || entry.count > MAX_REPEAT {
                return Err(VlsmError::ConfigParse(format!(
                    "subnets[{i}]: count must be between 1 and {MAX_REPEAT}"
                )));
            }
            let request = SubnetRequest::new(entry.hosts, entry.reserve_percent);
            requests.extend(std::iter::repeat(request).take(entry.count));
        }
        if requests.is_empty() {
            return Err(VlsmError::ConfigParse("plan file lists no subnets".to_string()));
        }
        Ok(requests)
    }
}

/// Parse a plan from JSON, naming the path of the offending field on error.
pub fn parse_plan_json(json: &str) -> Result<PlanFile, VlsmError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        VlsmError::ConfigParse(format!("plan file at '{}': {}", e.path(), e.inner()))
    })
}

pub fn load_plan_file<P: AsRef<Path>>(path: P) -> Result<PlanFile, VlsmError> {
    let path = path.as_ref();
    log::info!("Reading plan file: {}", path.display());
    let json = std::fs::read_to_string(path)?;
    parse_plan_json(&json)
}
