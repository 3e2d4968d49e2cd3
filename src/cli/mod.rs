//! Command line front end.
//!
//! - [`args`] - clap arguments
//! - [`prompt`] - bounded interactive questions
//!
//! [`run`] is generic over its input and output so the whole flow can be
//! driven from tests.

mod args;
mod prompt;

pub use args::Args;
pub use prompt::{ask_with_retry, ask_yes_no, prompt_line};

use crate::config::{load_plan_file, parse_requests, ParsePolicy, Settings};
use crate::error::VlsmError;
use crate::models::{SubnetPlan, SubnetRequest};
use crate::output::{render_capacity_report, render_json, render_plan, render_summary, write_csv};
use crate::validate::{parse_mask, parse_origin, parse_prefix};
use crate::plan_subnets_within;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// CSV file offered at the end of an interactive session.
pub const DEFAULT_EXPORT_FILE: &str = "vlsm_plan.csv";

const REQUESTS_EXAMPLE: &str = "\
    Enter each subnet as <hosts>:<reserve percent>, separated by commas.\n\
    Repeat a subnet with (<count>): 2:0(2) are two point-to-point links.\n\
    Example: 150:20,30:50,7:35,2:0(2)";

/// What the planner needs before it can run.
struct PlanInput {
    origin: String,
    prefix: Option<u8>,
    requests: Vec<SubnetRequest>,
    /// Requests came from the keyboard and may be asked for again.
    requests_prompted: bool,
}

fn missing(what: &str) -> VlsmError {
    VlsmError::ConfigParse(format!("no {what} given and prompting is disabled"))
}

fn prefix_override(args: &Args) -> Result<Option<u8>, VlsmError> {
    match (&args.prefix, &args.mask) {
        (Some(p), _) => parse_prefix(p).map(Some),
        (None, Some(m)) => parse_mask(m).map(Some),
        (None, None) => Ok(None),
    }
}

fn ask_requests<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    attempts: usize,
    policy: ParsePolicy,
) -> Result<Vec<SubnetRequest>, VlsmError> {
    ask_with_retry(input, out, "Subnets", attempts, |answer| {
        parse_requests(answer, policy)
    })
}

fn gather_input<R: BufRead, W: Write>(
    args: &Args,
    settings: &Settings,
    policy: ParsePolicy,
    input: &mut R,
    out: &mut W,
) -> Result<PlanInput, VlsmError> {
    let cli_prefix = prefix_override(args)?;

    if let Some(path) = &args.config {
        let plan = load_plan_file(path)?;
        let file_prefix = match (plan.prefix, &plan.mask) {
            (Some(p), _) => Some(p),
            (None, Some(m)) => Some(parse_mask(m)?),
            (None, None) => None,
        };
        return Ok(PlanInput {
            requests: plan.requests()?,
            origin: plan.network,
            prefix: cli_prefix.or(file_prefix),
            requests_prompted: false,
        });
    }

    let origin = match &args.network {
        Some(network) => network.clone(),
        None if args.no_prompt => return Err(missing("network")),
        None => ask_with_retry(
            input,
            out,
            "Network address",
            settings.prompt_attempts,
            |answer| parse_origin(answer).map(|_| answer.to_string()),
        )?,
    };

    let (requests, requests_prompted) = match &args.requests {
        Some(notation) => (parse_requests(notation, policy)?, false),
        None if args.no_prompt => return Err(missing("subnets")),
        None => {
            if ask_yes_no(input, out, "Show an example of the subnet notation?", false)? {
                writeln!(out, "{REQUESTS_EXAMPLE}")?;
            }
            let requests = ask_requests(input, out, settings.prompt_attempts, policy)?;
            (requests, true)
        }
    };

    Ok(PlanInput {
        origin,
        prefix: cli_prefix,
        requests,
        requests_prompted,
    })
}

/// Plan, re-asking for the subnets while they do not fit and the user typed them.
fn plan_with_retry<R: BufRead, W: Write>(
    plan_input: &mut PlanInput,
    settings: &Settings,
    policy: ParsePolicy,
    input: &mut R,
    out: &mut W,
) -> Result<SubnetPlan, VlsmError> {
    let mut attempt = 1;
    loop {
        let result =
            plan_subnets_within(&plan_input.origin, plan_input.prefix, &plan_input.requests);
        match result {
            Err(VlsmError::Capacity(violations))
                if plan_input.requests_prompted && attempt < settings.prompt_attempts =>
            {
                write!(out, "{}", render_capacity_report(&violations))?;
                plan_input.requests = ask_requests(input, out, settings.prompt_attempts, policy)?;
                attempt += 1;
            }
            other => return other,
        }
    }
}

fn export_target<R: BufRead, W: Write>(
    args: &Args,
    settings: &Settings,
    interactive: bool,
    input: &mut R,
    out: &mut W,
) -> Result<Option<PathBuf>, VlsmError> {
    if let Some(path) = args.csv.clone().or_else(|| settings.export_file.clone()) {
        return Ok(Some(path));
    }
    if interactive && ask_yes_no(input, out, "Save this plan as CSV?", true)? {
        return Ok(Some(PathBuf::from(DEFAULT_EXPORT_FILE)));
    }
    Ok(None)
}

/// Run one planning session.
///
/// Missing network or subnets are asked for on `input` unless
/// `args.no_prompt` is set. The plan is written to `out` as text or JSON and
/// optionally exported as CSV.
pub fn run<R: BufRead, W: Write>(
    args: &Args,
    settings: &Settings,
    input: &mut R,
    out: &mut W,
) -> Result<SubnetPlan, VlsmError> {
    let policy = if args.strict {
        ParsePolicy::Strict
    } else {
        settings.parse_policy
    };
    log::debug!("run {args:?} policy {policy:?}");

    let mut plan_input = gather_input(args, settings, policy, input, out)?;
    let interactive = plan_input.requests_prompted;
    let plan = plan_with_retry(&mut plan_input, settings, policy, input, out)?;

    if args.json {
        writeln!(out, "{}", render_json(&plan)?)?;
    } else {
        writeln!(out, "{}", render_summary(&plan))?;
        write!(out, "{}", render_plan(&plan))?;
    }

    if let Some(path) = export_target(args, settings, interactive, input, out)? {
        write_csv(&path, &plan)?;
        if !args.json {
            writeln!(out, "{} {}", "Saved plan to".green(), path.display())?;
        }
    }

    Ok(plan)
}
