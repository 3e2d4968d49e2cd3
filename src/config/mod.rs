//! Planner configuration.
//!
//! - [`requests`] - Subnet request shorthand and JSON plan files
//! - [`settings`] - Defaults taken from the environment / `.env`

mod requests;
mod settings;

pub use requests::{
    load_plan_file, parse_plan_json, parse_requests, ParsePolicy, PlanEntry, PlanFile, MAX_REPEAT,
};
pub use settings::{
    Settings, DEFAULT_PROMPT_ATTEMPTS, ENV_EXPORT_FILE, ENV_PARSE_POLICY, ENV_PROMPT_ATTEMPTS,
};
