//! Environment-driven defaults.
//!
//! `main` loads `.env` with `dotenv` first, so every value below can live
//! there as well as in the process environment. Command line flags win over
//! both.

use super::requests::ParsePolicy;
use std::path::PathBuf;

pub const ENV_PARSE_POLICY: &str = "VLSM_PARSE_POLICY";
pub const ENV_EXPORT_FILE: &str = "VLSM_EXPORT_FILE";
pub const ENV_PROMPT_ATTEMPTS: &str = "VLSM_PROMPT_ATTEMPTS";

pub const DEFAULT_PROMPT_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub parse_policy: ParsePolicy,
    /// CSV export target used when `--csv` is not given.
    pub export_file: Option<PathBuf>,
    /// How often an interactive prompt is repeated before giving up.
    pub prompt_attempts: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            parse_policy: ParsePolicy::default(),
            export_file: None,
            prompt_attempts: DEFAULT_PROMPT_ATTEMPTS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Bad values are logged and replaced by defaults.
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(policy) = lookup(ENV_PARSE_POLICY) {
            match policy.parse::<ParsePolicy>() {
                Ok(p) => settings.parse_policy = p,
                Err(e) => log::warn!("{ENV_PARSE_POLICY}: {e}, using default"),
            }
        }

        if let Some(file) = lookup(ENV_EXPORT_FILE).filter(|f| !f.trim().is_empty()) {
            settings.export_file = Some(PathBuf::from(file.trim()));
        }

        if let Some(attempts) = lookup(ENV_PROMPT_ATTEMPTS) {
            match attempts.trim().parse::<usize>() {
                Ok(n) if n > 0 => settings.prompt_attempts = n,
                _ => log::warn!(
                    "{ENV_PROMPT_ATTEMPTS}='{attempts}' is not a positive number, using {DEFAULT_PROMPT_ATTEMPTS}"
                ),
            }
        }

        log::debug!("settings {settings:?}");
        settings
    }
}
