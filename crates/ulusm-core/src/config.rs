use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{domain::ChatId, errors::Error, Result};

const DEFAULT_COUNTRIES_FILE: &str = "countries.json";

/// Typed configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    pub group_id: ChatId,
    pub group_name: String,
    pub countries_file: PathBuf,
    /// Lifetime of issued invite links; unset means links never expire.
    pub invite_expiry: Option<Duration>,
}

/// Apply `.env` from the working directory, if any.
///
/// Existing environment variables win over `.env` entries. Call this before
/// logging is initialized so `RUST_LOG` from `.env` takes effect.
pub fn load_dotenv() {
    load_dotenv_from(Path::new(".env"));
}

/// Returns false when the file is missing or unreadable; the variables may
/// still come from the real environment.
pub fn load_dotenv_from(path: &Path) -> bool {
    dotenvy::from_path(path).is_ok()
}

impl Config {
    /// Load configuration from the environment, after applying `.env` if present.
    pub fn load() -> Result<Self> {
        load_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = required(&lookup, "TOKEN")?;

        let raw_group_id = required(&lookup, "GROUP_ID")?;
        let group_id = raw_group_id.trim().parse::<i64>().map(ChatId).map_err(|_| {
            Error::Config(format!(
                "GROUP_ID must be a numeric chat id, got {raw_group_id:?}"
            ))
        })?;

        let group_name = required(&lookup, "GROUP_NAME")?;

        let countries_file = lookup("COUNTRIES_FILE")
            .and_then(non_empty)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COUNTRIES_FILE));

        let invite_expiry = match lookup("INVITE_EXPIRY_SECS").and_then(non_empty) {
            None => None,
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    Error::Config(format!(
                        "INVITE_EXPIRY_SECS must be a whole number of seconds, got {raw:?}"
                    ))
                })?;
                if secs == 0 {
                    return Err(Error::Config(
                        "INVITE_EXPIRY_SECS must be greater than zero".to_string(),
                    ));
                }
                Some(Duration::from_secs(secs))
            }
        };

        Ok(Self {
            bot_token,
            group_id,
            group_name,
            countries_file,
            invite_expiry,
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key)
        .and_then(non_empty)
        .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
