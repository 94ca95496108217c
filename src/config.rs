use std::env;
use std::fmt;
use std::path::PathBuf;

use log::LevelFilter;

use crate::error::{GogiError, Result};
use crate::github::config::DEFAULT_GITHUB_BASE_URL;

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const BASE_URL_ENV: &str = "GITHUB_BASE_URL";
pub const LOG_LEVEL_ENV: &str = "GOGI_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "GOGI_LOG_DIR";

/// Bearer token used to authenticate against the GitHub API.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: String) -> Self {
        Credential(token)
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    /// Picks the token from the command flag, falling back to `GITHUB_TOKEN`.
    /// Empty values count as missing.
    pub fn resolve<F>(flag: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = flag
            .map(str::to_string)
            .filter(|token| !token.is_empty())
            .or_else(|| lookup(TOKEN_ENV).filter(|token| !token.is_empty()));
        match token {
            Some(token) => Ok(Credential(token)),
            None => Err(GogiError::Configuration(format!(
                "GitHub token must be provided via flag or {} environment variable",
                TOKEN_ENV
            ))),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Process settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub log_level: LevelFilter,
    pub log_dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_GITHUB_BASE_URL.to_string());
        let log_level = lookup(LOG_LEVEL_ENV)
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        let log_dir = lookup(LOG_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        Self {
            base_url,
            log_level,
            log_dir,
        }
    }
}
