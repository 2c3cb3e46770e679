//! Runtime settings resolved from flags, the environment and `.env`.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::CliError;

pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const TIMEOUT_ENV: &str = "TIMEOUT";
pub const LOG_PATH_ENV: &str = "LOG_PATH";
pub const API_URL_ENV: &str = "TELEGRAM_API_URL";

const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Values given on the command line; each falls back to its env var.
#[derive(Debug, Default)]
pub struct Overrides {
    pub token: Option<String>,
    pub timeout: Option<f64>,
    pub api_url: Option<Url>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug)]
pub struct Settings {
    pub token: String,
    pub timeout: Duration,
    pub api_url: Option<Url>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Resolves settings, preferring flags over environment values.
    ///
    /// Empty environment values count as unset.
    pub fn resolve(
        overrides: Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CliError> {
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let token = overrides
            .token
            .or_else(|| lookup(TOKEN_ENV))
            .filter(|t| !t.is_empty())
            .ok_or(CliError::MissingToken)?;

        let timeout_secs = match overrides.timeout {
            Some(secs) => secs,
            None => match lookup(TIMEOUT_ENV) {
                Some(raw) => raw
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| CliError::InvalidTimeout(raw.clone()))?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };
        let timeout = Duration::try_from_secs_f64(timeout_secs)
            .ok()
            .filter(|d| !d.is_zero())
            .ok_or_else(|| CliError::InvalidTimeout(timeout_secs.to_string()))?;

        let api_url = match overrides.api_url {
            Some(url) => Some(url),
            None => lookup(API_URL_ENV)
                .map(|raw| Url::parse(&raw).map_err(|_| CliError::InvalidApiUrl(raw)))
                .transpose()?,
        };

        let log_file = overrides
            .log_file
            .or_else(|| lookup(LOG_PATH_ENV).map(PathBuf::from));

        Ok(Self {
            token,
            timeout,
            api_url,
            log_file,
        })
    }
}
