//! Runtime configuration.
//!
//! Credentials never live in ambient global state: they are read once from the
//! environment (optionally seeded from a `.env` file) into a [`Config`] value
//! that is handed to the Zendesk client at construction.
//!
//! | Variable            | Meaning                                     |
//! |---------------------|---------------------------------------------|
//! | `ZENDESK_EMAIL`     | Email of the Zendesk user owning the token  |
//! | `ZENDESK_TOKEN`     | Zendesk API token                           |
//! | `ZENDESK_SUBDOMAIN` | `acme` for `acme.zendesk.com`               |
//!
//! ```rust,no_run
//! use response_times::libs::config::Config;
//!
//! Config::load_dotenv();
//! let config = Config::read()?;
//! println!("{}", config.zendesk.base_url());
//! # Ok::<(), response_times::libs::config::ConfigError>(())
//! ```

use crate::api::zendesk::ZendeskConfig;
use crate::libs::messages::Message;
use crate::msg_debug;
use chrono_tz::Tz;
use std::env;
use thiserror::Error;

pub const ZENDESK_EMAIL: &str = "ZENDESK_EMAIL";
pub const ZENDESK_TOKEN: &str = "ZENDESK_TOKEN";
pub const ZENDESK_SUBDOMAIN: &str = "ZENDESK_SUBDOMAIN";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
    #[error("environment variable {0} is empty")]
    EmptyVar(&'static str),
    #[error("unknown time zone '{0}', expected an IANA name such as UTC or America/New_York")]
    InvalidTimezone(String),
}

/// Application configuration assembled from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub zendesk: ZendeskConfig,
}

impl Config {
    /// Reads all required variables. Fails on the first missing or empty one.
    pub fn read() -> Result<Self, ConfigError> {
        Ok(Self {
            zendesk: ZendeskConfig {
                email: required(ZENDESK_EMAIL)?,
                token: required(ZENDESK_TOKEN)?,
                subdomain: required(ZENDESK_SUBDOMAIN)?,
            },
        })
    }

    /// Loads a `.env` file from the working directory or its parents, if any.
    /// Variables already present in the environment win.
    pub fn load_dotenv() {
        if let Ok(path) = dotenv::dotenv() {
            msg_debug!(Message::DotenvLoaded(path.display().to_string()));
        }
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    let value = env::var(name).map_err(|_| ConfigError::MissingVar(name))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::EmptyVar(name));
    }
    Ok(value.to_string())
}

/// Parses the IANA time zone used to decide which calendar days are weekends.
pub fn parse_timezone(value: &str) -> Result<Tz, ConfigError> {
    let value = value.trim();
    value
        .parse::<Tz>()
        .map_err(|_| ConfigError::InvalidTimezone(value.to_string()))
}
