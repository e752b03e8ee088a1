//! Ticket references given on the command line.

use reqwest::Url;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TicketError {
    #[error("failed to parse a ticket id from '{0}', expected https://<subdomain>.zendesk.com/agent/tickets/<id>")]
    InvalidUrl(String),
}

/// A support ticket, identified by its numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub id: u64,
}

impl Ticket {
    /// Parses an agent UI URL such as
    /// `https://acme.zendesk.com/agent/tickets/123`, or a bare id.
    pub fn from_url(value: &str) -> Result<Self, TicketError> {
        let value = value.trim();
        if let Ok(id) = value.parse::<u64>() {
            return Ok(Self { id });
        }

        let invalid = || TicketError::InvalidUrl(value.to_string());
        let url = Url::parse(value).map_err(|_| invalid())?;
        let segments: Vec<&str> = url.path().trim_end_matches('/').split('/').collect();

        match segments.as_slice() {
            ["", "agent", "tickets", id] => id.parse::<u64>().map(|id| Self { id }).map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }

    /// Default report file name, `<id>.csv`.
    pub fn default_output(&self) -> String {
        format!("{}.csv", self.id)
    }
}

impl FromStr for Ticket {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_url(s)
    }
}
