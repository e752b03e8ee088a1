//! Ticket comment model and validation.
//!
//! Comment sources hand over [`CommentRecord`]s exactly as the ticketing system
//! reported them. Before evaluation every record is turned into a typed
//! [`Comment`], which is where malformed timestamps and unknown author roles
//! are rejected.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while validating raw comment records.
///
/// Both variants are fatal for a whole evaluation: no partial report is
/// produced once one of them occurs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    /// The comment timestamp is missing or not RFC 3339.
    #[error("comment #{index} by '{email}' has an invalid timestamp '{value}': {reason}")]
    Parse {
        index: usize,
        email: String,
        value: String,
        reason: String,
    },
    /// The comment author type is missing or unknown.
    #[error("comment #{index} by '{email}' has an invalid author type '{value}'")]
    Validation { index: usize, email: String, value: String },
}

/// Who wrote a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorType {
    Customer,
    Agent,
}

impl AuthorType {
    pub fn is_agent(&self) -> bool {
        matches!(self, AuthorType::Agent)
    }
}

impl FromStr for AuthorType {
    type Err = String;

    /// Accepts the report's own labels as well as Zendesk user roles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "customer" | "end-user" => Ok(AuthorType::Customer),
            "agent" | "admin" => Ok(AuthorType::Agent),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for AuthorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorType::Customer => write!(f, "customer"),
            AuthorType::Agent => write!(f, "agent"),
        }
    }
}

/// A comment as delivered by a comment source, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub author_email: String,
    pub author_type: String,
    pub commented_at: String,
}

impl CommentRecord {
    pub fn new(author_email: &str, author_type: &str, commented_at: &str) -> Self {
        Self {
            author_email: author_email.to_string(),
            author_type: author_type.to_string(),
            commented_at: commented_at.to_string(),
        }
    }
}

/// A validated ticket comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub author_email: String,
    pub author_type: AuthorType,
    /// UTC, truncated to whole seconds.
    pub commented_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author_email: &str, author_type: AuthorType, commented_at: DateTime<Utc>) -> Self {
        Self {
            author_email: author_email.to_string(),
            author_type,
            commented_at: commented_at.trunc_subsecs(0),
        }
    }

    /// Validates a raw record. `index` is its position in the ticket timeline
    /// and only appears in error messages.
    pub fn from_record(index: usize, record: &CommentRecord) -> Result<Self, EvaluateError> {
        let author_type = record
            .author_type
            .parse::<AuthorType>()
            .map_err(|value| EvaluateError::Validation {
                index,
                email: record.author_email.clone(),
                value,
            })?;

        let commented_at = parse_timestamp(&record.commented_at).map_err(|reason| EvaluateError::Parse {
            index,
            email: record.author_email.clone(),
            value: record.commented_at.clone(),
            reason,
        })?;

        Ok(Self::new(&record.author_email, author_type, commented_at))
    }
}

/// Parses an RFC 3339 timestamp and normalizes it to UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("timestamp is missing".to_string());
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| e.to_string())
}

/// Validates every record, stopping at the first invalid one.
pub fn parse_records(records: &[CommentRecord]) -> Result<Vec<Comment>, EvaluateError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| Comment::from_record(index, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_author_type_accepts_zendesk_roles() {
        assert_eq!("end-user".parse::<AuthorType>(), Ok(AuthorType::Customer));
        assert_eq!("Admin".parse::<AuthorType>(), Ok(AuthorType::Agent));
        assert_eq!(" agent ".parse::<AuthorType>(), Ok(AuthorType::Agent));
        assert!("".parse::<AuthorType>().is_err());
        assert!("robot".parse::<AuthorType>().is_err());
    }

    #[test]
    fn test_timestamp_normalized_to_utc() {
        let ts = parse_timestamp("2024-01-05T12:00:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_subseconds_truncated() {
        let record = CommentRecord::new("a@b.c", "agent", "2024-01-05T10:00:00.750Z");
        let comment = Comment::from_record(0, &record).unwrap();
        assert_eq!(comment.commented_at, Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_missing_timestamp_is_parse_error() {
        let record = CommentRecord::new("a@b.c", "customer", "");
        assert!(matches!(Comment::from_record(3, &record), Err(EvaluateError::Parse { index: 3, .. })));
    }
}
