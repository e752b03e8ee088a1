//! Report rows and response-time values.

use crate::libs::comment::{AuthorType, Comment};
use crate::libs::formatter::{format_duration, format_exclusion, format_timestamp};
use crate::libs::weekend::{total_excluded, weekend_days, WeekendDay};
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Column names of the exported report, in order.
pub const REPORT_HEADER: [&str; 6] = ["email", "user type", "commented at", "formula", "weekends", "response time"];

/// One row of the response-time report, mirroring a single ticket comment.
///
/// Customer rows and unanswered agent rows keep `formula`, `weekends` and
/// `response_time` empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub email: String,
    #[serde(rename = "user type")]
    pub user_type: AuthorType,
    #[serde(rename = "commented at")]
    pub commented_at: String,
    pub formula: String,
    pub weekends: String,
    #[serde(rename = "response time")]
    pub response_time: String,
}

impl ReportRow {
    pub fn from_comment(comment: &Comment) -> Self {
        Self {
            email: comment.author_email.clone(),
            user_type: comment.author_type,
            commented_at: format_timestamp(&comment.commented_at),
            formula: String::new(),
            weekends: String::new(),
            response_time: String::new(),
        }
    }

    pub fn with_response(mut self, response: &ResponseTime) -> Self {
        self.formula = response.formula();
        self.weekends = response.weekends();
        self.response_time = response.response_time();
        self
    }

    pub fn has_response(&self) -> bool {
        !self.response_time.is_empty()
    }
}

/// Time an agent took to answer the oldest unanswered customer comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTime {
    pub asked_at: DateTime<Utc>,
    pub answered_at: DateTime<Utc>,
    /// Raw wall-clock time between question and answer.
    pub elapsed: Duration,
    pub weekend_days: Vec<WeekendDay>,
}

impl ResponseTime {
    pub fn new(asked_at: DateTime<Utc>, answered_at: DateTime<Utc>, tz: &Tz) -> Self {
        Self {
            asked_at,
            answered_at,
            elapsed: answered_at - asked_at,
            weekend_days: weekend_days(asked_at, answered_at, tz),
        }
    }

    pub fn excluded(&self) -> Duration {
        total_excluded(&self.weekend_days)
    }

    /// Elapsed time with weekend time removed, never negative.
    pub fn chargeable(&self) -> Duration {
        (self.elapsed - self.excluded()).max(Duration::zero())
    }

    pub fn formula(&self) -> String {
        let raw = format!("{} - {}", format_timestamp(&self.answered_at), format_timestamp(&self.asked_at));
        if self.weekend_days.is_empty() {
            raw
        } else {
            format!("{} - {}", raw, format_exclusion(&self.excluded()))
        }
    }

    pub fn weekends(&self) -> String {
        self.weekend_days
            .iter()
            .map(|day| day.date.format("%Y-%m-%d").to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn response_time(&self) -> String {
        format_duration(&self.chargeable())
    }
}

/// Number of customer rows after the last agent row, i.e. questions nobody
/// has answered yet.
pub fn trailing_unanswered(rows: &[ReportRow]) -> usize {
    rows.iter().rev().take_while(|row| !row.user_type.is_agent()).count()
}

/// Number of agent rows that had no pending customer comment to answer.
pub fn agent_rows_without_response(rows: &[ReportRow]) -> usize {
    rows.iter().filter(|row| row.user_type.is_agent() && !row.has_response()).count()
}
