//! Response-time evaluation over a ticket's comment timeline.
//!
//! The evaluator walks the comments once, in order. The first customer comment
//! after an agent reply opens a pending window; the next agent comment closes
//! it and gets a response time. Further customer comments while a window is
//! open do not move its start, and agent comments without an open window are
//! reported without a response time.
//!
//! ## Usage
//!
//! ```rust
//! use response_times::libs::comment::CommentRecord;
//! use response_times::libs::evaluator::Evaluator;
//!
//! let records = vec![
//!     CommentRecord::new("jane@example.com", "customer", "2024-01-05T10:00:00Z"),
//!     CommentRecord::new("support@example.com", "agent", "2024-01-08T10:00:00Z"),
//! ];
//! let rows = Evaluator::default().evaluate_records(&records)?;
//! assert_eq!(rows[1].response_time, "1 day, 0:00:00");
//! # Ok::<(), response_times::libs::comment::EvaluateError>(())
//! ```

use crate::libs::comment::{parse_records, AuthorType, Comment, CommentRecord, EvaluateError};
use crate::libs::report::{ReportRow, ResponseTime};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// Computes report rows for one ticket.
///
/// Holds only the time zone used to find weekend days, so one evaluator can
/// be shared freely between tickets and threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    tz: Tz,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self { tz: Tz::UTC }
    }
}

impl Evaluator {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Evaluates already validated comments. Produces exactly one row per
    /// comment, in input order.
    pub fn evaluate(&self, comments: &[Comment]) -> Vec<ReportRow> {
        let (rows, pending) = comments.iter().fold(
            (Vec::with_capacity(comments.len()), None::<DateTime<Utc>>),
            |(mut rows, pending), comment| {
                let row = ReportRow::from_comment(comment);
                let pending = match (comment.author_type, pending) {
                    (AuthorType::Customer, open) => {
                        rows.push(row);
                        open.or(Some(comment.commented_at))
                    }
                    (AuthorType::Agent, Some(asked_at)) => {
                        let response = ResponseTime::new(asked_at, comment.commented_at, &self.tz);
                        debug!(
                            agent = %comment.author_email,
                            asked_at = %asked_at,
                            answered_at = %comment.commented_at,
                            response_time = %response.response_time(),
                            "closed pending window"
                        );
                        rows.push(row.with_response(&response));
                        None
                    }
                    (AuthorType::Agent, None) => {
                        rows.push(row);
                        None
                    }
                };
                (rows, pending)
            },
        );

        if let Some(asked_at) = pending {
            debug!(asked_at = %asked_at, "ticket ends with an unanswered customer comment");
        }

        rows
    }

    /// Validates raw records and evaluates them. Any invalid record aborts the
    /// whole evaluation before a single row is produced.
    pub fn evaluate_records(&self, records: &[CommentRecord]) -> Result<Vec<ReportRow>, EvaluateError> {
        let comments = parse_records(records)?;
        Ok(self.evaluate(&comments))
    }
}
