//! Comment sources for ticketing systems.
//!
//! A comment source turns a ticket id into the ticket's public comments, in
//! the order they were posted, as raw [`CommentRecord`]s. Validation happens
//! later in the evaluator, so sources stay thin: authenticate, page through
//! the API, map payloads.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use response_times::api::{CommentSource, zendesk::{Zendesk, ZendeskConfig}};
//!
//! # async fn run(config: ZendeskConfig) -> Result<(), response_times::api::SourceError> {
//! let zendesk = Zendesk::new(&config);
//! let records = zendesk.fetch_comments(123).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::comment::CommentRecord;
use thiserror::Error;

pub mod zendesk;

pub use zendesk::ZendeskConfig;

/// Failures of a comment source. All of them are fatal for the evaluation.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("authentication rejected by {0}, check the email and API token")]
    Unauthorized(String),
    #[error("ticket not found: {0}")]
    NotFound(String),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Source of ticket comments.
#[allow(async_fn_in_trait)]
pub trait CommentSource {
    /// Returns the public comments of a ticket, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication fails, the ticket does not exist,
    /// or the API cannot be reached or answers with an unexpected payload.
    async fn fetch_comments(&self, ticket_id: u64) -> Result<Vec<CommentRecord>, SourceError>;
}
