//! Human-readable text for [`Message`].

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === EVALUATION MESSAGES ===
            Message::Evaluating(url) => format!("Evaluating {}", url),
            Message::Evaluated(url, count) => format!("Evaluated {} ({} comments)", url, count),
            Message::NoCommentsFound(id) => format!("Ticket {} has no public comments, the report will only contain a header.", id),
            Message::UnansweredComments(count) => format!("{} customer comment(s) at the end of the ticket are still waiting for an agent.", count),
            Message::AgentRepliesWithoutQuestion(count) => {
                format!("{} agent comment(s) had no pending customer comment and have no response time.", count)
            }

            // === ZENDESK MESSAGES ===
            Message::FetchingComments(id) => format!("Fetching comments of ticket {}", id),
            Message::FetchedCommentsPage { page, comments, public } => {
                format!("Fetched comments page {}: {} comments, {} public", page, comments, public)
            }
            Message::UnknownCommentAuthor { comment, author } => {
                format!("Author {} of comment {} is missing from the sideloaded users", author, comment)
            }

            // === REPORT MESSAGES ===
            Message::ReportGenerated(path) => format!("Generated evaluated output: {}", path),
            Message::ReportHeader(id) => format!("Response times for ticket {}", id),
            Message::OutputNotCsv(path) => format!("Output file must have a .csv extension: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::DotenvLoaded(path) => format!("Loaded environment from {}", path),
        };

        write!(f, "{}", text)
    }
}
