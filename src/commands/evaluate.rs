//! Ticket evaluation command.
//!
//! Fetches a ticket's public comments, computes agent response times with
//! weekend time excluded, and writes the result to CSV.
//!
//! ```bash
//! # evaluates ticket 123 and writes 123.csv
//! response-times https://acme.zendesk.com/agent/tickets/123
//!
//! # custom output, weekends counted in New York time, table printed to the console
//! response-times https://acme.zendesk.com/agent/tickets/123 -o reports/123.csv --timezone America/New_York --print
//! ```

use crate::{
    api::{zendesk::Zendesk, CommentSource},
    libs::{
        config::{parse_timezone, Config},
        evaluator::Evaluator,
        export::ReportWriter,
        messages::Message,
        report::{agent_rows_without_response, trailing_unanswered, ReportRow},
        ticket::Ticket,
        view::View,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Ticket URL, e.g. https://acme.zendesk.com/agent/tickets/123, or a bare ticket id
    pub ticket_url: String,

    /// Output CSV file [default: <ticket id>.csv]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// IANA time zone used to decide which calendar days are weekends
    #[arg(long, default_value = "UTC")]
    pub timezone: String,

    /// Also print the report as a table
    #[arg(long)]
    pub print: bool,
}

/// Runs the evaluation against Zendesk.
///
/// Everything that can be checked locally (ticket URL, time zone, output path,
/// credentials) is checked before the first network request.
pub async fn cmd(args: EvaluateArgs) -> Result<()> {
    let ticket = Ticket::from_url(&args.ticket_url)?;
    let evaluator = Evaluator::new(parse_timezone(&args.timezone)?);
    let writer = ReportWriter::new(&ticket, args.output)?;

    Config::load_dotenv();
    let config = Config::read()?;
    let zendesk = Zendesk::new(&config.zendesk);

    msg_info!(Message::Evaluating(args.ticket_url.clone()));
    let rows = run(&zendesk, &ticket, &evaluator).await?;
    msg_success!(Message::Evaluated(args.ticket_url, rows.len()));

    if args.print {
        msg_print!(Message::ReportHeader(ticket.id), true);
        View::report(&rows);
    }

    writer.write(&rows)?;
    msg_success!(Message::ReportGenerated(writer.output_path().display().to_string()));

    Ok(())
}

/// Fetches and evaluates one ticket. Any source or validation error aborts
/// the run without producing rows.
pub async fn run<S: CommentSource>(source: &S, ticket: &Ticket, evaluator: &Evaluator) -> Result<Vec<ReportRow>> {
    let records = source.fetch_comments(ticket.id).await?;
    if records.is_empty() {
        msg_warning!(Message::NoCommentsFound(ticket.id));
    }

    let rows = evaluator.evaluate_records(&records)?;

    let unanswered = trailing_unanswered(&rows);
    if unanswered > 0 {
        msg_warning!(Message::UnansweredComments(unanswered));
    }
    let without_question = agent_rows_without_response(&rows);
    if without_question > 0 {
        msg_info!(Message::AgentRepliesWithoutQuestion(without_question));
    }

    Ok(rows)
}
