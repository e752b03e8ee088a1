//! # response-times - support ticket response-time reporter
//!
//! Computes how long agents took to answer customers on a single support
//! ticket and exports an auditable CSV report.
//!
//! ## Features
//!
//! - **Response Pairing**: Each agent reply is matched to the oldest unanswered customer comment
//! - **Weekend Awareness**: Saturday and Sunday time is excluded, clipped to the interval
//! - **Auditable Output**: Every response time comes with the formula that produced it
//! - **Zendesk Integration**: Public comments fetched with API token authentication
//! - **Data Export**: CSV report, optional console table
//!
//! ## Usage
//!
//! ```rust,no_run
//! use response_times::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
