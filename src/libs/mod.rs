//! Core library modules.
//!
//! - **Evaluation**: comment model, weekend decomposition, response-time evaluator
//! - **Output**: report rows, duration formatting, CSV export, console table
//! - **Infrastructure**: configuration, ticket references, messaging

pub mod comment;
pub mod config;
pub mod evaluator;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod report;
pub mod ticket;
pub mod view;
pub mod weekend;
