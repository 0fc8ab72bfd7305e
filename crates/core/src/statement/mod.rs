//! Financial statement model and balance derivation.
//!
//! A statement is the full report input for one or more accounts over a date
//! range. Parsing deserializes the raw JSON, orders every account's
//! transactions chronologically, and derives the opening/closing balances
//! that the caller never supplies.

pub mod handler;
pub mod parse;
pub mod types;

#[cfg(test)]
mod tests;

pub use handler::StatementReport;
pub use parse::parse_statement;
pub use types::{Account, StatementModel, Transaction};
