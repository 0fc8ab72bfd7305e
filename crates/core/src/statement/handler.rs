//! Report handler for the `statement` template.

use serde_json::Value;
use tracing::debug;

use crate::report::{ReportError, ReportHandler};

use super::parse::parse_statement;

/// Handler binding the `statement` template name to the statement model.
///
/// Parsing derives all computed balances; rendering is the shared dispatch
/// behavior provided by the [`ReportHandler`] trait.
#[derive(Debug, Default)]
pub struct StatementReport;

impl StatementReport {
    /// Template name this handler serves.
    pub const TEMPLATE_NAME: &'static str = "statement";

    /// Creates a new statement report handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ReportHandler for StatementReport {
    fn template_name(&self) -> &'static str {
        Self::TEMPLATE_NAME
    }

    fn parse(&self, input: &[u8]) -> Result<Value, ReportError> {
        debug!("parsing statement data from input");
        let statement = parse_statement(input)?;
        serde_json::to_value(statement).map_err(|e| {
            ReportError::processing("failed to serialize statement model", Box::new(e))
        })
    }
}
