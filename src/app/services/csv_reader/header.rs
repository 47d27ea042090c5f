//! Mandatory-column validation
//!
//! Every format names the columns a file must carry before any data row is
//! read. Validation collects one message per missing column so the operator
//! sees the whole repair list at once, then a summary line, and the caller
//! aborts ingestion.

use super::columns::ColumnMap;
use crate::{Error, Result};

/// Summary line closing a failed validation message
pub const PROCESSING_HALTED_MESSAGE: &str = "Protocol processing halted.";

/// Check that every mandatory column is present in the header row
///
/// Returns an error enumerating all missing columns followed by the
/// processing-halted line. On failure no data row may be read.
pub fn validate_header(columns: &ColumnMap, mandatory: &[&str], file: &str) -> Result<()> {
    let mut messages: Vec<String> = Vec::new();

    for column in mandatory {
        if columns.contains(column) {
            continue;
        }

        messages.push(format!(
            "CSV file does not contain mandatory column '{}'.",
            column
        ));
    }

    if messages.is_empty() {
        return Ok(());
    }

    messages.push(PROCESSING_HALTED_MESSAGE.to_string());

    Err(Error::header_validation(file, messages))
}
