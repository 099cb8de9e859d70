//! Word-compatible artifact generation.
//!
//! The same labeled fields as the PDF, rendered as a plain-text body and
//! written to a `.doc` file. Word processors open it as a legacy document;
//! the photo is not embedded.

use std::path::Path;

use crate::error::{ReportError, Result};
use crate::export::layout::{field_lines, HEADING};
use crate::model::Report;

/// Content type the artifact is served with.
pub const DOC_CONTENT_TYPE: &str = "application/msword";

/// Render the document body: heading plus the labeled fields, one blank line
/// between entries.
pub fn doc_body(report: &Report) -> String {
    let mut body = String::new();
    body.push_str(HEADING);
    body.push_str("\n\n");
    for line in field_lines(report) {
        body.push_str(&line);
        body.push_str("\n\n");
    }
    body
}

pub fn generate_doc(report: &Report, output_path: &Path) -> Result<()> {
    std::fs::write(output_path, doc_body(report))
        .map_err(|e| ReportError::DocGeneration(format!("{}: {}", output_path.display(), e)))?;
    Ok(())
}
