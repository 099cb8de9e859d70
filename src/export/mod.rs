pub mod layout;
pub mod pdf;
pub mod word;

use std::path::{Path, PathBuf};

use crate::cli::ExportFormat;
use crate::error::Result;
use crate::model::Report;

/// Artifact file name for a report, keyed by its id.
pub fn artifact_name(report: &Report, extension: &str) -> String {
    format!("report-{}.{}", report.id, extension)
}

fn output_path_for(report: &Report, output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(artifact_name(report, extension))
    } else {
        output.to_path_buf()
    }
}

/// Export `report` in the requested format(s) under `output`, which may be a
/// directory or an explicit file path. Returns the paths written.
pub fn export_report(
    report: &Report,
    format: ExportFormat,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if matches!(format, ExportFormat::Pdf | ExportFormat::Both) {
        let path = output_path_for(report, output, "pdf");
        pdf::generate_pdf(report, &path)?;
        written.push(path);
    }

    if matches!(format, ExportFormat::Doc | ExportFormat::Both) {
        let path = output_path_for(report, output, "doc");
        word::generate_doc(report, &path)?;
        written.push(path);
    }

    Ok(written)
}
