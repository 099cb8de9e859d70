use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Photo could not be read: {0}")]
    PhotoLoad(String),

    #[error("Report not found: {0}")]
    ReportNotFound(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("Word export error: {0}")]
    DocGeneration(String),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
