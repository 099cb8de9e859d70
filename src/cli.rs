use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "event-report")]
#[command(about = "College event report collection and document export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory holding the report collection (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in a new event report interactively and submit it
    New {
        /// Image file to attach as the report photo
        #[arg(short, long)]
        photo: Option<PathBuf>,

        /// Skip the simulated submit delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Show the most recent reports
    Recent {
        /// How many reports to show (default from config, 5)
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Show every stored report
    List,

    /// Export a stored report as PDF and/or Word document
    Export {
        /// Report id (as shown by list/recent)
        #[arg(required = true)]
        id: String,

        /// Output format (pdf/doc/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// Output file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or edit settings
    Config {
        /// Set the directory the report collection is stored in
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Show current settings
        #[arg(long)]
        show: bool,
    },
}

/// Export artifact selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Doc,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "doc" | "word" => Ok(ExportFormat::Doc),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use pdf, doc, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Doc => write!(f, "doc"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
