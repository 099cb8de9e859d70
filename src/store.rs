//! Report collection persistence.
//!
//! A single JSON file holds the whole ordered collection. Every append
//! rewrites the file; absent or unparsable content loads as an empty
//! collection rather than an error.

use crate::error::Result;
use crate::model::Report;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

pub const STORE_FILE_NAME: &str = "reports.json";

#[derive(Debug)]
pub struct ReportStore {
    path: PathBuf,
    reports: Vec<Report>,
}

impl ReportStore {
    /// Open the store at `path`, loading whatever is currently persisted.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let reports = Self::load(&path);
        Self { path, reports }
    }

    fn load(path: &Path) -> Vec<Report> {
        if !path.exists() {
            return Vec::new();
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(_) => return Vec::new(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(reports) => reports,
            // unparsable content is treated as no data
            Err(_) => Vec::new(),
        }
    }

    /// Append a report and rewrite the persisted collection.
    pub fn append(&mut self, report: Report) -> Result<()> {
        self.reports.push(report);
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.reports)?;
        Ok(())
    }

    /// Every report in insertion order.
    pub fn all(&self) -> &[Report] {
        &self.reports
    }

    /// The last `n` reports, still in insertion order.
    pub fn recent(&self, n: usize) -> &[Report] {
        let start = self.reports.len().saturating_sub(n);
        &self.reports[start..]
    }

    pub fn get(&self, id: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
