// ABOUTME: Result types for caption fixing: per-caption repairs, per-file outcomes and run summaries.
// ABOUTME: Per-file failures are carried as data so one bad file never aborts a run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FixError;

/// A caption whose doubled text was replaced by its first half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionRepair {
    pub original: String,
    pub repaired: String,
}

/// What happened to a single file that was read successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// The document has no figcaption elements.
    NoCaptions,
    /// Captions exist but none matched the duplication pattern.
    Unchanged { captions: usize },
    /// Captions were repaired and the file was rewritten.
    Updated { repairs: Vec<CaptionRepair> },
    /// Captions would be repaired; nothing was written (dry run).
    WouldUpdate { repairs: Vec<CaptionRepair> },
}

impl FileOutcome {
    /// Repairs applied (or that would be applied) to the file.
    pub fn repairs(&self) -> &[CaptionRepair] {
        match self {
            FileOutcome::Updated { repairs } | FileOutcome::WouldUpdate { repairs } => repairs,
            _ => &[],
        }
    }

    /// Returns true if the file was rewritten.
    pub fn is_updated(&self) -> bool {
        matches!(self, FileOutcome::Updated { .. })
    }
}

/// The result of processing one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Result<FileOutcome, FixError>,
}

/// A file that could not be processed, kept for the run summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Totals for a whole directory run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub root: PathBuf,
    pub dry_run: bool,
    pub files_scanned: usize,
    /// Files rewritten, or that would be rewritten in a dry run.
    pub files_updated: usize,
    pub captions_repaired: usize,
    pub failures: Vec<FileFailure>,
}

impl RunSummary {
    pub fn new(root: &Path, dry_run: bool) -> Self {
        Self {
            root: root.to_path_buf(),
            dry_run,
            ..Default::default()
        }
    }

    /// Fold one file's report into the totals.
    pub fn record(&mut self, report: &FileReport) {
        self.files_scanned += 1;
        match &report.outcome {
            Ok(outcome) => {
                let repairs = outcome.repairs();
                if !repairs.is_empty() {
                    self.files_updated += 1;
                    self.captions_repaired += repairs.len();
                }
            }
            Err(e) => self.failures.push(FileFailure {
                path: report.path.clone(),
                error: e.to_string(),
            }),
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
