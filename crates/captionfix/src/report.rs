// ABOUTME: Progress reporting for caption fixing runs.
// ABOUTME: Defines the Reporter observer trait and a line-oriented console implementation.

use std::io::Write;
use std::path::Path;

use crate::error::FixError;
use crate::result::{CaptionRepair, FileOutcome, FileReport, RunSummary};

/// Observer notified as a run progresses. Every method defaults to a no-op.
pub trait Reporter {
    fn invalid_root(&mut self, _err: &FixError) {}
    fn scan_started(&mut self, _root: &Path) {}
    fn file_started(&mut self, _path: &Path) {}
    fn caption_repaired(&mut self, _path: &Path, _repair: &CaptionRepair) {}
    fn file_finished(&mut self, _report: &FileReport) {}
    fn scan_finished(&mut self, _summary: &RunSummary) {}
}

/// Reporter that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}

/// Writes human-readable progress lines.
///
/// Output is advisory; write errors are ignored.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
    quiet: bool,
    summary_line: bool,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            quiet: false,
            summary_line: true,
        }
    }

    /// Suppress per-file "processing" lines.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Print the closing totals line (disabled when a JSON summary follows).
    pub fn summary_line(mut self, enabled: bool) -> Self {
        self.summary_line = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn invalid_root(&mut self, err: &FixError) {
        let _ = writeln!(
            self.out,
            "Error: the path '{}' is not a valid folder.",
            err.path.display()
        );
    }

    fn scan_started(&mut self, root: &Path) {
        if !self.quiet {
            let _ = writeln!(self.out, "Scanning folder: '{}'...", root.display());
        }
    }

    fn file_started(&mut self, path: &Path) {
        if !self.quiet {
            let _ = writeln!(self.out, "\nProcessing file: {}", path.display());
        }
    }

    fn caption_repaired(&mut self, _path: &Path, repair: &CaptionRepair) {
        let _ = writeln!(
            self.out,
            "    - Found duplicate caption: '{}'",
            repair.original
        );
        let _ = writeln!(self.out, "    - Fixed to: '{}'", repair.repaired);
    }

    fn file_finished(&mut self, report: &FileReport) {
        let path = report.path.display();
        let _ = match &report.outcome {
            Ok(FileOutcome::Updated { .. }) => {
                writeln!(self.out, "-> File '{}' updated.", path)
            }
            Ok(FileOutcome::WouldUpdate { .. }) => {
                writeln!(self.out, "-> File '{}' would be updated (dry run).", path)
            }
            Ok(_) => Ok(()),
            Err(e) => writeln!(self.out, "Error processing file '{}': {}", path, e),
        };
    }

    fn scan_finished(&mut self, summary: &RunSummary) {
        if !self.summary_line {
            return;
        }
        let _ = writeln!(self.out, "\nAll HTML files processed.");
        let _ = writeln!(
            self.out,
            "{} scanned, {} updated, {} captions repaired, {} failed.",
            summary.files_scanned,
            summary.files_updated,
            summary.captions_repaired,
            summary.failures.len()
        );
    }
}
