// ABOUTME: CaptionFixer, the entry point for repairing doubled figcaptions on disk.
// ABOUTME: Fixes single files and walks a root folder, isolating failures per file.

//! File-level caption repair.
//!
//! `CaptionFixer::fix_file` loads one document, repairs its captions and
//! writes it back only if something changed. `CaptionFixer::run` applies
//! that to every HTML file under the configured root.

use std::fs;
use std::path::Path;

use crate::dom::captions::repair_html;
use crate::error::FixError;
use crate::options::{FixerBuilder, Options};
use crate::report::Reporter;
use crate::result::{FileOutcome, FileReport, RunSummary};
use crate::walker::html_files;

/// Repairs doubled caption text in HTML files.
#[derive(Debug, Clone)]
pub struct CaptionFixer {
    opts: Options,
}

impl CaptionFixer {
    /// Create a fixer with the given options.
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    /// Create a builder for configuring a fixer.
    pub fn builder() -> FixerBuilder {
        FixerBuilder::new()
    }

    /// Get the fixer's options.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Repair the captions of a single file.
    ///
    /// The file is read and written as UTF-8. It is rewritten only when at
    /// least one caption changed and the fixer is not in dry-run mode.
    pub fn fix_file(
        &self,
        path: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<FileOutcome, FixError> {
        let source = fs::read_to_string(path)
            .map_err(|e| FixError::read(path, "read", Some(e.into())))?;

        let doc = repair_html(&source);
        if doc.scan.captions == 0 {
            log::debug!("no figcaption in {}", path.display());
            return Ok(FileOutcome::NoCaptions);
        }

        for repair in &doc.scan.repairs {
            reporter.caption_repaired(path, repair);
        }

        let Some(html) = doc.html else {
            return Ok(FileOutcome::Unchanged {
                captions: doc.scan.captions,
            });
        };
        let repairs = doc.scan.repairs;

        if self.opts.dry_run {
            return Ok(FileOutcome::WouldUpdate { repairs });
        }

        fs::write(path, html).map_err(|e| FixError::write(path, "write", Some(e.into())))?;
        log::debug!("rewrote {} ({} captions)", path.display(), repairs.len());
        Ok(FileOutcome::Updated { repairs })
    }

    /// Repair every HTML file under the root folder.
    ///
    /// Fails only when the root is not a directory, in which case nothing is
    /// traversed. Per-file failures are reported and collected in the summary.
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<RunSummary, FixError> {
        let root = self.opts.root_folder.as_path();
        if !root.is_dir() {
            let err = FixError::invalid_root(root, "scan");
            reporter.invalid_root(&err);
            return Err(err);
        }

        reporter.scan_started(root);
        let mut summary = RunSummary::new(root, self.opts.dry_run);

        for path in html_files(root, &self.opts.extensions, self.opts.follow_links) {
            reporter.file_started(&path);
            let outcome = self.fix_file(&path, reporter);
            if let Err(ref e) = outcome {
                log::warn!("{}", e);
            }
            let report = FileReport { path, outcome };
            summary.record(&report);
            reporter.file_finished(&report);
        }

        reporter.scan_finished(&summary);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SilentReporter;
    use tempfile::TempDir;

    #[test]
    fn test_fix_file_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let fixer = CaptionFixer::builder().build();
        let err = fixer
            .fix_file(&temp_dir.path().join("gone.html"), &mut SilentReporter)
            .unwrap_err();
        assert!(err.is_read());
    }

    #[test]
    fn test_fix_file_dry_run_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.html");
        let html = "<figure><figcaption>X X</figcaption></figure>";
        fs::write(&path, html).unwrap();

        let fixer = CaptionFixer::builder().dry_run(true).build();
        let outcome = fixer.fix_file(&path, &mut SilentReporter).unwrap();

        assert!(matches!(outcome, FileOutcome::WouldUpdate { .. }));
        assert_eq!(outcome.repairs().len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), html);
    }

    #[test]
    fn test_run_rejects_file_as_root() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.html");
        fs::write(&path, "<figcaption>X X</figcaption>").unwrap();

        let fixer = CaptionFixer::builder().root_folder(&path).build();
        let err = fixer.run(&mut SilentReporter).unwrap_err();

        assert!(err.is_invalid_root());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<figcaption>X X</figcaption>"
        );
    }
}
