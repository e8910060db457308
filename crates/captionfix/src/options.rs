// ABOUTME: Configuration options for captionfix including Options and FixerBuilder.
// ABOUTME: FixerBuilder provides a fluent API for constructing CaptionFixer instances.

use std::path::PathBuf;

use crate::fixer::CaptionFixer;

/// Folder scanned when no root is given.
pub const DEFAULT_ROOT_FOLDER: &str = "pages";

/// File name suffixes treated as HTML, without the leading dot.
pub const DEFAULT_EXTENSIONS: &[&str] = &["html", "htm"];

/// Configuration options for a caption fixing run.
#[derive(Debug, Clone)]
pub struct Options {
    pub root_folder: PathBuf,
    pub extensions: Vec<String>,
    pub follow_links: bool,
    pub dry_run: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root_folder: PathBuf::from(DEFAULT_ROOT_FOLDER),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            follow_links: false,
            dry_run: false,
        }
    }
}

/// Builder for constructing CaptionFixer instances with custom configuration.
#[derive(Debug, Clone)]
pub struct FixerBuilder {
    opts: Options,
}

impl FixerBuilder {
    /// Create a new FixerBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the folder to scan.
    pub fn root_folder(mut self, root: impl Into<PathBuf>) -> Self {
        self.opts.root_folder = root.into();
        self
    }

    /// Replace the list of HTML file extensions. A leading dot is ignored.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.opts.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    /// Follow symbolic links while walking the tree.
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.opts.follow_links = follow;
        self
    }

    /// Report repairs without writing any file.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.opts.dry_run = dry_run;
        self
    }

    /// Build the CaptionFixer with the configured options.
    pub fn build(self) -> CaptionFixer {
        CaptionFixer::new(self.opts)
    }
}

impl Default for FixerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_scan_pages_for_html_and_htm() {
        let opts = Options::default();
        assert_eq!(opts.root_folder, PathBuf::from("pages"));
        assert_eq!(opts.extensions, vec!["html", "htm"]);
        assert!(!opts.follow_links);
        assert!(!opts.dry_run);
    }

    #[test]
    fn extensions_are_normalized() {
        let fixer = FixerBuilder::new()
            .extensions([".XHTML", "Htm", "."])
            .build();
        assert_eq!(fixer.options().extensions, vec!["xhtml", "htm"]);
    }
}
