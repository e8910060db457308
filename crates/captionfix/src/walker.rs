// ABOUTME: Recursive discovery of HTML files under a root folder.
// ABOUTME: Wraps walkdir, filtering regular files by case-insensitive name suffix.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Returns true if `path`'s file name ends in `.<ext>` for one of `extensions`.
///
/// The comparison is case-insensitive. `extensions` must be lowercase and
/// without a leading dot, as produced by `FixerBuilder::extensions`.
pub fn has_html_extension(path: &Path, extensions: &[String]) -> bool {
    let name = match path.file_name() {
        Some(n) => n.to_string_lossy().to_lowercase(),
        None => return false,
    };
    extensions.iter().any(|ext| {
        name.len() > ext.len()
            && name.ends_with(ext.as_str())
            && name.as_bytes()[name.len() - ext.len() - 1] == b'.'
    })
}

/// Walks `root` recursively and yields every HTML file beneath it.
///
/// Entries that cannot be read are logged and skipped so one bad
/// subdirectory does not end the walk. Symlinks to files are yielded even
/// when `follow_links` is off; it only controls descending into linked
/// directories. Order follows the filesystem.
pub fn html_files<'a>(
    root: &Path,
    extensions: &'a [String],
    follow_links: bool,
) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .follow_links(follow_links)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                log::warn!("skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| e.file_type().is_file() || (e.path_is_symlink() && e.path().is_file()))
        .filter(move |e| has_html_extension(e.path(), extensions))
        .map(|e| e.into_path())
}
