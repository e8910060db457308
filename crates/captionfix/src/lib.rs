// ABOUTME: Main library entry point for captionfix, a repair tool for doubled figure captions.
// ABOUTME: Re-exports the public API: CaptionFixer, FixerBuilder, Options, results, reporters and errors.

//! captionfix - repairs HTML figure captions exported as `"A A"`.
//!
//! Some HTML exporters write a `<figcaption>` whose text is its real caption
//! repeated twice with a single space between the copies. This crate finds
//! such captions in a directory of HTML files and rewrites them to the single
//! copy, saving each changed file in place.
//!
//! # Example
//!
//! ```no_run
//! use captionfix::{CaptionFixer, ConsoleReporter, FixError};
//!
//! fn main() -> Result<(), FixError> {
//!     let fixer = CaptionFixer::builder().root_folder("pages").build();
//!     let mut reporter = ConsoleReporter::new(std::io::stdout());
//!     let summary = fixer.run(&mut reporter)?;
//!     println!("{} files updated", summary.files_updated);
//!     Ok(())
//! }
//! ```

pub mod dedup;
pub mod dom;
pub mod error;
pub mod fixer;
pub mod options;
pub mod report;
pub mod result;
pub mod walker;

pub use crate::dedup::dedupe;
pub use crate::error::{ErrorCode, FixError};
pub use crate::fixer::CaptionFixer;
pub use crate::options::{FixerBuilder, Options};
pub use crate::report::{ConsoleReporter, Reporter, SilentReporter};
pub use crate::result::{CaptionRepair, FileFailure, FileOutcome, FileReport, RunSummary};
