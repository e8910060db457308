// ABOUTME: CLI binary for captionfix.
// ABOUTME: Scans a folder for HTML files and rewrites doubled figcaption text in place.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use captionfix::options::{DEFAULT_EXTENSIONS, DEFAULT_ROOT_FOLDER};
use captionfix::{CaptionFixer, ConsoleReporter};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "captionfix")]
#[command(about = "Repair figure captions exported with doubled text (\"A A\" -> \"A\")")]
struct Args {
    /// Folder to scan recursively for HTML files
    #[arg(default_value = DEFAULT_ROOT_FOLDER)]
    root_folder: PathBuf,

    /// File extension to treat as HTML (repeatable; default: html, htm)
    #[arg(short = 'e', long = "ext")]
    extensions: Vec<String>,

    /// Report repairs without writing any file
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Follow symbolic links while walking the folder
    #[arg(long = "follow-links")]
    follow_links: bool,

    /// Only print repairs, updates and errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Print the run summary as JSON on stdout (progress goes to stderr)
    #[arg(long = "json")]
    json_output: bool,

    /// Exit with status 2 if any file could not be processed
    #[arg(long = "strict")]
    strict: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let extensions = if args.extensions.is_empty() {
        DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
    } else {
        args.extensions
    };

    let fixer = CaptionFixer::builder()
        .root_folder(args.root_folder)
        .extensions(extensions)
        .follow_links(args.follow_links)
        .dry_run(args.dry_run)
        .build();

    // Keep stdout pure JSON when a summary is requested.
    let out: Box<dyn Write> = if args.json_output {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut reporter = ConsoleReporter::new(out)
        .quiet(args.quiet)
        .summary_line(!args.json_output);

    let summary = match fixer.run(&mut reporter) {
        Ok(summary) => summary,
        Err(e) => {
            log::debug!("{}", e);
            return ExitCode::from(1);
        }
    };

    if args.json_output {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error serializing summary: {}", e);
                return ExitCode::from(1);
            }
        }
    }

    if args.strict && summary.has_failures() {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}
