#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

mod rewrite;
mod statistics;
mod target;
mod validate;
mod walk;

pub use crate::rewrite::{FileOutcome, process_file};
pub use crate::statistics::Statistics;
pub use crate::target::ReplacementTarget;
pub use crate::validate::is_valid_url;
pub use crate::walk::{process_directory, process_directory_until};

pub struct RelinkOptions {
    pub root: PathBuf,
    pub target: ReplacementTarget,
    pub interrupted: Arc<AtomicBool>,
}

pub fn run(options: RelinkOptions) -> ExitCode {
    log::info!("Scanning {} for HTML files...", options.root.display());

    let statistics = process_directory_until(&options.root, &options.target, &options.interrupted);

    println!("==============================");
    println!("Processed files: {}", statistics.processed_files);
    println!("Updated files:   {}", statistics.updated_files);
    println!("Skipped files:   {}", statistics.skipped_files);
    println!("Failed files:    {}", statistics.failed_files);

    let (level, message) = closing_line(&statistics);
    log::log!(level, "{}", message);

    ExitCode::SUCCESS
}

/// Any update wins over errors, errors win over "nothing to do".
fn closing_line(statistics: &Statistics) -> (log::Level, String) {
    if statistics.updated_files > 0 {
        (
            log::Level::Info,
            format!("Done! {} file(s) now reference the new stylesheet and script URLs.", statistics.updated_files),
        )
    } else if statistics.failed_files > 0 {
        (
            log::Level::Error,
            format!("No file was updated, but {} error(s) occurred. See the messages above.", statistics.failed_files),
        )
    } else {
        (log::Level::Info, "No changes needed, no file references doki-docs.css or doki-docs.js.".to_string())
    }
}
