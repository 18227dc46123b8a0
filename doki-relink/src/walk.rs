use crate::rewrite::process_file;
use crate::statistics::Statistics;
use crate::target::ReplacementTarget;

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use walkdir::{DirEntry, WalkDir};

const DEPENDENCY_CACHE_DIRECTORY: &str = "node_modules";
const HTML_SUFFIX: &str = ".html";

/// Rewrites every HTML file below `root`, see [process_directory_until].
pub fn process_directory(root: &Path, target: &ReplacementTarget) -> Statistics {
    process_directory_until(root, target, &AtomicBool::new(false))
}

/// Rewrites every HTML file below `root` until `interrupted` is set.
///
/// Hidden directories and dependency caches are skipped together with everything inside them.
/// Directories that cannot be listed are counted as failures, their siblings are still visited.
/// The flag is checked before each file, so a file that is being rewritten is always finished.
pub fn process_directory_until(root: &Path, target: &ReplacementTarget, interrupted: &AtomicBool) -> Statistics {
    let mut statistics = Statistics::new();

    let entries = WalkDir::new(root).into_iter().filter_entry(|entry| !is_excluded_directory(entry));

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                log::warn!("Cannot read directory {}: {}", error.path().unwrap_or(root).display(), error);
                statistics.record_unreadable_directory();
                continue;
            }
        };

        if !is_html_file(&entry) {
            continue;
        }

        if interrupted.load(Ordering::SeqCst) {
            log::warn!("Interrupted! The remaining files are left untouched.");
            break;
        }

        let outcome = process_file(entry.path(), target);
        statistics.record(&outcome);
    }

    statistics
}

fn is_excluded_directory(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == DEPENDENCY_CACHE_DIRECTORY
}

fn is_html_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(HTML_SUFFIX)
}
