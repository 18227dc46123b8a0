use crate::target::ReplacementTarget;

use anyhow::Context;
use regex::{NoExpand, Regex};
use std::path::Path;
use std::sync::LazyLock;

static STYLESHEET_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)href\s*=\s*["'][^"']*doki-docs\.css[^"']*["']"#).expect("stylesheet reference pattern must compile"));

static SCRIPT_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)src\s*=\s*["'][^"']*doki-docs\.js[^"']*["']"#).expect("script reference pattern must compile"));

/// What happened to a single HTML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Updated,
    Unchanged,
    Failed(String),
}

impl FileOutcome {
    pub fn succeeded(&self) -> bool {
        !matches!(self, FileOutcome::Failed(_))
    }

    pub fn changed(&self) -> bool {
        matches!(self, FileOutcome::Updated)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FileOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Points the doki-docs stylesheet and script references of one file at the URLs of `target`.
///
/// The file is only written when its content actually changes. Errors never escape,
/// they are reported through [FileOutcome::Failed].
pub fn process_file(path: &Path, target: &ReplacementTarget) -> FileOutcome {
    match rewrite_file(path, target) {
        Ok(true) => {
            log::info!("Updated: {}", path.display());
            FileOutcome::Updated
        }
        Ok(false) => {
            log::info!("No references to update: {}", path.display());
            FileOutcome::Unchanged
        }
        Err(error) => {
            let message = format!("{:#}", error);
            log::warn!("Failed to process {}: {}", path.display(), message);
            FileOutcome::Failed(message)
        }
    }
}

fn rewrite_file(path: &Path, target: &ReplacementTarget) -> anyhow::Result<bool> {
    let content = std::fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;

    let Some(rewritten) = rewrite_references(&content, target) else {
        return Ok(false);
    };

    std::fs::write(path, rewritten).with_context(|| format!("Cannot write {}", path.display()))?;

    Ok(true)
}

/// Returns the rewritten content, or `None` if nothing changed.
fn rewrite_references(content: &str, target: &ReplacementTarget) -> Option<String> {
    let stylesheet_attribute = format!("href=\"{}\"", target.stylesheet_url());
    let script_attribute = format!("src=\"{}\"", target.script_url());

    // URLs may contain '$', which must not be read as a capture group reference.
    let with_stylesheet = STYLESHEET_REFERENCE.replace_all(content, NoExpand(&stylesheet_attribute));
    let with_script = SCRIPT_REFERENCE.replace_all(&with_stylesheet, NoExpand(&script_attribute));

    (with_script != content).then(|| with_script.into_owned())
}
