use anyhow::Context;
use dialoguer::Input;
use dialoguer::console::Term;
use dialoguer::theme::ColorfulTheme;
use doki_relink::{ReplacementTarget, is_valid_url};
use std::io::{self, BufRead, IsTerminal};
use std::path::Path;

pub(crate) enum Step<T> {
    Continue(T),
    Abort,
}

/// The operator's terminal, acquired once and handed to every prompt.
pub(crate) struct Session {
    term: Term,
    theme: ColorfulTheme,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: ColorfulTheme::default(),
        }
    }

    pub(crate) fn prompt_target(&self) -> anyhow::Result<Step<ReplacementTarget>> {
        let Step::Continue(stylesheet_url) = self.ask_url("Stylesheet URL (replaces doki-docs.css)")? else {
            return Ok(Step::Abort);
        };
        let Step::Continue(script_url) = self.ask_url("Script URL (replaces doki-docs.js)")? else {
            return Ok(Step::Abort);
        };

        Ok(Step::Continue(ReplacementTarget::new(stylesheet_url, script_url)?))
    }

    pub(crate) fn confirm(&self, target: &ReplacementTarget, root: &Path) -> anyhow::Result<Step<()>> {
        println!("==============================");
        println!("Stylesheet URL: {}", target.stylesheet_url());
        println!("Script URL:     {}", target.script_url());
        println!("Directory:      {}", root.display());
        println!("==============================");

        let Step::Continue(answer) = self.ask("Rewrite all HTML files in this directory? (y/N)")? else {
            return Ok(Step::Abort);
        };

        if is_confirmation(&answer) {
            Ok(Step::Continue(()))
        } else {
            log::info!("Cancelled, no files were touched.");
            Ok(Step::Abort)
        }
    }

    fn ask_url(&self, prompt: &str) -> anyhow::Result<Step<String>> {
        let Step::Continue(answer) = self.ask(prompt)? else {
            return Ok(Step::Abort);
        };

        if is_valid_url(&answer) {
            Ok(Step::Continue(answer))
        } else {
            log::error!("'{}' is not a valid URL. Provide an absolute http:// or https:// URL.", answer);
            Ok(Step::Abort)
        }
    }

    fn ask(&self, prompt: &str) -> anyhow::Result<Step<String>> {
        let answer = if io::stdin().is_terminal() {
            Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text_on(&self.term)
                .map(Some)
                .map_err(io::Error::from)
        } else {
            self.term
                .write_str(&format!("{}: ", prompt))
                .and_then(|_| read_plain_answer(&mut io::stdin().lock()))
        };

        match answer {
            Ok(Some(answer)) => Ok(Step::Continue(answer.trim().to_string())),
            Ok(None) => {
                log::warn!("Input ended before '{}' was answered.", prompt);
                Ok(Step::Abort)
            }
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {
                let _ = self.term.show_cursor();
                log::warn!("Interrupted!");
                Ok(Step::Abort)
            }
            Err(error) => Err(error).with_context(|| format!("Cannot read the answer to '{}'", prompt)),
        }
    }
}

/// One answer from a non-interactive input, `None` once the input is exhausted.
fn read_plain_answer(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();

    match reader.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line)),
    }
}

fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
