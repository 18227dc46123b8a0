#![forbid(unsafe_code)]

use crate::session::{Session, Step};

use anyhow::Context;
use clap::Parser;
use dialoguer::console::Term;
use doki_relink::RelinkOptions;
use log::LevelFilter;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

mod cli;
mod session;

fn main() -> ExitCode {
    env_logger::builder()
        .format_timestamp(None)
        .format_target(false)
        .filter_level(LevelFilter::Info)
        .init();

    cli::RelinkCli::parse();

    match relink() {
        Ok(exit_code) => exit_code,
        Err(error) => {
            log::error!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn relink() -> anyhow::Result<ExitCode> {
    let root = std::env::current_dir().context("Cannot determine current working directory")?;

    let walking = Arc::new(AtomicBool::new(false));
    let interrupted = Arc::new(AtomicBool::new(false));
    install_interrupt_handler(walking.clone(), interrupted.clone())?;

    let session = Session::new();

    let Step::Continue(target) = session.prompt_target()? else {
        return Ok(ExitCode::SUCCESS);
    };
    let Step::Continue(()) = session.confirm(&target, &root)? else {
        return Ok(ExitCode::SUCCESS);
    };

    walking.store(true, Ordering::SeqCst);

    Ok(doki_relink::run(RelinkOptions { root, target, interrupted }))
}

/// Before the walk an interrupt ends the process right away, during the walk it stops after the current file.
fn install_interrupt_handler(walking: Arc<AtomicBool>, interrupted: Arc<AtomicBool>) -> anyhow::Result<()> {
    ctrlc::set_handler(move || {
        if walking.load(Ordering::SeqCst) {
            interrupted.store(true, Ordering::SeqCst);
        } else {
            let _ = Term::stderr().show_cursor();
            eprintln!();
            log::warn!("Interrupted!");
            std::process::exit(0);
        }
    })
    .context("Failed to set Ctrl+C handler")
}
