use clap::Parser;

/// Prompts for the new stylesheet and script URLs, then rewrites every HTML file below the current directory.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct RelinkCli {}
