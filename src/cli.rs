//! CLI argument parsing.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Input value meaning "read the changelog from stdin".
pub const STDIN_INPUT: &str = "-";

/// Extract release metadata from a release controller changelog page.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long)]
    /// Release tag the changelog belongs to. Included in warnings.
    pub tag: String,

    #[arg(long, default_value = STDIN_INPUT)]
    /// Changelog HTML file. Use "-" to read from stdin.
    pub input: String,

    #[arg(long)]
    /// Extractor configuration file. Defaults to release-changelog.toml in
    /// the working directory when present.
    pub config: Option<PathBuf>,

    #[arg(long)]
    /// Write JSON output to this file instead of stdout.
    pub out_file: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,

    /// Data to extract. Defaults to everything.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Extraction subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// All release metadata.
    Summary,

    /// Tag of the release this changelog was diffed against.
    PreviousTag,

    /// CoreOS and Kubernetes versions.
    Components,

    /// Source repositories included in the release.
    Repositories,

    /// Pull requests merged into the release.
    PullRequests,
}

impl Args {
    /// Subcommand to run, falling back to [`Command::Summary`].
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Summary)
    }
}
