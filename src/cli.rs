//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "zellij-theme")]
#[command(author, version, about = "Generate a Zellij KDL theme from theme.json")]
pub struct Cli {
    /// Theme description to read (default: theme.json next to the executable)
    pub input: Option<PathBuf>,

    /// KDL file to write (default: theme.kdl next to the executable)
    pub output: Option<PathBuf>,
}
