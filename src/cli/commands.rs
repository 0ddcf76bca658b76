//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ripen")]
#[command(about = "Advance review lifecycle tags in markdown front matter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Root directory to scan for documents (default: current directory)
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Report what would change without rewriting files
    #[arg(long)]
    pub dry_run: bool,
}
