//! cl-split - split a branch into per-OWNERS changelists
//!
//! CLI binary that partitions the current branch's changes by OWNERS
//! boundary and uploads one CL per group.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "cl-split")]
#[command(about = "Split the current branch into per-OWNERS CLs and upload them for review")]
#[command(version)]
struct Cli {
    /// File containing the description for uploaded CLs; $directory is
    /// replaced with each group's directory
    #[arg(short, long, value_name = "FILE")]
    description: PathBuf,

    /// File containing a comment to post on each uploaded CL; $directory
    /// is replaced as in the description
    #[arg(short, long, value_name = "FILE")]
    comment: Option<PathBuf>,

    /// Print CL info without creating branches or uploading
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Send each uploaded CL to the commit queue as a dry run
    #[arg(long)]
    cq_dry_run: bool,

    /// Enable auto-submit on uploaded CLs
    #[arg(short = 'a', long)]
    enable_auto_submit: bool,

    /// Topic to associate with uploaded CLs
    #[arg(long)]
    topic: Option<String>,

    /// Maximum directory depth to search for OWNERS files; 0 means no limit
    #[arg(long, default_value_t = 0)]
    max_depth: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run_split(&cli)?;
    Ok(())
}
