//! Split command - wire the real backends and run the split

use crate::cli::style::{check, cross, Stylize};
use crate::Cli;
use cl_split::error::Result;
use cl_split::prompt::TerminalPrompt;
use cl_split::review::GitClUpload;
use cl_split::split::{split_branch, FsProbe, SplitOptions, SplitOutcome};
use cl_split::vcs::{GitCli, Vcs};
use std::fs;

/// Run the split command
pub fn run_split(cli: &Cli) -> Result<()> {
    let vcs = GitCli::new();
    vcs.ensure_repository()?;
    let probe = FsProbe::new(vcs.repo_root()?);

    let description = fs::read_to_string(&cli.description)?;
    let comment = cli
        .comment
        .as_ref()
        .map(fs::read_to_string)
        .transpose()?;

    if cli.dry_run {
        println!(
            "{}",
            "Dry run - no branches or CLs will be created".muted()
        );
    }

    let opts = SplitOptions {
        description,
        comment,
        dry_run: cli.dry_run,
        cq_dry_run: cli.cq_dry_run,
        enable_auto_submit: cli.enable_auto_submit,
        topic: cli.topic.clone(),
        max_depth: cli.max_depth,
    };

    let outcome = split_branch(
        &opts,
        &vcs,
        &GitClUpload::new(),
        &TerminalPrompt,
        &probe,
    )?;

    match outcome {
        SplitOutcome::Declined => {
            println!("{}", "Split aborted.".warn().for_stdout());
        }
        SplitOutcome::Completed { num_cls, report } => {
            if cli.dry_run {
                println!("Dry run over {num_cls} CLs complete.");
            } else {
                println!(
                    "{} Uploaded {} of {num_cls} CLs ({} skipped as already started).",
                    check(),
                    report.uploaded.len(),
                    report.skipped.len()
                );
                if !report.failed.is_empty() {
                    eprintln!(
                        "{} {} uploads failed; delete their branches and rerun to resume.",
                        cross(),
                        report.failed.len()
                    );
                }
            }
        }
    }

    Ok(())
}
