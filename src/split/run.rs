//! Top-level split sequencing
//!
//! Validates repository state, computes the groups, runs the confirmation
//! gates, drives every group through the publish workflow, and restores
//! the original branch.

use crate::error::{Error, Result};
use crate::prompt::Prompt;
use crate::review::ReviewClient;
use crate::split::description::append_uploaded_by_line;
use crate::split::execute::{execute_split, SplitReport};
use crate::split::gates::{confirm_large_fan_out, confirm_missing_bug_link};
use crate::split::partition::{split_files_by_owners, OwnersProbe};
use crate::types::RunContext;
use crate::vcs::Vcs;
use tracing::debug;

/// How a split run ended
#[derive(Debug, Clone)]
pub enum SplitOutcome {
    /// Every group was processed; the report tallies what happened
    Completed {
        /// Total number of groups
        num_cls: usize,
        /// Per-directory outcomes (empty for a dry run)
        report: SplitReport,
    },
    /// The operator declined a confirmation gate before any processing
    Declined,
}

/// Operator-supplied inputs for one split run
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    /// Raw CL description template (`$directory` placeholder allowed)
    pub description: String,
    /// Optional comment template posted on each uploaded CL
    pub comment: Option<String>,
    /// Print CL info instead of uploading
    pub dry_run: bool,
    /// Trigger a commit-queue dry run on each upload
    pub cq_dry_run: bool,
    /// Enable auto-submit on each upload
    pub enable_auto_submit: bool,
    /// Topic to associate with uploaded CLs
    pub topic: Option<String>,
    /// Maximum directory depth for owner resolution; 0 means no limit
    pub max_depth: usize,
}

/// Split the current branch into per-OWNERS CLs.
///
/// Declining a confirmation gate is an `Ok` outcome, not an error.
/// Precondition failures and backend process errors propagate; publish
/// branches already created stay behind as resume checkpoints.
pub fn split_branch(
    opts: &SplitOptions,
    vcs: &dyn Vcs,
    review: &dyn ReviewClient,
    prompt: &dyn Prompt,
    probe: &dyn OwnersProbe,
) -> Result<SplitOutcome> {
    vcs.ensure_repository()?;

    let description = append_uploaded_by_line(&opts.description);

    let original_branch = vcs.current_branch()?;
    let upstream = vcs
        .upstream(&original_branch)?
        .ok_or_else(|| Error::NoUpstream(original_branch.clone()))?;
    let repo_root = vcs.repo_root()?;

    let files = vcs.status_diff(&repo_root, &upstream)?;
    if files.is_empty() {
        return Err(Error::EmptyChangeSet);
    }
    debug!("{} changed files against {upstream}", files.len());

    let author = vcs.config_value("user.email")?;

    let groups = split_files_by_owners(&files, opts.max_depth, probe);
    println!(
        "Will split current branch ({original_branch}) into {} CLs.\n",
        groups.len()
    );

    if !confirm_large_fan_out(groups.len(), opts.cq_dry_run, prompt)? {
        return Ok(SplitOutcome::Declined);
    }
    if !confirm_missing_bug_link(&description, prompt)? {
        return Ok(SplitOutcome::Declined);
    }

    let ctx = RunContext {
        original_branch: original_branch.clone(),
        upstream,
        repo_root,
        description,
        comment: opts.comment.clone(),
        author,
        dry_run: opts.dry_run,
        cq_dry_run: opts.cq_dry_run,
        enable_auto_submit: opts.enable_auto_submit,
        topic: opts.topic.clone(),
        max_depth: opts.max_depth,
    };

    let report = execute_split(&ctx, &groups, vcs, review)?;

    vcs.checkout(&original_branch)?;

    Ok(SplitOutcome::Completed {
        num_cls: groups.len(),
        report,
    })
}
