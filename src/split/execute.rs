//! Per-group publish workflow
//!
//! Drives each ownership group through branch creation, commit, upload,
//! and optional comment, or prints what would happen in dry-run mode.
//! Publish-branch existence is the resume checkpoint: a rerun skips every
//! group whose branch is already there.

use crate::error::Result;
use crate::review::{ReviewClient, EVERYONE};
use crate::split::description::substitute_directory;
use crate::split::partition::branch_name;
use crate::types::{OwnershipGroup, RunContext};
use crate::vcs::Vcs;
use std::io::Write;
use tempfile::NamedTempFile;

/// What happened to one group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    /// CL uploaded
    Uploaded,
    /// Publish branch already existed; nothing was touched
    Skipped,
    /// Upload exited nonzero; branch and commit are left for resume
    UploadFailed,
}

/// Per-directory tally of one run, for the end-of-run summary
#[derive(Debug, Clone, Default)]
pub struct SplitReport {
    /// Directories whose CL was uploaded
    pub uploaded: Vec<String>,
    /// Directories skipped because their publish branch already existed
    pub skipped: Vec<String>,
    /// Directories whose upload returned a nonzero exit code
    pub failed: Vec<String>,
}

/// Process every group in order.
///
/// Reviewers are resolved per group just before it is uploaded or
/// printed. Upload failures are reported and the loop continues; only
/// infrastructure errors propagate.
pub fn execute_split(
    ctx: &RunContext,
    groups: &[OwnershipGroup],
    vcs: &dyn Vcs,
    review: &dyn ReviewClient,
) -> Result<SplitReport> {
    let num_cls = groups.len();
    let mut exclude: Vec<String> = vec![EVERYONE.to_string()];
    if let Some(author) = &ctx.author {
        exclude.push(author.clone());
    }

    let mut report = SplitReport::default();
    for (index, group) in groups.iter().enumerate() {
        let reviewers = review.suggest_owners(&group.file_paths(), &exclude)?;
        if ctx.dry_run {
            print_cl_info(index + 1, num_cls, ctx, group, &reviewers);
            continue;
        }
        match upload_cl(ctx, group, &reviewers, vcs, review)? {
            UploadStatus::Uploaded => report.uploaded.push(group.directory.clone()),
            UploadStatus::Skipped => report.skipped.push(group.directory.clone()),
            UploadStatus::UploadFailed => report.failed.push(group.directory.clone()),
        }
    }

    Ok(report)
}

/// Upload one group's changes as an independent CL.
///
/// Side effects are confined to this group: one branch, one working-tree
/// mutation, one commit, one upload, and at most one comment.
pub fn upload_cl(
    ctx: &RunContext,
    group: &OwnershipGroup,
    reviewers: &[String],
    vcs: &dyn Vcs,
    review: &dyn ReviewClient,
) -> Result<UploadStatus> {
    let branch = branch_name(&ctx.original_branch, &group.directory);
    if vcs.branches()?.iter().any(|b| *b == branch) {
        println!(
            "Skipping {} for which a branch already exists.",
            group.directory
        );
        return Ok(UploadStatus::Skipped);
    }
    vcs.create_tracking_branch(&branch, &ctx.upstream)?;

    let mut deleted = Vec::new();
    let mut modified = Vec::new();
    for file in &group.files {
        let abspath = ctx.repo_root.join(&file.path);
        if file.action.is_deletion() {
            deleted.push(abspath);
        } else {
            modified.push(abspath);
        }
    }
    if !deleted.is_empty() {
        vcs.remove_paths(&deleted)?;
    }
    if !modified.is_empty() {
        vcs.checkout_paths(&ctx.original_branch, &modified)?;
    }

    // The message file must outlive the commit call and nothing else; the
    // temp file is removed on every exit path when it goes out of scope.
    {
        let mut message_file = NamedTempFile::new()?;
        message_file
            .write_all(substitute_directory(&ctx.description, &group.directory).as_bytes())?;
        message_file.flush()?;
        vcs.commit_from_file(message_file.path())?;
    }

    println!("Uploading CL for {}...", group.directory);
    let code = review.upload(&upload_args(ctx, reviewers))?;
    let status = if code == 0 {
        UploadStatus::Uploaded
    } else {
        println!("Uploading failed for {}.", group.directory);
        println!("Note: cl-split has built-in resume capabilities.");
        println!(
            "Delete {} then run cl-split again to resume uploading.",
            vcs.current_branch()?
        );
        UploadStatus::UploadFailed
    };

    if let Some(comment) = &ctx.comment {
        review.add_comment(&substitute_directory(comment, &group.directory), true)?;
    }

    Ok(status)
}

/// Flags passed to the review upload for one group
fn upload_args(ctx: &RunContext, reviewers: &[String]) -> Vec<String> {
    let mut args = vec!["-f".to_string()];
    if !reviewers.is_empty() {
        args.push("-r".to_string());
        args.push(reviewers.join(","));
    }
    if ctx.cq_dry_run {
        args.push("--cq-dry-run".to_string());
    }
    if ctx.comment.is_none() {
        args.push("--send-mail".to_string());
    }
    if ctx.enable_auto_submit {
        args.push("--enable-auto-submit".to_string());
    }
    if let Some(topic) = &ctx.topic {
        args.push(format!("--topic={topic}"));
    }
    args
}

/// Print what uploading one group would do
fn print_cl_info(
    cl_index: usize,
    num_cls: usize,
    ctx: &RunContext,
    group: &OwnershipGroup,
    reviewers: &[String],
) {
    let description = substitute_directory(&ctx.description, &group.directory);
    let indented = description
        .lines()
        .map(|l| format!("    {l}"))
        .collect::<Vec<_>>()
        .join("\n");

    println!("CL {cl_index}/{num_cls}");
    println!("Path: {}", group.directory);
    println!("Reviewers: {}", reviewers.join(", "));
    println!("Auto-Submit: {}", ctx.enable_auto_submit);
    println!("Topic: {}", ctx.topic.as_deref().unwrap_or_default());
    println!("\n{indented}\n");
    println!("{}", group.file_paths().join("\n"));
    println!();
}
