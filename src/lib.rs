//! cl-split - split a working branch into per-OWNERS changelists
//!
//! Partitions the files changed on the current branch by their nearest
//! OWNERS boundary directory and drives each group through an independent,
//! resumable upload workflow: branch creation, commit with a rewritten
//! description, review upload, optional comment. Publish-branch existence
//! is the only persistent state; rerunning after a partial failure skips
//! every group whose branch already exists.

pub mod error;
pub mod prompt;
pub mod review;
pub mod split;
pub mod types;
pub mod vcs;
