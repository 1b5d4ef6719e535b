//! Version-control backend
//!
//! Provides a narrow interface over the underlying VCS so the split engine
//! can be driven against a scripted fake in tests.

mod git;

pub use git::GitCli;

use crate::error::Result;
use crate::types::ChangedFile;
use std::path::{Path, PathBuf};

/// Version-control operations consumed by the split workflow
///
/// Every operation is synchronous; the working tree and current-branch
/// pointer are owned by one group at a time, so there is nothing to
/// overlap. Failures carry the backend's diagnostic output.
pub trait Vcs {
    /// Fail unless the working directory is inside a repository
    fn ensure_repository(&self) -> Result<()>;

    /// Absolute path of the repository root
    fn repo_root(&self) -> Result<PathBuf>;

    /// Name of the currently checked-out branch
    fn current_branch(&self) -> Result<String>;

    /// Names of all local branches
    fn branches(&self) -> Result<Vec<String>>;

    /// Upstream of `branch`, or `None` when it has no tracking branch
    fn upstream(&self, branch: &str) -> Result<Option<String>>;

    /// Changed files between `base` and the working tree, in diff order
    fn status_diff(&self, root: &Path, base: &str) -> Result<Vec<ChangedFile>>;

    /// Create `name` tracking `upstream` and check it out
    fn create_tracking_branch(&self, name: &str, upstream: &str) -> Result<()>;

    /// Check out an existing branch
    fn checkout(&self, branch: &str) -> Result<()>;

    /// Check out the content of `paths` from `branch` into the working tree
    fn checkout_paths(&self, branch: &str, paths: &[PathBuf]) -> Result<()>;

    /// Remove `paths` from the working tree and the index
    fn remove_paths(&self, paths: &[PathBuf]) -> Result<()>;

    /// Commit staged changes with the message read from `message_file`
    fn commit_from_file(&self, message_file: &Path) -> Result<()>;

    /// Configuration value for `key`, or `None` when unset or empty
    fn config_value(&self, key: &str) -> Result<Option<String>>;
}
