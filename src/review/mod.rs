//! Code-review backend
//!
//! Abstracts CL upload, comment posting, and reviewer suggestion so the
//! split workflow can run against a scripted fake in tests.

mod git_cl;

pub use git_cl::GitClUpload;

use crate::error::Result;

/// Identity marker meaning "everyone may approve"; never a useful reviewer
pub const EVERYONE: &str = "*";

/// Review operations consumed by the split workflow
pub trait ReviewClient {
    /// Upload the current branch as a CL; returns the upload exit code
    ///
    /// A nonzero code is a per-group failure the caller reports and
    /// recovers from, not an error.
    fn upload(&self, args: &[String]) -> Result<i32>;

    /// Post `message` as a comment on the CL of the current branch
    fn add_comment(&self, message: &str, publish: bool) -> Result<()>;

    /// Suggested reviewers for `paths`, with `exclude` identities removed
    fn suggest_owners(&self, paths: &[String], exclude: &[String]) -> Result<Vec<String>>;
}
