//! Error types for cl-split

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while splitting a branch
#[derive(Debug, Error)]
pub enum Error {
    /// The working directory is not inside a git repository
    #[error("not inside a git repository")]
    NotARepository,

    /// HEAD is not on a named branch
    #[error("cannot split from a detached HEAD")]
    DetachedHead,

    /// The current branch has no upstream to diff and track against
    #[error("branch {0} must have an upstream")]
    NoUpstream(String),

    /// The diff against the upstream is empty
    #[error("cannot split an empty CL")]
    EmptyChangeSet,

    /// An external process exited with a failure status
    #[error("`{command}` failed:\n{stderr}")]
    Process {
        /// The command line that was run
        command: String,
        /// Captured diagnostic output
        stderr: String,
    },

    /// Reading a description/comment file or writing the commit message failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An interactive prompt could not be read
    #[error("prompt failed: {0}")]
    Prompt(String),
}
