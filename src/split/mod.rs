//! Branch-splitting engine
//!
//! Turns the diff of a working branch into independent per-OWNERS CLs:
//! 1. Partition - group changed files by their nearest OWNERS boundary
//! 2. Gate - confirm large fan-outs and missing bug links up front
//! 3. Execute - drive each group through branch, commit, upload, comment

pub mod description;
pub mod execute;
pub mod gates;
pub mod partition;
pub mod run;

pub use description::{append_uploaded_by_line, split_footers, substitute_directory};
pub use execute::{execute_split, upload_cl, SplitReport, UploadStatus};
pub use gates::{confirm_large_fan_out, confirm_missing_bug_link, CL_SPLIT_FORCE_LIMIT};
pub use partition::{branch_name, split_files_by_owners, FsProbe, OwnersProbe, OWNERS_FILE};
pub use run::{split_branch, SplitOptions, SplitOutcome};
