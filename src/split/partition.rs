//! Grouping changed files by OWNERS boundary
//!
//! Maps each changed file to its nearest ancestor directory containing an
//! `OWNERS` file, producing one group per boundary in first-seen order.

use crate::types::{ChangedFile, OwnershipGroup};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the marker file that designates an ownership boundary
pub const OWNERS_FILE: &str = "OWNERS";

/// Directory key used when the walk reaches the repository root
pub const ROOT_KEY: &str = ".";

/// Lookup for ownership marker files
///
/// Injected into the partitioner so tests can declare boundaries without
/// touching the filesystem.
pub trait OwnersProbe {
    /// Whether `dir` (slash-separated, relative, `"."` for the root)
    /// directly contains an OWNERS file
    fn has_owners_file(&self, dir: &str) -> bool;
}

/// Probe that checks for OWNERS files under a repository root
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    /// Create a probe rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl OwnersProbe for FsProbe {
    fn has_owners_file(&self, dir: &str) -> bool {
        self.root.join(dir).join(OWNERS_FILE).is_file()
    }
}

/// Partition `files` into one group per owning directory.
///
/// Each file's parent directory (truncated to `max_depth` leading
/// components when `max_depth >= 1`) starts an upward walk that stops at
/// the first directory that either is already a known group key or
/// directly contains an OWNERS file. The repository root is the terminal
/// fallback; the walk never leaves it.
///
/// Reusing known keys both skips filesystem probes and guarantees that
/// sibling files converge on the owner an earlier file already resolved.
/// Group order is the order in which keys were first seen, which fixes CL
/// numbering and upload order downstream.
pub fn split_files_by_owners(
    files: &[ChangedFile],
    max_depth: usize,
    probe: &dyn OwnersProbe,
) -> Vec<OwnershipGroup> {
    let mut groups: Vec<OwnershipGroup> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for file in files {
        let mut dir = parent_components(&file.path);
        if max_depth >= 1 && dir.len() > max_depth {
            dir.truncate(max_depth);
        }

        let key = loop {
            let candidate = join_key(&dir);
            if index_by_key.contains_key(&candidate) || probe.has_owners_file(&candidate) {
                break candidate;
            }
            if dir.is_empty() {
                // Repository root: stop here even without a marker.
                break candidate;
            }
            dir.pop();
        };

        let slot = *index_by_key.entry(key.clone()).or_insert_with(|| {
            debug!("new ownership group: {key}");
            groups.push(OwnershipGroup {
                directory: key,
                files: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].files.push(file.clone());
    }

    groups
}

/// Name of the publish branch for one group
///
/// Deterministic concatenation; the directory key is already
/// slash-separated, so the name needs no further escaping. A collision
/// with an existing branch means the group was already started.
pub fn branch_name(prefix: &str, directory: &str) -> String {
    format!("{prefix}_{directory}_split")
}

/// Components of the file's parent directory, separator-normalized
fn parent_components(path: &str) -> Vec<String> {
    Path::new(path)
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter_map(|c| match c {
                    std::path::Component::Normal(part) => {
                        Some(part.to_string_lossy().into_owned())
                    }
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn join_key(components: &[String]) -> String {
    if components.is_empty() {
        ROOT_KEY.to_string()
    } else {
        components.join("/")
    }
}
