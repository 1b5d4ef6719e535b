//! Test data factories for cl-split types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use cl_split::split::{OwnersProbe, SplitOptions};
use cl_split::types::{ChangedFile, FileAction};
use std::collections::HashSet;

/// Create a modified file entry
pub fn modified(path: &str) -> ChangedFile {
    ChangedFile::new(FileAction::Modified, path)
}

/// Create a deleted file entry
pub fn deleted(path: &str) -> ChangedFile {
    ChangedFile::new(FileAction::Deleted, path)
}

/// Create an added file entry
pub fn added(path: &str) -> ChangedFile {
    ChangedFile::new(FileAction::Added, path)
}

/// Options with a bug-linked description and everything else off
pub fn options_with_bug() -> SplitOptions {
    SplitOptions {
        description: "Change $directory.\n\nBug: 123".to_string(),
        ..SplitOptions::default()
    }
}

/// Ownership probe backed by a fixed set of marker directories
pub struct MapProbe {
    dirs: HashSet<String>,
}

impl MapProbe {
    pub fn new(dirs: &[&str]) -> Self {
        Self {
            dirs: dirs.iter().map(ToString::to_string).collect(),
        }
    }
}

impl OwnersProbe for MapProbe {
    fn has_owners_file(&self, dir: &str) -> bool {
        self.dirs.contains(dir)
    }
}
