//! `git cl` implementation of the [`ReviewClient`] trait
//!
//! Drives the review backend through the `git cl` tool that manages CLs
//! for the current branch.

use crate::error::{Error, Result};
use crate::review::ReviewClient;
use std::process::Command;

/// Review client backed by the `git cl` tool
pub struct GitClUpload;

impl GitClUpload {
    /// Create a new client
    pub const fn new() -> Self {
        Self
    }

    fn run(&self, args: &[String]) -> Result<std::process::Output> {
        Command::new("git")
            .arg("cl")
            .args(args)
            .output()
            .map_err(Error::from)
    }

    fn run_checked(&self, args: &[String]) -> Result<String> {
        let output = self.run(args)?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(Error::Process {
                command: format!("git cl {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

impl Default for GitClUpload {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewClient for GitClUpload {
    fn upload(&self, args: &[String]) -> Result<i32> {
        let mut full = vec!["upload".to_string()];
        full.extend(args.iter().cloned());
        // Upload output streams straight to the operator's terminal; only
        // the exit code matters here.
        let status = Command::new("git").arg("cl").args(&full[..]).status()?;
        Ok(status.code().unwrap_or(1))
    }

    fn add_comment(&self, message: &str, publish: bool) -> Result<()> {
        let mut args = vec!["comments".to_string(), "-a".to_string(), message.to_string()];
        if publish {
            args.push("--publish".to_string());
        }
        self.run_checked(&args).map(|_| ())
    }

    fn suggest_owners(&self, paths: &[String], exclude: &[String]) -> Result<Vec<String>> {
        let mut args = vec!["owners".to_string(), "--batch".to_string()];
        args.extend(paths.iter().cloned());
        let out = self.run_checked(&args)?;
        // The owners tool has no exclusion flag; filter here so callers
        // always see the final reviewer list.
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !exclude.iter().any(|e| e == line))
            .map(str::to_string)
            .collect())
    }
}
