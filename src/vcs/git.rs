//! Git implementation of the [`Vcs`] trait
//!
//! Shells out to the `git` binary and surfaces captured stderr on failure.

use crate::error::{Error, Result};
use crate::types::{ChangedFile, FileAction};
use crate::vcs::Vcs;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Git CLI client
///
/// Stateless; every operation runs a fresh `git` process in the current
/// working directory.
pub struct GitCli;

impl GitCli {
    /// Create a new client
    pub const fn new() -> Self {
        Self
    }

    fn run<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<OsString> = args
            .into_iter()
            .map(|a| a.as_ref().to_os_string())
            .collect();
        let output = Command::new("git").args(&args).output()?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let rendered = args
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ");
            Err(Error::Process {
                command: format!("git {rendered}"),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl Vcs for GitCli {
    fn ensure_repository(&self) -> Result<()> {
        self.run(["rev-parse"])
            .map(|_| ())
            .map_err(|_| Error::NotARepository)
    }

    fn repo_root(&self) -> Result<PathBuf> {
        let out = self.run(["rev-parse", "--show-toplevel"])?;
        Ok(PathBuf::from(out.trim()))
    }

    fn current_branch(&self) -> Result<String> {
        let name = self.run(["rev-parse", "--abbrev-ref", "HEAD"])?;
        let name = name.trim();
        if name == "HEAD" {
            return Err(Error::DetachedHead);
        }
        Ok(name.to_string())
    }

    fn branches(&self) -> Result<Vec<String>> {
        let out = self.run(["for-each-ref", "refs/heads", "--format=%(refname:short)"])?;
        Ok(out.lines().map(str::to_string).collect())
    }

    fn upstream(&self, branch: &str) -> Result<Option<String>> {
        // rev-parse fails when the branch has no tracking configuration;
        // that is an answer, not an error.
        match self.run(["rev-parse", "--abbrev-ref", &format!("{branch}@{{upstream}}")]) {
            Ok(out) => Ok(Some(out.trim().to_string())),
            Err(Error::Process { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn status_diff(&self, root: &Path, base: &str) -> Result<Vec<ChangedFile>> {
        let out = self.run([
            OsStr::new("-C"),
            root.as_os_str(),
            OsStr::new("diff"),
            OsStr::new("--name-status"),
            OsStr::new(base),
        ])?;
        let mut files = Vec::new();
        for line in out.lines() {
            let mut fields = line.split('\t');
            let Some(code) = fields.next() else { continue };
            // Renames and copies report source then destination; the
            // destination is the path that exists on the working branch.
            let Some(path) = fields.last() else { continue };
            match FileAction::from_status_code(code) {
                Some(action) => files.push(ChangedFile::new(action, path)),
                None => debug!("ignoring unrecognized status line: {line}"),
            }
        }
        Ok(files)
    }

    fn create_tracking_branch(&self, name: &str, upstream: &str) -> Result<()> {
        self.run(["checkout", "-t", upstream, "-b", name]).map(|_| ())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.run(["checkout", branch]).map(|_| ())
    }

    fn checkout_paths(&self, branch: &str, paths: &[PathBuf]) -> Result<()> {
        let mut args: Vec<OsString> = vec!["checkout".into(), branch.into(), "--".into()];
        args.extend(paths.iter().map(Into::into));
        self.run(args).map(|_| ())
    }

    fn remove_paths(&self, paths: &[PathBuf]) -> Result<()> {
        let mut args: Vec<OsString> = vec!["rm".into()];
        args.extend(paths.iter().map(Into::into));
        self.run(args).map(|_| ())
    }

    fn commit_from_file(&self, message_file: &Path) -> Result<()> {
        self.run([OsStr::new("commit"), OsStr::new("-F"), message_file.as_os_str()])
            .map(|_| ())
    }

    fn config_value(&self, key: &str) -> Result<Option<String>> {
        match self.run(["config", key]) {
            Ok(out) => {
                let value = out.trim();
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
            // config exits nonzero for unset keys
            Err(Error::Process { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
