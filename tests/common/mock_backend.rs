//! Scripted fakes for the VCS, review, and prompt seams
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use cl_split::error::{Error, Result};
use cl_split::prompt::Prompt;
use cl_split::review::ReviewClient;
use cl_split::types::ChangedFile;
use cl_split::vcs::Vcs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Call record for `create_tracking_branch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBranchCall {
    pub name: String,
    pub upstream: String,
}

/// Call record for `checkout_paths`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPathsCall {
    pub branch: String,
    pub paths: Vec<PathBuf>,
}

/// In-memory VCS with call tracking and error injection
///
/// Branch state is real enough for resume semantics: branches created
/// through the fake show up in later `branches()` calls, so running the
/// workflow twice against one instance exercises the skip path.
pub struct MockVcs {
    root: PathBuf,
    current: Mutex<String>,
    branches: Mutex<Vec<String>>,
    upstreams: Mutex<HashMap<String, String>>,
    diff: Mutex<Vec<ChangedFile>>,
    config: Mutex<HashMap<String, String>>,
    // Call tracking
    create_branch_calls: Mutex<Vec<CreateBranchCall>>,
    checkout_calls: Mutex<Vec<String>>,
    checkout_paths_calls: Mutex<Vec<CheckoutPathsCall>>,
    remove_paths_calls: Mutex<Vec<Vec<PathBuf>>>,
    commit_messages: Mutex<Vec<String>>,
    // Error injection
    error_on_create_branch: Mutex<Option<String>>,
}

impl MockVcs {
    /// Create a fake repository on `branch` tracking `upstream`
    pub fn new(branch: &str, upstream: &str) -> Self {
        let mut upstreams = HashMap::new();
        upstreams.insert(branch.to_string(), upstream.to_string());
        Self {
            root: PathBuf::from("/repo"),
            current: Mutex::new(branch.to_string()),
            branches: Mutex::new(vec![branch.to_string()]),
            upstreams: Mutex::new(upstreams),
            diff: Mutex::new(Vec::new()),
            config: Mutex::new(HashMap::new()),
            create_branch_calls: Mutex::new(Vec::new()),
            checkout_calls: Mutex::new(Vec::new()),
            checkout_paths_calls: Mutex::new(Vec::new()),
            remove_paths_calls: Mutex::new(Vec::new()),
            commit_messages: Mutex::new(Vec::new()),
            error_on_create_branch: Mutex::new(None),
        }
    }

    /// Set the changed files reported by `status_diff`
    pub fn set_diff(&self, files: Vec<ChangedFile>) {
        *self.diff.lock().unwrap() = files;
    }

    /// Set a configuration value
    pub fn set_config(&self, key: &str, value: &str) {
        self.config
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Drop the current branch's upstream
    pub fn clear_upstream(&self) {
        self.upstreams.lock().unwrap().clear();
    }

    /// Pre-create a branch, as a previous partial run would have
    pub fn add_branch(&self, name: &str) {
        self.branches.lock().unwrap().push(name.to_string());
    }

    /// Make `create_tracking_branch` fail
    pub fn fail_create_branch(&self, msg: &str) {
        *self.error_on_create_branch.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification ===

    pub fn get_create_branch_calls(&self) -> Vec<CreateBranchCall> {
        self.create_branch_calls.lock().unwrap().clone()
    }

    pub fn get_checkout_calls(&self) -> Vec<String> {
        self.checkout_calls.lock().unwrap().clone()
    }

    pub fn get_checkout_paths_calls(&self) -> Vec<CheckoutPathsCall> {
        self.checkout_paths_calls.lock().unwrap().clone()
    }

    pub fn get_remove_paths_calls(&self) -> Vec<Vec<PathBuf>> {
        self.remove_paths_calls.lock().unwrap().clone()
    }

    /// Commit messages as read back from the message files
    pub fn get_commit_messages(&self) -> Vec<String> {
        self.commit_messages.lock().unwrap().clone()
    }

    pub fn get_current_branch(&self) -> String {
        self.current.lock().unwrap().clone()
    }

    pub fn assert_branch_created(&self, name: &str, upstream: &str) {
        let calls = self.get_create_branch_calls();
        assert!(
            calls
                .iter()
                .any(|c| c.name == name && c.upstream == upstream),
            "Expected create_tracking_branch({name}, {upstream}) but got: {calls:?}"
        );
    }
}

impl Vcs for MockVcs {
    fn ensure_repository(&self) -> Result<()> {
        Ok(())
    }

    fn repo_root(&self) -> Result<PathBuf> {
        Ok(self.root.clone())
    }

    fn current_branch(&self) -> Result<String> {
        Ok(self.current.lock().unwrap().clone())
    }

    fn branches(&self) -> Result<Vec<String>> {
        Ok(self.branches.lock().unwrap().clone())
    }

    fn upstream(&self, branch: &str) -> Result<Option<String>> {
        Ok(self.upstreams.lock().unwrap().get(branch).cloned())
    }

    fn status_diff(&self, _root: &Path, _base: &str) -> Result<Vec<ChangedFile>> {
        Ok(self.diff.lock().unwrap().clone())
    }

    fn create_tracking_branch(&self, name: &str, upstream: &str) -> Result<()> {
        self.create_branch_calls.lock().unwrap().push(CreateBranchCall {
            name: name.to_string(),
            upstream: upstream.to_string(),
        });

        if let Some(msg) = self.error_on_create_branch.lock().unwrap().as_ref() {
            return Err(Error::Process {
                command: "git checkout".to_string(),
                stderr: msg.clone(),
            });
        }

        self.branches.lock().unwrap().push(name.to_string());
        *self.current.lock().unwrap() = name.to_string();
        Ok(())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.checkout_calls.lock().unwrap().push(branch.to_string());
        *self.current.lock().unwrap() = branch.to_string();
        Ok(())
    }

    fn checkout_paths(&self, branch: &str, paths: &[PathBuf]) -> Result<()> {
        self.checkout_paths_calls
            .lock()
            .unwrap()
            .push(CheckoutPathsCall {
                branch: branch.to_string(),
                paths: paths.to_vec(),
            });
        Ok(())
    }

    fn remove_paths(&self, paths: &[PathBuf]) -> Result<()> {
        self.remove_paths_calls.lock().unwrap().push(paths.to_vec());
        Ok(())
    }

    fn commit_from_file(&self, message_file: &Path) -> Result<()> {
        // Read the message back so tests can check what would be committed
        // and that the file was still alive at commit time.
        let message = std::fs::read_to_string(message_file)?;
        self.commit_messages.lock().unwrap().push(message);
        Ok(())
    }

    fn config_value(&self, key: &str) -> Result<Option<String>> {
        Ok(self.config.lock().unwrap().get(key).cloned())
    }
}

/// Call record for `upload`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCall {
    pub args: Vec<String>,
}

/// Call record for `add_comment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommentCall {
    pub message: String,
    pub publish: bool,
}

/// Call record for `suggest_owners`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestOwnersCall {
    pub paths: Vec<String>,
    pub exclude: Vec<String>,
}

/// Scripted review client
pub struct MockReview {
    owners: Mutex<Vec<String>>,
    upload_exit_codes: Mutex<Vec<i32>>,
    upload_calls: Mutex<Vec<UploadCall>>,
    add_comment_calls: Mutex<Vec<AddCommentCall>>,
    suggest_owners_calls: Mutex<Vec<SuggestOwnersCall>>,
}

impl MockReview {
    pub fn new() -> Self {
        Self {
            owners: Mutex::new(Vec::new()),
            upload_exit_codes: Mutex::new(Vec::new()),
            upload_calls: Mutex::new(Vec::new()),
            add_comment_calls: Mutex::new(Vec::new()),
            suggest_owners_calls: Mutex::new(Vec::new()),
        }
    }

    /// Reviewers returned by every `suggest_owners` call
    pub fn set_owners(&self, owners: &[&str]) {
        *self.owners.lock().unwrap() = owners.iter().map(ToString::to_string).collect();
    }

    /// Exit codes for successive `upload` calls; exhausted entries are 0
    pub fn script_upload_exit_codes(&self, codes: &[i32]) {
        let mut scripted = self.upload_exit_codes.lock().unwrap();
        *scripted = codes.to_vec();
        scripted.reverse();
    }

    pub fn get_upload_calls(&self) -> Vec<UploadCall> {
        self.upload_calls.lock().unwrap().clone()
    }

    pub fn get_add_comment_calls(&self) -> Vec<AddCommentCall> {
        self.add_comment_calls.lock().unwrap().clone()
    }

    pub fn get_suggest_owners_calls(&self) -> Vec<SuggestOwnersCall> {
        self.suggest_owners_calls.lock().unwrap().clone()
    }
}

impl Default for MockReview {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewClient for MockReview {
    fn upload(&self, args: &[String]) -> Result<i32> {
        self.upload_calls.lock().unwrap().push(UploadCall {
            args: args.to_vec(),
        });
        Ok(self.upload_exit_codes.lock().unwrap().pop().unwrap_or(0))
    }

    fn add_comment(&self, message: &str, publish: bool) -> Result<()> {
        self.add_comment_calls.lock().unwrap().push(AddCommentCall {
            message: message.to_string(),
            publish,
        });
        Ok(())
    }

    fn suggest_owners(&self, paths: &[String], exclude: &[String]) -> Result<Vec<String>> {
        self.suggest_owners_calls
            .lock()
            .unwrap()
            .push(SuggestOwnersCall {
                paths: paths.to_vec(),
                exclude: exclude.to_vec(),
            });
        Ok(self.owners.lock().unwrap().clone())
    }
}

/// Prompt that answers from a script and fails when over-asked
pub struct ScriptedPrompt {
    answers: Mutex<Vec<String>>,
    questions: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().rev().map(ToString::to_string).collect()),
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Prompt expecting never to be asked anything
    pub fn unused() -> Self {
        Self::new(&[])
    }

    pub fn get_questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&self, message: &str) -> Result<String> {
        self.questions.lock().unwrap().push(message.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop()
            .ok_or_else(|| Error::Prompt(format!("unscripted question: {message}")))
    }
}
