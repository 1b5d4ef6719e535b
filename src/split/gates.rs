//! Pre-flight confirmation gates
//!
//! Two checks run once before any group is processed. Declining either is
//! an orderly stop, not a failure.

use crate::error::Result;
use crate::prompt::Prompt;
use regex::Regex;
use std::sync::OnceLock;

/// Group count above which a cq-dry-run split asks for confirmation
///
/// Large fan-outs have overloaded commit-queue infrastructure before.
pub const CL_SPLIT_FORCE_LIMIT: usize = 10;

/// Lines accepted as bug links, e.g. `Bug: 123` or `Bug: chromium:456`
fn bug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?m)^Bug:\s*(?:[a-zA-Z]+:)?[0-9]+")
            .expect("hardcoded bug pattern is valid")
    })
}

/// Whether the description carries a bug link
pub fn has_bug_link(description: &str) -> bool {
    bug_pattern().is_match(description)
}

/// Confirm a split that would flood the commit queue.
///
/// Only applies when cq-dry-run is requested and the group count exceeds
/// [`CL_SPLIT_FORCE_LIMIT`]. Returns `Ok(false)` when the operator
/// declines.
pub fn confirm_large_fan_out(
    num_cls: usize,
    cq_dry_run: bool,
    prompt: &dyn Prompt,
) -> Result<bool> {
    if !cq_dry_run || num_cls <= CL_SPLIT_FORCE_LIMIT {
        return Ok(true);
    }
    println!(
        "This will generate {num_cls} CLs. This many CLs can potentially \
         generate too much load on the build infrastructure, and the commit \
         queue may cancel jobs that overload it."
    );
    ask_to_proceed(prompt)
}

/// Confirm a description that has no bug link.
///
/// Returns `Ok(false)` when the operator declines.
pub fn confirm_missing_bug_link(description: &str, prompt: &dyn Prompt) -> Result<bool> {
    if has_bug_link(description) {
        return Ok(true);
    }
    println!("Description does not include a bug link.");
    ask_to_proceed(prompt)
}

fn ask_to_proceed(prompt: &dyn Prompt) -> Result<bool> {
    let answer = prompt.ask("Proceed? (y/n):")?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
