//! CL description and comment rewriting
//!
//! The operator writes one description template for the whole split; each
//! group gets a copy with `$directory` substituted, plus a marker line
//! identifying the upload as tool-generated.

/// Placeholder replaced with the group's directory
pub const DIRECTORY_PLACEHOLDER: &str = "$directory";

/// Marker line inserted into every uploaded description
pub const UPLOADED_BY_LINE: &str = "This CL was uploaded by split tooling";

/// Replace the directory placeholder with `/` + `directory`.
pub fn substitute_directory(text: &str, directory: &str) -> String {
    text.replace(DIRECTORY_PLACEHOLDER, &format!("/{directory}"))
}

/// Insert [`UPLOADED_BY_LINE`] into `description`.
///
/// The line lands before the footer block when one exists, otherwise at
/// the end, separated from the body by a blank line.
pub fn append_uploaded_by_line(description: &str) -> String {
    let (mut lines, footers) = split_footers(description);
    if lines.last().is_some_and(|l| !l.trim().is_empty()) {
        lines.push("");
    }
    lines.push(UPLOADED_BY_LINE);
    if !footers.is_empty() {
        lines.push("");
        lines.extend(footers);
    }
    lines.join("\n")
}

/// Split a commit message into body lines and trailing footer lines.
///
/// Footers are the trailing `Key: value` block, scanned from the end of
/// the message up to the first blank line. A malformed line inside the
/// block only counts as part of it when a well-formed footer appears above
/// it. A message consisting of nothing but footer-shaped lines has no
/// footers at all.
pub fn split_footers(message: &str) -> (Vec<&str>, Vec<&str>) {
    let lines: Vec<&str> = message.trim_end().lines().collect();

    let mut footer_count = 0;
    let mut held = 0;
    let mut terminated = false;
    for line in lines.iter().rev() {
        if line.trim().is_empty() {
            terminated = true;
            break;
        } else if is_footer_line(line) {
            footer_count += held + 1;
            held = 0;
        } else {
            held += 1;
        }
    }
    if !terminated {
        // The whole message is footer-shaped, so none of it is a footer.
        footer_count = 0;
    }

    let split_at = lines.len() - footer_count;
    let body = lines[..split_at].to_vec();
    let footers = lines[split_at..].to_vec();
    (body, footers)
}

fn is_footer_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    let Some((key, _)) = trimmed.split_once(':') else {
        return false;
    };
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
