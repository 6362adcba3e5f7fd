//! Branch name to slug transform.

/// Turns a branch name into a URL- and path-safe identifier.
///
/// ASCII letters are lowercased; every run of characters outside
/// `[a-z0-9]` becomes one `-`; leading and trailing `-` are dropped.
/// Distinct names may share a slug.
#[must_use]
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}
