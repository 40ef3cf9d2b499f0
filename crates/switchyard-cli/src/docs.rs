//! Docs index banner injection.
//!
//! Rewrites the generated rustdoc index with a "Deployed from" banner by
//! exact substring replacement. No HTML parsing: the anchor below is what
//! rustdoc currently emits, and a miss means the page layout changed and
//! the deploy must fail rather than ship an unbannered page.

use std::path::Path;
use switchyard_core::{Error, Result};

const ANCHOR: &str = "</nav><div class=\"sidebar-resizer\"";

/// Build the patched document.
pub fn inject_banner(
    content: &str,
    repo_url: &str,
    commit_hash: &str,
    pr_number: Option<u64>,
) -> Result<String> {
    if !content.contains(ANCHOR) {
        return Err(Error::AnchorNotFound(ANCHOR.to_string()));
    }

    let pr_link = pr_number
        .map(|n| format!("<br><a href=\"{repo_url}/pull/{n}\">Pull Request {n}</a>"))
        .unwrap_or_default();
    let short = commit_hash.get(..7).unwrap_or(commit_hash);
    let commit_link =
        format!("<br><a href=\"{repo_url}/commit/{commit_hash}\">Commit <code>{short}</code></a>");

    Ok(content.replacen(
        ANCHOR,
        &format!("<div class=\"version\">Deployed from{pr_link}{commit_link}</div>{ANCHOR}"),
        1,
    ))
}

/// Patch the index file in place.
pub fn patch_index(
    path: &Path,
    repo_url: &str,
    commit_hash: &str,
    pr_number: Option<u64>,
) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    let patched = inject_banner(&content, repo_url, commit_hash, pr_number)?;
    std::fs::write(path, patched)?;
    Ok(())
}
