//! Command handlers.

use console::style;
use std::path::Path;
use switchyard_core::Result;
use switchyard_matrix::context::TriggerContext;
use tracing::debug;

/// Compile the trigger context and print the matrix line.
pub async fn matrix(raw_context: &str) -> Result<()> {
    let ctx = TriggerContext::from_json(raw_context)?;
    let baseline_sha = std::env::var("SHA").ok();
    debug!(has_baseline_sha = baseline_sha.is_some(), "compiling matrix");

    let matrix = switchyard_matrix::compile(&ctx, baseline_sha).await?;
    println!("{}", switchyard_matrix::assembler::render(&matrix)?);
    Ok(())
}

/// Patch the docs index with the deployment banner.
pub fn patch_docs(
    path: &Path,
    repo_url: &str,
    commit_hash: &str,
    pr_number: Option<u64>,
) -> Result<()> {
    crate::docs::patch_index(path, repo_url, commit_hash, pr_number)?;
    println!("{} Patched {}", style("✓").green(), path.display());
    Ok(())
}
