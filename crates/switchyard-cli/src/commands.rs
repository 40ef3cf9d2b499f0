//! CLI command definitions.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a trigger context into the CI job matrix
    Matrix {
        /// Raw provider context JSON
        context: String,
    },

    /// Inject the "Deployed from" banner into generated docs
    PatchDocs {
        /// Repository URL used for commit and pull request links
        #[arg(long)]
        repo_url: String,

        /// Commit hash being deployed
        #[arg(long)]
        commit_hash: String,

        /// Pull request number, when deploying from a pull request
        #[arg(long)]
        pr_number: Option<u64>,

        /// Path to the generated index file
        #[arg(long, default_value = "target/doc/index.html")]
        path: PathBuf,
    },
}
