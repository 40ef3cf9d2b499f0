//! Switchyard CLI entrypoint.

use clap::Parser;

mod commands;
mod docs;
mod handlers;

use commands::Commands;

#[derive(Parser)]
#[command(name = "switchyard")]
#[command(author, version, about = "CI job matrix compiler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the matrix= protocol line; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Matrix { context } => handlers::matrix(&context).await?,
        Commands::PatchDocs {
            repo_url,
            commit_hash,
            pr_number,
            path,
        } => handlers::patch_docs(&path, &repo_url, &commit_hash, pr_number)?,
    }

    Ok(())
}
