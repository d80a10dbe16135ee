//! Prashna CLI - manage and query the document knowledge base.
//!
//! # Usage
//!
//! ```bash
//! # Ingest a document into the knowledge base
//! prashna ingest manual.md
//!
//! # Search stored chunks
//! prashna search "installation steps"
//! prashna search "बिजली" -n 5 --json
//!
//! # Show help
//! prashna --help
//! ```
//!
//! Question answering (translate → retrieve → generate) requires a
//! language-model provider and is not wired here; the CLI covers the
//! retrieval core only.

mod ingest;
mod output;
mod search;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Prashna knowledge base CLI.
///
/// Ingests documents as overlapping chunks and retrieves them by keyword
/// overlap.
#[derive(Parser)]
#[command(name = "prashna", version, about)]
struct Cli {
    /// Path to the knowledge base file
    #[arg(long, global = true, default_value = "knowledge_base.json")]
    store: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a document (Markdown or plain text) into the knowledge base
    Ingest {
        /// Path to the document file
        file: PathBuf,
    },
    /// Search the knowledge base for chunks matching a query
    Search {
        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short = 'n', long, default_value = "3")]
        limit: usize,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Ingest { file } => {
            let added = ingest::execute_ingest(&file, &cli.store).await?;
            println!("Added {} chunk{} from {}", added, plural(added), file.display());
        }
        Commands::Search { query, limit, json } => {
            let results = search::execute_search(&query, limit, &cli.store).await?;
            let rendered = if json {
                output::format_json(&query, &results)
            } else {
                output::format_human(&query, &results)
            };
            println!("{rendered}");
        }
    }

    Ok(())
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
