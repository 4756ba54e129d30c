use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docdex")]
#[command(about = "Crawl a documentation site into an in-memory index and search it")]
#[command(version)]
pub struct Args {
    /// Base URL of the documentation site (falls back to the DOCS_URL
    /// environment variable)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Maximum number of pages to index (falls back to MAX_PAGES, then 50)
    #[arg(short, long)]
    pub max_pages: Option<usize>,

    /// JSON configuration file; command-line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the crawled documentation
    Search {
        /// Query string
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },

    /// Print the full content of one document
    Get {
        /// Document id (as shown in search results)
        id: String,
    },

    /// List all indexed documents
    List,
}
