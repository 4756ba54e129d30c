use clap::Parser;
use serde::Serialize;
use serde_json::json;

use docdex::crawler::fetch::HttpFetcher;
use docdex::response::{DocumentResponse, SearchResponse};
use docdex::{CrawlConfig, Crawler, search};

mod args;
use args::{Args, Command};

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Args::parse();

    let config = match resolve_config(&cli) {
        Some(config) => config,
        None => std::process::exit(2),
    };

    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            ::log::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let crawler = match Crawler::new(config, fetcher) {
        Ok(crawler) => crawler,
        Err(e) => {
            ::log::error!("Invalid crawl configuration: {}", e);
            std::process::exit(2);
        }
    };

    let store = crawler.crawl().await;

    match &cli.command {
        Command::Search { query, limit } => {
            let results = search::search(&store, query, *limit);
            print_json(&SearchResponse::new(query, &results));
        }
        Command::Get { id } => match store.find_by_id(id) {
            Some(document) => print_json(&DocumentResponse::new(document)),
            None => println!("Document with ID \"{}\" not found.", id),
        },
        Command::List => {
            let documents: Vec<_> = store
                .all()
                .iter()
                .map(|doc| json!({ "id": doc.id, "title": doc.title, "url": doc.url }))
                .collect();
            print_json(&documents);
        }
    }
}

/// Merge the command line, an optional config file and the environment.
///
/// Flags win over the config file, which wins over DOCS_URL / MAX_PAGES.
fn resolve_config(cli: &Args) -> Option<CrawlConfig> {
    let file_config = match &cli.config {
        Some(path) => match CrawlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                return None;
            }
        },
        None => None,
    };

    let base_url = match cli
        .url
        .clone()
        .or_else(|| file_config.as_ref().map(|c| c.base_url.clone()))
        .or_else(|| std::env::var("DOCS_URL").ok().filter(|v| !v.is_empty()))
    {
        Some(url) => url,
        None => {
            ::log::error!("No base URL given; pass --url or set DOCS_URL");
            return None;
        }
    };

    let max_pages = cli
        .max_pages
        .or_else(|| file_config.as_ref().map(|c| c.max_pages))
        .or_else(|| std::env::var("MAX_PAGES").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(50);

    Some(CrawlConfig::new(&base_url, max_pages))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => ::log::error!("Failed to serialize response: {}", e),
    }
}
