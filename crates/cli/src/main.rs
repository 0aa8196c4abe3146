// ABOUTME: CLI binary for the okazje product-page scraper.
// ABOUTME: Scrapes URLs or a local HTML file and prints deal metadata as JSON envelopes.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use okazje_scrape::{Client, ScrapeResult, StoreDirectory};
use serde_json::json;

/// Scrape product pages and print deal metadata as JSON.
#[derive(Parser, Debug)]
#[command(name = "okazje")]
#[command(about = "Scrape product pages and print deal metadata as JSON", long_about = None)]
struct Args {
    /// HTML file to scrape offline (requires --url)
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// URL context for --html: supplies the domain and resolves relative image paths
    #[arg(long = "url")]
    url: Option<String>,

    /// Output compact JSON, one object per line, instead of pretty
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Fetch timeout in seconds
    #[arg(long = "timeout", default_value_t = 5)]
    timeout_secs: u64,

    /// Print elapsed time in ms to stderr
    #[arg(long)]
    timing: bool,

    /// Allow fetching from private/local networks
    #[arg(long = "allow-private-networks")]
    allow_private_networks: bool,

    /// Product URLs to scrape (fetch mode)
    #[arg()]
    urls: Vec<String>,
}

/// One output envelope per scraped target. The store name is resolved from
/// the link the way the deal-creation flow does it.
fn envelope(target: &str, outcome: Result<ScrapeResult, String>) -> serde_json::Value {
    let store = StoreDirectory::builtin().detect(target);
    match outcome {
        Ok(result) => json!({
            "url": target,
            "ok": true,
            "store": store,
            "result": result,
            "error": null
        }),
        Err(message) => json!({
            "url": target,
            "ok": false,
            "store": store,
            "result": null,
            "error": message
        }),
    }
}

fn print_envelope(value: &serde_json::Value, compact: bool) {
    if compact {
        println!("{}", value);
    } else {
        println!("{}", serde_json::to_string_pretty(value).unwrap());
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.html.is_some() && !args.urls.is_empty() {
        eprintln!("error: --html cannot be combined with URL targets");
        return ExitCode::FAILURE;
    }
    if args.html.is_some() && args.url.is_none() {
        eprintln!("error: --html requires --url for page context");
        return ExitCode::FAILURE;
    }
    if args.html.is_none() && args.urls.is_empty() {
        eprintln!("error: provide at least one URL, or --html with --url");
        return ExitCode::FAILURE;
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .allow_private_networks(args.allow_private_networks)
        .build();

    let started = Instant::now();
    let mut failures = 0usize;

    if let Some(ref html_path) = args.html {
        let page_url = args.url.as_deref().unwrap_or_default();
        let outcome = match fs::read_to_string(html_path) {
            Ok(html) => client
                .scrape_html(&html, page_url)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(format!("failed to read {}: {}", html_path.display(), e)),
        };
        if outcome.is_err() {
            failures += 1;
        }
        print_envelope(&envelope(page_url, outcome), args.compact);
    } else {
        for target in &args.urls {
            let outcome = client.scrape(target).await.map_err(|e| e.to_string());
            if outcome.is_err() {
                failures += 1;
            }
            print_envelope(&envelope(target, outcome), args.compact);
        }
    }

    if args.timing {
        eprintln!("elapsed: {} ms", started.elapsed().as_millis());
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
