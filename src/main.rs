// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Create the output directory
// 3. Run the crawl (the interesting work lives in src/crawl/)
// 4. Print the per-image results and a summary
// 5. Exit 0 - individual fetch/download failures never change the exit
//    code, only startup problems do
//
// Rust concepts used:
// - async/await: The crawl is async because all its I/O is
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching on the outcome
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - frontier + traversal loop
mod error; // src/error.rs - per-operation failure kinds
mod extract; // src/extract/ - HTML image/link extraction
mod fetch; // src/fetch/ - page fetching and image downloading

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use crawl::{CrawlConfig, CrawlReport};
use fetch::{HttpImageDownloader, HttpPageFetcher, ImageStatus};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};

// The #[tokio::main] attribute transforms our async main into a real main
// function that sets up the tokio runtime
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Startup failed (bad seed URL, unusable output directory, ...)
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// The main application logic
//
// Returns:
//   Ok(0) = crawl ran to completion (failed pages/images included)
//   Err   = could not even start
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Make sure the output directory exists before anything is fetched
    std::fs::create_dir_all(&cli.path)
        .with_context(|| format!("Could not create output directory {}", cli.path.display()))?;

    // Without -r no link is ever followed: the depth limit collapses to 0
    // and only the seed page is processed. Same loop, stricter policy.
    let max_depth = if cli.recursive { cli.level } else { 0 };

    println!("🔍 Scanning website: {}", cli.url);
    if cli.recursive {
        println!("📊 Max crawl depth: {}", max_depth);
    }
    println!("💾 Saving images to: {}", cli.path.display());

    // One HTTP client, shared by page fetches and image downloads
    let client = fetch::build_client()?;
    let fetcher = HttpPageFetcher::new(client.clone());
    let downloader = HttpImageDownloader::new(client);

    let config = CrawlConfig {
        seed_url: cli.url.clone(),
        max_depth,
        recursive: cli.recursive,
        save_path: cli.path.clone(),
    };

    let report = crawl::crawl(&config, &fetcher, &downloader).await?;

    println!();
    print_results(&report, cli.json)?;

    println!("\n✨ Crawl finished.");

    // Per-operation failures were already reported along the way; they do
    // not turn into a failing exit code
    Ok(0)
}

// Prints the report either as a table or as JSON
fn print_results(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_table(report);
    }
    Ok(())
}

// Prints the per-image results as a human-readable table
fn print_table(report: &CrawlReport) {
    if !report.images.is_empty() {
        println!("{:<60} {:<18} {:<30}", "IMAGE URL", "STATUS", "MESSAGE");
        println!("{}", "=".repeat(108));

        for result in &report.images {
            let status_display = format_status(&result.status);
            let message = result.message.as_deref().unwrap_or("");

            // Truncate URL if too long for display
            let url_display = if result.url.len() > 57 {
                format!("{}...", &result.url[..57])
            } else {
                result.url.clone()
            };

            println!("{:<60} {:<18} {:<30}", url_display, status_display, message);
        }

        println!();
    }

    println!("📊 Summary:");
    println!("   📄 Pages crawled: {}", report.pages_crawled);
    if report.pages_failed > 0 {
        println!("   ⚠️  Pages failed: {}", report.pages_failed);
    }
    println!("   ✅ Images saved: {}", report.saved_count());
    println!("   ❌ Images failed: {}", report.failed_count());
    println!("   📋 Total attempted: {}", report.images.len());
}

// Formats the status enum as a short labelled string
fn format_status(status: &ImageStatus) -> String {
    match status {
        ImageStatus::Saved => "✅ SAVED".to_string(),
        ImageStatus::FetchFailed => "❌ FETCH FAILED".to_string(),
        ImageStatus::WriteFailed => "💾 WRITE FAILED".to_string(),
    }
}
