// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The surface is deliberately small:
//   image-spider <url> [-r] [-l LEVEL] [-p PATH] [--json]
//
// Rust concepts:
// - Structs: Group the parsed arguments
// - Derive macros: clap generates all parsing code from the attributes
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "image-spider",
    version = "0.1.0",
    about = "Recursively downloads images from a website",
    long_about = "image-spider crawls a website breadth-first starting from a seed URL and \
                  saves every embedded jpg/jpeg/png/gif/bmp image it finds. With --recursive \
                  it also follows links on the same host, up to the given depth level."
)]
pub struct Cli {
    /// The URL of the website to start from
    ///
    /// This is a positional argument (required, no flag needed)
    pub url: String,

    /// Recursively download images by following links on the same host
    ///
    /// #[arg(short, long)] creates both -r and --recursive
    #[arg(short, long)]
    pub recursive: bool,

    /// Maximum depth level for recursive download
    ///
    /// Only meaningful together with --recursive; without it only the
    /// seed page is processed
    #[arg(short, long, default_value_t = 5)]
    pub level: usize,

    /// Directory to save the downloaded files into (created if absent)
    #[arg(short, long, default_value = "./data/")]
    pub path: PathBuf,

    /// Print the crawl report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["image-spider", "http://example.com"]).unwrap();
        assert_eq!(cli.url, "http://example.com");
        assert!(!cli.recursive);
        assert_eq!(cli.level, 5);
        assert_eq!(cli.path, PathBuf::from("./data/"));
        assert!(!cli.json);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "image-spider",
            "http://example.com",
            "-r",
            "-l",
            "2",
            "-p",
            "./pics",
        ])
        .unwrap();
        assert!(cli.recursive);
        assert_eq!(cli.level, 2);
        assert_eq!(cli.path, PathBuf::from("./pics"));
    }

    #[test]
    fn test_url_is_required() {
        assert!(Cli::try_parse_from(["image-spider"]).is_err());
    }
}
