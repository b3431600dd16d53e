//! CLI for resolving a single input without starting the server.
//!
//! Runs the same classification and oEmbed lookup as `POST /view` and prints
//! the outcome. Handy for checking whether a post is embeddable.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a post
//! cargo run --bin resolve -- https://www.tiktok.com/@scout2015/video/6718335390845095173
//!
//! # Profile handles never hit the network
//! cargo run --bin resolve -- @scout2015
//!
//! # Machine-readable output
//! cargo run --bin resolve -- --json https://www.tiktok.com/@u/video/1
//! ```
//!
//! # Environment Variables
//!
//! - `OEMBED_ENDPOINT` (optional): overrides the oEmbed endpoint
//!
//! Exits with status 1 when the input could not be resolved.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tiktok_viewer::prelude::*;
use tiktok_viewer::infrastructure::oembed::DEFAULT_OEMBED_ENDPOINT;

/// Resolve a TikTok post URL or @handle through oEmbed.
#[derive(Parser)]
#[command(name = "resolve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Post URL or @handle
    input: String,

    /// oEmbed endpoint to query
    #[arg(long, env = "OEMBED_ENDPOINT", default_value = DEFAULT_OEMBED_ENDPOINT)]
    endpoint: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let provider = HttpEmbedProvider::with_endpoint(cli.endpoint)
        .context("Failed to build oEmbed HTTP client")?;
    let service = EmbedService::new(Arc::new(provider));

    let result = service.resolve(&cli.input).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    Ok(if result.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Prints a render result in a terminal-friendly form.
fn print_result(result: &RenderResult) {
    match result {
        RenderResult::ProfileHint { display_url } => {
            println!("{}", "Profile".bright_blue().bold());
            println!("  {}", display_url.cyan());
            println!(
                "{}",
                "  TikTok does not provide embeds for profiles.".dimmed()
            );
        }
        RenderResult::PostEmbed {
            display_url,
            embed_html,
        } => {
            println!("{}", "Post".green().bold());
            println!("  {}", display_url.cyan());
            println!();
            println!("{}", embed_html);
        }
        RenderResult::Error { message } => {
            eprintln!("{} {}", "Error:".red().bold(), message);
        }
    }
}
