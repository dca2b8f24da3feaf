pub mod commands;
pub mod progress;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "sitemap-export")]
#[command(
    about = "Crawl a sitemap or RSS feed and export the content of its pages",
    long_about = None
)]
pub struct Cli {
    /// Sitemap or RSS feed URL or file path to crawl (prompted for when missing)
    #[arg(short, long)]
    pub input: Option<String>,

    /// CSS selector of the content region [default: body]
    #[arg(short, long)]
    pub css: Option<String>,

    /// Output file name, without extension [default: output]
    #[arg(short = 'n', long)]
    pub filename: Option<String>,

    /// Output file type: txt, json, jsonl, md, pdf [default: txt]
    #[arg(short = 't', long = "type")]
    pub output_type: Option<String>,

    /// Content format: html, md, txt [default: md for md output, txt otherwise]
    #[arg(short, long)]
    pub format: Option<String>,

    /// Only include URLs whose path starts with this pattern (e.g. blog/*)
    #[arg(long)]
    pub filter: Option<String>,

    /// HTTP timeout in seconds [default: 10]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// User-Agent header for HTTP requests [default: sitemap-export]
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Config file to read instead of ~/.config/sitemap-export/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}
