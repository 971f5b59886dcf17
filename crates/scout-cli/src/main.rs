//! CLI binary for codescout: scan a directory tree and print discovered
//! function and class declarations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scout_core::config::ScoutConfig;
use scout_core::decl::DeclKind;
use scout_core::output;
use scout_scan::languages::{SUPPORTED_EXTENSIONS, family_for_extension};
use scout_scan::scan::{ScanRequest, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scout", about = "Lightweight code structure scanner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory for function and class declarations
    Scan {
        /// Root directory to scan (defaults to current directory)
        path: Option<PathBuf>,

        /// Maximum traversal depth below the root
        #[arg(short, long)]
        depth: Option<usize>,

        /// Restrict results to one kind: function or class
        #[arg(short, long)]
        filter: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List supported extensions and their extraction families
    Languages,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan {
            path,
            depth,
            filter,
            format,
        } => cmd_scan(path, depth, filter.as_deref(), &format),
        Commands::Languages => cmd_languages(),
    }
}

fn cmd_scan(
    path: Option<PathBuf>,
    depth: Option<usize>,
    filter: Option<&str>,
    format: &str,
) -> Result<()> {
    let root = match path {
        Some(p) => p,
        None => std::env::current_dir().context("failed to get current directory")?,
    };
    let config = ScoutConfig::load(&root).unwrap_or_default();

    let mut request = ScanRequest::with_config(root, &config);
    if let Some(depth) = depth {
        request.max_depth = depth;
    }
    if let Some(filter) = filter {
        request.kind_filter = Some(
            DeclKind::from_filter(filter)
                .with_context(|| format!("unknown filter '{filter}': expected function or class"))?,
        );
    }

    use indicatif::{ProgressBar, ProgressStyle};
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    spinner.set_message("Scanning...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = scan(&request);
    spinner.finish_and_clear();
    let decls = result?;

    match format {
        "json" => println!("{}", output::format_json(&decls)?),
        "table" => println!("{}", output::format_table(&decls)),
        other => anyhow::bail!("unknown format '{other}': expected table or json"),
    }
    Ok(())
}

fn cmd_languages() -> Result<()> {
    println!("EXTENSION  FAMILY");
    for ext in SUPPORTED_EXTENSIONS {
        println!(".{ext:<8}  {}", family_for_extension(ext).name());
    }
    println!("\nUnrecognized extensions fall back to the script family.");
    Ok(())
}
