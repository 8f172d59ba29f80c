mod display;
mod extract;
mod rank;

use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use provisio_core::{CONTEXT_WINDOW_SIZE, DEFAULT_TOP_N, SnippetExtractor};
use provisio_scan::{DEFAULT_PROGRESS_EVERY, ScanOptions};
use tracing_subscriber::EnvFilter;

/// Batch tools over a corpus of legal-decision JSON documents.
#[derive(Debug, Parser)]
#[command(name = "provisio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank decisions under a directory by number of cited provisions
    Rank(RankArgs),
    /// Read one decision from stdin and write provision snippets to stdout
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
struct RankArgs {
    /// Directory searched recursively for decision JSON files
    #[arg(short, long, env = "PROVISIO_DATA_DIR")]
    dir: PathBuf,

    /// Number of decisions to list
    #[arg(short = 'n', long, env = "PROVISIO_TOP_N", default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Log progress every N files (0 disables)
    #[arg(long, env = "PROVISIO_PROGRESS_EVERY", default_value_t = DEFAULT_PROGRESS_EVERY)]
    progress_every: usize,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Characters of context on each side of a keyword
    #[arg(short, long, env = "PROVISIO_WINDOW", default_value_t = CONTEXT_WINDOW_SIZE)]
    window: usize,
}

fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Rank(args) => {
            init_tracing("info");
            tracing::info!("provisio v{}", env!("CARGO_PKG_VERSION"));
            let options = ScanOptions {
                progress_every: args.progress_every,
            };
            let format = if args.json {
                rank::ReportFormat::Json
            } else {
                rank::ReportFormat::Table
            };
            rank::run(&args.dir, args.top, &options, format)
        }
        Command::Extract(args) => {
            // stderr carries the error payload; keep logs off it unless asked.
            init_tracing("warn");
            let result = SnippetExtractor::new(args.window)
                .map_err(extract::ExtractError::from)
                .and_then(|extractor| {
                    extract::run(io::stdin().lock(), io::stdout().lock(), &extractor)
                });
            if let Err(e) = result {
                extract::write_error(io::stderr().lock(), &e).ok();
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
