//! CLI entry point: build a vocabulary from a directory of raw messages.

use std::path::PathBuf;

use clap::Parser;
use email_vocab::{CorpusOptions, process_directory};

#[derive(Parser)]
#[command(
    name = "email-vocab",
    version,
    about = "Build a bag-of-words vocabulary from a directory of raw email messages"
)]
struct Cli {
    /// Directory containing raw message files
    #[arg(value_name = "DIR")]
    dir: PathBuf,

    /// Number of most frequent tokens to report
    #[arg(short = 'n', long, default_value_t = 100)]
    top: usize,

    /// Use the legacy whole-file pipeline (HTML tag stripping, long-word removal)
    #[arg(long)]
    legacy: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let options = CorpusOptions { legacy: cli.legacy };
    let report = process_directory(&cli.dir, options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Readable files:   {}", report.readable);
    println!("Unreadable files: {}", report.unreadable);
    for path in &report.failed {
        println!("  skipped: {}", path.display());
    }

    println!();
    println!(
        "Top {} of {} distinct tokens ({} total):",
        cli.top,
        report.vocabulary.distinct(),
        report.vocabulary.total()
    );
    for (token, count) in report.vocabulary.most_common(cli.top) {
        println!("{count:>8}  {token}");
    }

    Ok(())
}

/// Set up tracing on stderr; `RUST_LOG` overrides the `-v` mapping.
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
