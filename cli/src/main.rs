//! Command-line interface for zoomnote text analysis.
//!
//! This CLI tool runs the analysis engine locally on a note file or stdin:
//! - zoom: Show one zoom level (keywords, line, brief, full)
//! - analyze: Show every level plus keywords, hashtags and beats
//! - beats: Segment a note into story beats
//! - tags: List hashtags and suggested tags
//! - keywords: Extract ranked keywords
//! - enhance: Use a remote language model, falling back to local results
//!
//! Configuration via environment:
//! - ZOOMNOTE_API_KEY: API key for the enhance command (unset means offline)
//! - ZOOMNOTE_API_URL: Chat-completions endpoint
//! - ZOOMNOTE_MODEL: Model name

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    analyze::AnalyzeArgs, beats::BeatsArgs, enhance::EnhanceArgs, keywords::KeywordsArgs,
    tags::TagsArgs, zoom::ZoomArgs,
};

/// zoomnote CLI
///
/// Read a note at different levels of detail. JSON output by default,
/// --human for formatted output.
#[derive(Parser)]
#[command(name = "zoomnote")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one zoom level of a note
    Zoom(ZoomArgs),

    /// Show every zoom level plus keywords, hashtags and beats
    Analyze(AnalyzeArgs),

    /// Segment a note into story beats
    Beats(BeatsArgs),

    /// List hashtags and suggested tags
    Tags(TagsArgs),

    /// Extract ranked keywords
    Keywords(KeywordsArgs),

    /// Suggest a title, summary, tags or keywords with a remote model
    Enhance(EnhanceArgs),
}

/// Initialize stderr logging. Quiet unless -v or RUST_LOG is set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Zoom(args) => commands::zoom::execute(cli.human, args),
        Commands::Analyze(args) => commands::analyze::execute(cli.human, args),
        Commands::Beats(args) => commands::beats::execute(cli.human, args),
        Commands::Tags(args) => commands::tags::execute(cli.human, args),
        Commands::Keywords(args) => commands::keywords::execute(cli.human, args),
        Commands::Enhance(args) => commands::enhance::execute(cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
