//! banter -- a pattern-matching terminal chatbot.
//!
//! Binary name: `banter`
//!
//! Parses CLI arguments, initializes tracing, builds the content store, and
//! runs the interactive chat loop until an exit phrase or end of input.

mod chat;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Chat with a pattern-matching terminal bot.
///
/// All behavior is compiled in; the flags below affect presentation and
/// logging only.
#[derive(Parser)]
#[command(name = "banter", version, about, long_about = None)]
struct Cli {
    /// Suppress all log output except errors.
    #[arg(long)]
    quiet: bool,

    /// Detailed log output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Skip the startup banner.
    #[arg(long)]
    no_banner: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,banter=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    chat::loop_runner::run_chat_loop(!cli.no_banner).await
}
