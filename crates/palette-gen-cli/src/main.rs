use clap::{ArgAction, Parser};
use tracing::Level;

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "palette-gen", version)]
#[command(
    about = "Generate Kotlin or Swift color declarations from an HSL palette",
    long_about = None
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    cli.command.execute()
}

/// Logs go to stderr so `generate --stdout` output stays clean.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
