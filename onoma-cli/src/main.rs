//! Catalog inspection CLI for the onoma rule engine

mod commands;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

/// Inspect, validate and probe phonetic rule catalogs
#[derive(Debug, Parser)]
#[command(name = "onoma", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List(args) => args.execute(),
        Commands::Show(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Probe(args) => args.execute(),
    }
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
