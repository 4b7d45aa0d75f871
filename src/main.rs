use clap::Parser;
use doxgen::cli::{Cli, Commands};
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Run(args) => doxgen::cli::run::run(args),
        Commands::Doctor { json, config } => doxgen::cli::doctor::run(json, config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
