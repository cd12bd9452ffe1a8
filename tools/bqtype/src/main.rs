mod commands;
mod format;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{arrow_schema::ArrowSchemaArgs, check::CheckArgs, parse::ParseArgs};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "bqtype", version, about = "Parse BigQuery type descriptors and check table schemas")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse type descriptors and print them
    Parse(ParseArgs),
    /// Check every column type of a schema file or directory
    Check(CheckArgs),
    /// Print the Arrow schema of each table in a schema
    ArrowSchema(ArrowSchemaArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Error: {e:#}");
        return ExitCode::from(2);
    }

    let result = match cli.command {
        Commands::Parse(args) => args.run(),
        Commands::Check(args) => args.run(),
        Commands::ArrowSchema(args) => args.run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
