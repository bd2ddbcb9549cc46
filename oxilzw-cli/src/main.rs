//! OxiLZW CLI - variable-width LZW compressor
//!
//! Compresses and expands single streams with 9-16 bit LZW codewords.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_compress, cmd_expand, cmd_info};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "oxilzw")]
#[command(author, version, about = "Variable-width LZW compressor - Pure Rust")]
#[command(long_about = "
OxiLZW compresses a byte stream with LZW codewords that grow from 9 to 16 bits.
When the dictionary fills it either freezes (default) or resets (--reset).
The mode is recorded in the stream, so expand needs no options.

Reads stdin when INPUT is omitted or '-', writes stdout when -o is omitted.

Examples:
  oxilzw compress notes.txt -o notes.lzw
  oxilzw compress --reset big.log -o big.lzw
  cat notes.txt | oxilzw c > notes.lzw
  oxilzw expand notes.lzw -o notes.txt
  oxilzw info notes.lzw --json
")]
struct Cli {
    /// Show verbose output (summary on stderr, debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file or stdin
    #[command(alias = "c")]
    Compress {
        /// Input file (stdin if omitted or '-')
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reset the dictionary when it fills instead of freezing it
        #[arg(short, long)]
        reset: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Expand a compressed file or stdin
    #[command(alias = "x")]
    Expand {
        /// Input file (stdin if omitted or '-')
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Show stream information for a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "oxilzw=debug" } else { "oxilzw=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            reset,
            progress,
        } => cmd_compress(input.as_deref(), output.as_deref(), reset, cli.verbose, progress),
        Commands::Expand {
            input,
            output,
            progress,
        } => cmd_expand(input.as_deref(), output.as_deref(), cli.verbose, progress),
        Commands::Info { input, json } => cmd_info(&input, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
