//! objecthash CLI - compute and check structure-sensitive object hashes.

use clap::{Parser, Subcommand};
use objecthash::api::DEFAULT_MAX_DEPTH;
use objecthash::ObjectHasher;

mod commands;
mod errors;
mod output;

use commands::{golden, hash, number};

#[derive(Parser)]
#[command(name = "objecthash")]
#[command(about = "Compute and check structure-sensitive object hashes")]
struct Cli {
    /// Reject inputs nesting more than N containers
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash common JSON read from a file (or stdin if not provided)
    Hash {
        /// Input JSON file
        input: Option<String>,
        /// Print base64url instead of hex
        #[arg(long)]
        b64: bool,
    },
    /// Check every case in a golden fixture file
    Golden {
        /// Path to fixture file
        fixture: String,
        /// Output mismatches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the canonical encoding hashed for a number
    Number {
        /// Number to encode
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = ObjectHasher::with_max_depth(cli.max_depth)
        .map_err(errors::CliError::from)
        .and_then(|hasher| match cli.command {
            Commands::Hash { input, b64 } => hash::run(&hasher, input, b64),
            Commands::Golden { fixture, json } => golden::run(&hasher, fixture, json),
            Commands::Number { value } => number::run(value),
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
