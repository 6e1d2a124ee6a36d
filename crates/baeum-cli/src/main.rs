//! CLI front-end for the baeum Korean practice hub.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "baeum",
    about = "Baeum — Korean practice mini-games for the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the available drills
    List,

    /// Print a drill's item bank
    Bank {
        /// Drill name: romanization, vocab, race, tense
        drill: String,

        /// Which race bank to show: easy or hard
        #[arg(short, long, default_value = "easy")]
        mode: String,

        /// Load the bank from a JSON file instead of the built-in data
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print a study guide
    Guide {
        /// Topic: romanization, tenses
        topic: String,
    },

    /// Play a drill interactively
    Play {
        /// Drill name: romanization, vocab, race, tense
        drill: String,

        /// RNG seed for reproducible sessions
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Starting race mode: easy or hard
        #[arg(short, long, default_value = "easy")]
        mode: String,

        /// Load the drill's bank from a JSON file instead of the built-in data
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List => commands::list::run(),
        Commands::Bank { drill, mode, file } => {
            commands::bank::run(&drill, &mode, file.as_deref())
        }
        Commands::Guide { topic } => commands::guide::run(&topic),
        Commands::Play {
            drill,
            seed,
            mode,
            file,
        } => commands::play::run(&drill, seed, &mode, file.as_deref()),
    };

    if let Err(message) = result {
        eprintln!("error: {message}");
        process::exit(1);
    }
}
