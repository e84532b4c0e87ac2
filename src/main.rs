//! Wordle Openers - CLI
//!
//! Finds the best first Wordle guesses, and the best second guesses after each of them,
//! by letter-match scoring against every possible answer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordle_openers::{
    commands::{SearchMode, run_menu, run_search},
    output::debug_trace_config,
    scoring::SearchConfig,
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordle_openers",
    about = "Find the best first and second Wordle guesses by letter-match scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answers list: 'sample' (default, embedded) or path to a whitespace-delimited file
    #[arg(short, long, global = true, default_value = "sample")]
    answers: WordSource,

    /// Guess-only list: 'sample' (default, embedded) or path to a whitespace-delimited file
    #[arg(short, long, global = true, default_value = "sample")]
    guesses: WordSource,

    /// Worker threads for scoring (default: one per core, 1 runs sequentially)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    /// Log progress and timings to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print every ranking and discounted answer list
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive text menu (default)
    Menu,

    /// Display best first words only
    First,

    /// Display best first and best second words
    Second,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure scoring threads")?;
        tracing::debug!(threads, "scoring thread pool configured");
    }

    let config = if cli.debug {
        debug_trace_config()
    } else {
        SearchConfig::default()
    };

    // Default to the menu if no command given
    let command = cli.command.unwrap_or(Commands::Menu);

    match command {
        Commands::Menu => run_menu(cli.answers, cli.guesses, &config),
        Commands::First => run_search(SearchMode::FirstWords, &cli.answers, &cli.guesses, &config),
        Commands::Second => run_search(
            SearchMode::FirstAndSecondWords,
            &cli.answers,
            &cli.guesses,
            &config,
        ),
    }
}
