use card_shuffle::cli::{render_report, render_sweep, require_deck_size, sweep_range, CliError};
use card_shuffle::simulation::engine::{count_rounds_with, ShuffleOptions};
use card_shuffle::simulation::sweep::{sweep, DEFAULT_SWEEP_RANGE};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "card-shuffle")]
#[command(about = "Count the shuffle rounds that bring a deck back to its original order", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of cards in the deck
    #[arg(allow_hyphen_values = true)]
    deck_size: Option<String>,

    /// Print hand and table before and after every round
    #[arg(short, long)]
    verbose: bool,

    /// Give up after this many rounds
    #[arg(short, long)]
    max_rounds: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Count rounds for every deck size in a range
    Sweep {
        /// Smallest deck size
        #[arg(short, long, default_value_t = *DEFAULT_SWEEP_RANGE.start())]
        from: u32,

        /// Largest deck size
        #[arg(short, long, default_value_t = *DEFAULT_SWEEP_RANGE.end())]
        to: u32,

        /// Give up on a size after this many rounds
        #[arg(short, long)]
        max_rounds: Option<u64>,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,

        /// Show a progress bar on stderr
        #[arg(short, long)]
        progress: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Sweep {
            from,
            to,
            max_rounds,
            json,
            progress,
        }) => run_sweep(from, to, max_rounds, json, progress),
        None => run_single(cli.deck_size.as_deref(), cli.max_rounds, cli.verbose, cli.json),
    };

    if let Err(e) = result {
        eprintln!("✗ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_single(
    raw_size: Option<&str>,
    max_rounds: Option<u64>,
    verbose: bool,
    json: bool,
) -> Result<(), CliError> {
    let deck_size = require_deck_size(raw_size)?;
    let options = ShuffleOptions { max_rounds, verbose };

    let start = std::time::Instant::now();
    let report = count_rounds_with(deck_size, &options)?;
    let elapsed = start.elapsed();

    if verbose {
        println!();
    }
    println!("{}", render_report(&report, json)?);
    if verbose {
        eprintln!("✓ Simulation completed in {:.2?}", elapsed);
    }
    Ok(())
}

fn run_sweep(
    from: u32,
    to: u32,
    max_rounds: Option<u64>,
    json: bool,
    progress: bool,
) -> Result<(), CliError> {
    let sizes = sweep_range(from, to)?;
    let options = ShuffleOptions {
        max_rounds,
        verbose: false,
    };

    let start = std::time::Instant::now();
    let reports = sweep(sizes, &options, progress)?;
    let elapsed = start.elapsed();

    println!("{}", render_sweep(&reports, json)?);
    eprintln!(
        "✓ Swept {} deck sizes in {:.2?}",
        reports.len(),
        elapsed
    );
    Ok(())
}
