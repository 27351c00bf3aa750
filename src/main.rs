use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use royal_stay_booking::{walkthrough, BookingConfig, Hotel, LineInput, Prompter, RetryPolicy};

// Interactive front-desk booking walkthrough
#[derive(Debug, Parser)]
#[command(name = "royal-stay", version, about = "Book a room at the front desk")]
struct Cli {
    /// Give up on a question after this many invalid answers (default: keep asking)
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Print a JSON summary of the booking once the walkthrough finishes
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so the transcript on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = BookingConfig {
        retry: cli
            .max_attempts
            .map_or_else(RetryPolicy::unlimited, RetryPolicy::limited),
        ..BookingConfig::default()
    };
    tracing::debug!(?config, "starting walkthrough");

    let mut hotel = Hotel::with_default_rooms();
    let input = LineInput::new(io::stdin().lock());
    let mut prompter = Prompter::new(input, io::stdout(), config.retry);

    let summary = walkthrough::run(&mut prompter, &mut hotel, &config)
        .context("booking walkthrough did not finish")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("serializing booking summary")?;
        println!("{}", json);
    }

    Ok(())
}
