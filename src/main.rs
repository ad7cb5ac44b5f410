//! Play blackjack against the dealer in a text terminal.
//!
//! Usage:
//!   bjtty [--bankroll <N>] [--default-bet <N>] [--seed <N>] [--pause] [--no-clear] [-v]...

use std::io::{self, IsTerminal};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use bjtty::{Game, GameOptions, LineInput, SessionEnd, TerminalRenderer};
use clap::Parser;
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play blackjack against a fixed-rule dealer")]
struct Args {
    /// Starting bankroll.
    #[arg(short, long, default_value_t = 100)]
    bankroll: usize,

    /// Bet used when the bet prompt is answered with a blank line.
    #[arg(short, long, default_value_t = 10)]
    default_bet: usize,

    /// Shuffle seed; defaults to the system clock.
    #[arg(long)]
    seed: Option<u64>,

    /// Wait for [c]ontinue after each round.
    #[arg(long)]
    pause: bool,

    /// Do not clear the screen between table renders.
    #[arg(long)]
    no_clear: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn options(&self) -> GameOptions {
        GameOptions::default()
            .with_starting_bankroll(self.bankroll)
            .with_default_bet(self.default_bet)
            .with_pause_between_rounds(self.pause)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    let options = args.options();
    if !options.has_playable_bankroll() {
        bail!(
            "--bankroll must be between 1 and {}",
            GameOptions::MAX_BANKROLL
        );
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!(seed, bankroll = args.bankroll, "starting session");

    let mut game = Game::new(options, seed).context("failed to create the deck")?;

    let interactive = io::stdout().is_terminal();
    let mut renderer = TerminalRenderer::stdout()
        .with_clear_screen(interactive && !args.no_clear)
        .with_color(interactive);
    let mut input = LineInput::new(io::stdin().lock());

    println!("Blackjack. Dealer hits any 17 holding an ace. Type 'q' at the bet prompt to quit.");

    let summary = game
        .run(&mut input, &mut renderer)
        .context("session aborted")?;

    if summary.end == SessionEnd::InputClosed {
        info!("input closed");
    }

    Ok(())
}
