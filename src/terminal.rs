//! Text terminal front end: card art and prompts.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use std::io::{self, Write};

use tracing::warn;

use crate::card::{Card, Suit};
use crate::error::{ActionError, BetError};
use crate::hand::hand_value;
use crate::input::Command;
use crate::render::{Event, Renderer, TableView};
use crate::result::{Outcome, SessionEnd};

const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// A card as it lies on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Shown.
    Up(Card),
    /// Hidden hole card.
    Down,
}

/// Draws cards side by side as five lines of box art.
#[must_use]
pub fn card_art(faces: &[Face], color: bool) -> String {
    if faces.is_empty() {
        return String::from("(no cards)\n");
    }

    let mut rows: [String; 5] = Default::default();
    for face in faces {
        match face {
            Face::Up(card) => {
                let rank = card.rank.symbol();
                let suit = suit_glyph(card.suit, color);
                rows[0].push_str("┌─────┐ ");
                rows[1].push_str(&format!("│{rank:<5}│ "));
                rows[2].push_str(&format!("│  {suit}  │ "));
                rows[3].push_str(&format!("│{rank:>5}│ "));
                rows[4].push_str("└─────┘ ");
            }
            Face::Down => {
                rows[0].push_str("┌─────┐ ");
                for row in &mut rows[1..4] {
                    row.push_str("│░░░░░│ ");
                }
                rows[4].push_str("└─────┘ ");
            }
        }
    }

    let mut art = String::new();
    for row in &rows {
        art.push_str(row.trim_end());
        art.push('\n');
    }
    art
}

fn suit_glyph(suit: Suit, color: bool) -> String {
    let glyph = suit.symbol();
    match (color, suit) {
        (true, Suit::Hearts | Suit::Diamonds) => format!("\u{1b}[31m{glyph}\u{1b}[0m"),
        _ => String::from(glyph),
    }
}

/// Renders the table and events as plain text to any writer.
#[derive(Debug)]
pub struct TerminalRenderer<W> {
    out: W,
    clear_screen: bool,
    color: bool,
}

impl TerminalRenderer<io::Stdout> {
    /// Creates a renderer writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Creates a renderer writing to `out`, without screen clearing or color.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out,
            clear_screen: false,
            color: false,
        }
    }

    /// Sets whether the screen is cleared before each table render.
    #[must_use]
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Sets whether red suits are colored.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_table(&mut self, table: &TableView<'_>) -> io::Result<()> {
        if self.clear_screen {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }

        let dealer_faces: Vec<Face> = table
            .dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if index == 1 && !table.reveal_hole {
                    Face::Down
                } else {
                    Face::Up(*card)
                }
            })
            .collect();
        let dealer_value = if table.reveal_hole {
            table.dealer.value()
        } else {
            table.dealer.visible_value()
        };

        let player_faces: Vec<Face> = table.player.cards().iter().copied().map(Face::Up).collect();

        writeln!(self.out, "\nDealer's hand:")?;
        write!(self.out, "{}", card_art(&dealer_faces, self.color))?;
        writeln!(self.out, "Value: {dealer_value}")?;
        writeln!(self.out, "\nYour hand:")?;
        write!(self.out, "{}", card_art(&player_faces, self.color))?;
        writeln!(self.out, "Value: {}", hand_value(table.player.cards()))?;
        writeln!(self.out, "\nBankroll: {} | Bet: {}", table.bankroll, table.bet)?;
        self.out.flush()
    }

    fn write_event(&mut self, event: &Event) -> io::Result<()> {
        match event {
            Event::BetPrompt {
                balance,
                default_bet,
            } => write!(
                self.out,
                "\nBankroll: {balance}. Enter a bet (blank for {default_bet}, q to quit): "
            )?,
            Event::InvalidBet(_) => writeln!(self.out, "Please enter a whole number.")?,
            Event::BetRejected(err) => writeln!(self.out, "{}", bet_rejection(*err))?,
            Event::RoundStarted { round } => writeln!(self.out, "\nRound {round}")?,
            Event::ActionPrompt { can_double } => {
                let double = if *can_double {
                    "[d]ouble down"
                } else {
                    "(no funds to double)"
                };
                write!(self.out, "[h]it, [s]tand, {double}: ")?;
            }
            Event::PlayerAction(command) => {
                let text = match command {
                    Command::Hit => "You hit.",
                    Command::Stand => "You stand.",
                    Command::DoubleDown => "You double down.",
                    Command::Continue | Command::Quit | Command::Invalid => return Ok(()),
                };
                writeln!(self.out, "{text}")?;
            }
            Event::InvalidCommand => writeln!(self.out, "Invalid command.")?,
            Event::DoubleDownRejected(err) => match err {
                ActionError::InsufficientFunds => {
                    writeln!(self.out, "Not enough money to double down.")?;
                }
                ActionError::TableLimit => {
                    writeln!(self.out, "That double down is over the table limit.")?;
                }
                ActionError::InvalidState => writeln!(self.out, "You cannot double down now.")?,
            },
            Event::DealerDrew(card) => writeln!(self.out, "Dealer draws the {card}.")?,
            Event::RoundSettled(result) => {
                let settlement = result.settlement;
                match settlement.outcome {
                    Outcome::Won => writeln!(self.out, "You win {}!", settlement.bet)?,
                    Outcome::Lost => writeln!(self.out, "You lost {}.", settlement.bet)?,
                    Outcome::Tied => {
                        writeln!(self.out, "Push. Your {} is returned.", settlement.bet)?;
                    }
                }
                writeln!(self.out, "Bankroll: {}", settlement.balance)?;
            }
            Event::ContinuePrompt => write!(self.out, "[c]ontinue or [q]uit: ")?,
            Event::SessionEnded(summary) => match summary.end {
                SessionEnd::Broke => writeln!(
                    self.out,
                    "\nYou are out of money. Game over after {} round(s).",
                    summary.rounds_played
                )?,
                SessionEnd::Quit | SessionEnd::InputClosed => writeln!(
                    self.out,
                    "\nYou leave the table with {} ({:+}) after {} round(s).",
                    summary.final_balance,
                    summary.net(),
                    summary.rounds_played
                )?,
            },
        }
        self.out.flush()
    }
}

const fn bet_rejection(err: BetError) -> &'static str {
    match err {
        BetError::InvalidState => "A bet is already on the table.",
        BetError::ZeroBet => "The bet must be at least 1.",
        BetError::InsufficientFunds => "You cannot bet more than your bankroll.",
        BetError::TableLimit => "That bet is over the table limit.",
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, table: &TableView<'_>) {
        if let Err(err) = self.write_table(table) {
            warn!(%err, "failed to render table");
        }
    }

    fn notify(&mut self, event: &Event) {
        if let Err(err) = self.write_event(event) {
            warn!(%err, "failed to write event");
        }
    }
}
