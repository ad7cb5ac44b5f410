//! Player input: line classification and the input source boundary.

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::error::InputError;

/// A classified player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Take another card.
    Hit,
    /// End the turn.
    Stand,
    /// Double the bet, take exactly one card, and end the turn.
    DoubleDown,
    /// Move on to the next round.
    Continue,
    /// Leave the table.
    Quit,
    /// Anything else.
    Invalid,
}

impl Command {
    /// Classifies a line by its first non-whitespace character,
    /// case-insensitively: `h`, `s`, `d`, `c`, `q`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtty::Command;
    ///
    /// assert_eq!(Command::parse("  Hit me"), Command::Hit);
    /// assert_eq!(Command::parse(""), Command::Invalid);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim_start().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('h') => Self::Hit,
            Some('s') => Self::Stand,
            Some('d') => Self::DoubleDown,
            Some('c') => Self::Continue,
            Some('q') => Self::Quit,
            _ => Self::Invalid,
        }
    }
}

/// A parsed answer to the bet-or-quit prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetInput {
    /// Wager this amount. Not yet checked against the bankroll.
    Amount(usize),
    /// Leave the table.
    Quit,
}

/// Parses a bet line.
///
/// A blank line selects `default_bet`, a line starting with `q` quits, and
/// anything else must be a whole number.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] if the line is none of the above.
pub fn parse_bet(line: &str, default_bet: usize) -> Result<BetInput, InputError> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Ok(BetInput::Amount(default_bet));
    }
    if trimmed.starts_with(['q', 'Q']) {
        return Ok(BetInput::Quit);
    }

    trimmed
        .parse::<usize>()
        .map(BetInput::Amount)
        .map_err(|_| InputError::NotANumber)
}

/// A source of player input, one line at a time.
///
/// Implementors only provide [`InputSource::read_line`]; classification is
/// shared.
pub trait InputSource {
    /// Reads the next line without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Unreadable`] if a line was consumed but is not
    /// text, or [`InputError::Closed`] once no more input is available.
    fn read_line(&mut self) -> Result<String, InputError>;

    /// Reads and classifies one command. An unreadable line is
    /// [`Command::Invalid`].
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Closed`] once no more input is available.
    fn read_command(&mut self) -> Result<Command, InputError> {
        match self.read_line() {
            Ok(line) => Ok(Command::parse(&line)),
            Err(InputError::Unreadable) => Ok(Command::Invalid),
            Err(err) => Err(err),
        }
    }

    /// Reads one answer to the bet-or-quit prompt.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotANumber`] for an unparsable line,
    /// [`InputError::Unreadable`] for a line that is not text, or
    /// [`InputError::Closed`] once no more input is available.
    fn read_bet(&mut self, default_bet: usize) -> Result<BetInput, InputError> {
        let line = self.read_line()?;
        parse_bet(&line, default_bet)
    }
}

impl InputSource for VecDeque<String> {
    fn read_line(&mut self) -> Result<String, InputError> {
        self.pop_front().ok_or(InputError::Closed)
    }
}

#[cfg(feature = "std")]
pub use line::LineInput;

#[cfg(feature = "std")]
mod line {
    use alloc::string::String;
    use std::io::{BufRead, ErrorKind};

    use tracing::{debug, warn};

    use super::InputSource;
    use crate::error::InputError;

    /// Reads input lines from any buffered reader, such as a locked stdin.
    #[derive(Debug)]
    pub struct LineInput<B> {
        reader: B,
    }

    impl<B: BufRead> LineInput<B> {
        /// Wraps a buffered reader.
        #[must_use]
        pub const fn new(reader: B) -> Self {
            Self { reader }
        }
    }

    impl<B: BufRead> InputSource for LineInput<B> {
        fn read_line(&mut self) -> Result<String, InputError> {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => Err(InputError::Closed),
                Ok(_) => {
                    let len = line.trim_end_matches(['\r', '\n']).len();
                    line.truncate(len);
                    Ok(line)
                }
                Err(err) if err.kind() == ErrorKind::InvalidData => {
                    debug!(%err, "skipping undecodable input line");
                    Err(InputError::Unreadable)
                }
                Err(err) => {
                    warn!(%err, "failed to read input");
                    Err(InputError::Closed)
                }
            }
        }
    }
}
