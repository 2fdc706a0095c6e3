//! Player input contracts.
//!
//! Drivers parse raw text into these types before touching the engine.
//! Anything unrecognized fails with [`InvalidInput`] and causes no state
//! change; the driver simply re-prompts.

use core::str::FromStr;

use crate::error::InvalidInput;

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// Keep the current hand and pass play to the dealer.
    Stand,
    /// Abandon the round and redeal from a fresh deck.
    Reset,
}

impl FromStr for Decision {
    type Err = InvalidInput;

    /// Accepts `h`/`hit`, `s`/`stand`, and `r`/`reset`, case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Decision;
    ///
    /// assert_eq!("H".parse::<Decision>(), Ok(Decision::Hit));
    /// assert!("x".parse::<Decision>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if s.eq_ignore_ascii_case("s") || s.eq_ignore_ascii_case("stand") {
            Ok(Self::Stand)
        } else if s.eq_ignore_ascii_case("r") || s.eq_ignore_ascii_case("reset") {
            Ok(Self::Reset)
        } else {
            Err(InvalidInput)
        }
    }
}

/// The choice offered once a round has resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextRound {
    /// Deal another round.
    PlayAgain,
    /// Stop playing.
    Quit,
}

impl FromStr for NextRound {
    type Err = InvalidInput;

    /// Accepts `y`/`yes`/`play` and `n`/`no`/`q`/`quit`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("y") || s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("play") {
            Ok(Self::PlayAgain)
        } else if s.eq_ignore_ascii_case("n")
            || s.eq_ignore_ascii_case("no")
            || s.eq_ignore_ascii_case("q")
            || s.eq_ignore_ascii_case("quit")
        {
            Ok(Self::Quit)
        } else {
            Err(InvalidInput)
        }
    }
}
