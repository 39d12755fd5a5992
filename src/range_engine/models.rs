use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Clubs => write!(f, "c"),
            Suit::Diamonds => write!(f, "d"),
            Suit::Hearts => write!(f, "h"),
            Suit::Spades => write!(f, "s"),
        }
    }
}

/// Rank 2..=14 where 14 = Ace. Higher value means stronger rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }

    pub fn from_symbol(c: char) -> Option<Rank> {
        let v = match c {
            '2'..='9' => c as u8 - b'0',
            'T' | 't' => 10,
            'J' | 'j' => 11,
            'Q' | 'q' => 12,
            'K' | 'k' => 13,
            'A' | 'a' => 14,
            _ => return None,
        };
        Some(Rank(v))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// A card string could not be parsed. Indicates a caller bug, not a
/// runtime condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCardError {
    pub input: String,
}

impl fmt::Display for InvalidCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized card: {:?}", self.input)
    }
}

impl std::error::Error for InvalidCardError {}

impl FromStr for Card {
    type Err = InvalidCardError;

    /// Parse the two-character form used at the UI boundary, e.g. "As", "Td".
    fn from_str(s: &str) -> Result<Card, InvalidCardError> {
        let err = || InvalidCardError { input: s.to_string() };
        let mut chars = s.chars();
        let rank = chars.next().and_then(Rank::from_symbol).ok_or_else(err)?;
        let suit = chars.next().and_then(Suit::from_char).ok_or_else(err)?;
        if chars.next().is_some() {
            return Err(err());
        }
        Ok(Card { rank, suit })
    }
}

// ---------------------------------------------------------------------------
// Table positions (8-max)
// ---------------------------------------------------------------------------

/// The fixed 8-seat ordered set. Variant order matches preflop acting order;
/// serde names match the codes used in the strategy data asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    UTG,
    #[serde(rename = "UTG+1")]
    UTG1,
    LJ,   // Lojack
    HJ,   // Hijack
    CO,   // Cutoff
    BU,   // Button
    SB,   // Small Blind
    BB,   // Big Blind
}

impl Position {
    /// The short code used in the strategy data asset and in `vs_` keys.
    pub fn code(self) -> &'static str {
        match self {
            Position::UTG => "UTG",
            Position::UTG1 => "UTG+1",
            Position::LJ => "LJ",
            Position::HJ => "HJ",
            Position::CO => "CO",
            Position::BU => "BU",
            Position::SB => "SB",
            Position::BB => "BB",
        }
    }

    /// All eight seats in acting order.
    pub fn all() -> [Position; 8] {
        [
            Position::UTG, Position::UTG1, Position::LJ, Position::HJ,
            Position::CO, Position::BU, Position::SB, Position::BB,
        ]
    }

    /// Seat index in acting order (UTG = 0, BB = 7).
    pub fn index(self) -> usize {
        Position::all().iter().position(|&p| p == self).unwrap_or(0)
    }

    /// Seats that can open-raise: everyone but the big blind.
    pub fn opening_positions() -> Vec<Position> {
        Position::all()
            .into_iter()
            .filter(|&p| p != Position::BB)
            .collect()
    }

    /// Seats that can face `opener`'s raise: every seat acting after the
    /// opener, plus the blinds, never the opener itself. Session/UI policy;
    /// the engine itself only requires opener != defender.
    pub fn defenders_vs(opener: Position) -> Vec<Position> {
        Position::all()
            .into_iter()
            .filter(|&p| {
                p != opener
                    && (p.index() > opener.index()
                        || matches!(p, Position::SB | Position::BB))
            })
            .collect()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A position code could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPositionError {
    pub input: String,
}

impl fmt::Display for InvalidPositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized position: {:?}", self.input)
    }
}

impl std::error::Error for InvalidPositionError {}

impl FromStr for Position {
    type Err = InvalidPositionError;

    fn from_str(s: &str) -> Result<Position, InvalidPositionError> {
        Position::all()
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| InvalidPositionError { input: s.to_string() })
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// The three answers a defender can give to an open raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl Action {
    /// Map a strategy-asset action code to an `Action`. Returns `None` on
    /// unknown codes so the caller can report a data-integrity fault.
    pub fn from_code(code: &str) -> Option<Action> {
        match code {
            "F" => Some(Action::Fold),
            "C" => Some(Action::Call),
            "R" => Some(Action::Raise),
            _ => None,
        }
    }

    /// The single-letter code used in the strategy data asset.
    pub fn code(self) -> &'static str {
        match self {
            Action::Fold => "F",
            Action::Call => "C",
            Action::Raise => "R",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "Fold"),
            Action::Call => write!(f, "Call"),
            Action::Raise => write!(f, "Raise"),
        }
    }
}
