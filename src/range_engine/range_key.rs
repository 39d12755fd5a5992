//! Canonical range keys — the 169-way classification of two-card hands.
//!
//! A range key collapses suit identity while preserving relative rank
//! strength and suitedness: pocket pairs are the rank repeated (`"TT"`),
//! non-pairs are the two ranks in descending strength order plus an `s`
//! (suited) or `o` (offsuit) suffix (`"AKs"`, `"72o"`). Exactly 169 keys
//! exist: 13 pairs + 78 suited + 78 offsuit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::range_engine::models::{Card, Rank};

/// A canonical hand token as used to key the strategy tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeKey(String);

/// Number of distinct range keys: 13 pairs + 78 suited + 78 offsuit.
pub const RANGE_KEY_COUNT: usize = 169;

impl RangeKey {
    /// Classify a concrete two-card hand.
    ///
    /// Total over all 1326 two-card combinations, deterministic, and
    /// symmetric under argument swap. Suitedness comes from raw suit
    /// equality of the two inputs.
    pub fn from_cards(a: Card, b: Card) -> RangeKey {
        if a.rank == b.rank {
            return RangeKey(format!("{}{}", a.rank, b.rank));
        }
        let (hi, lo) = if a.rank > b.rank { (a, b) } else { (b, a) };
        let suffix = if a.suit == b.suit { "s" } else { "o" };
        RangeKey(format!("{}{}{}", hi.rank, lo.rank, suffix))
    }

    /// Parse a hand token (`"AKs"`, `"TT"`, `"72o"`), canonicalizing rank
    /// order. Rejects malformed tokens, pairs with a suffix, and non-pairs
    /// without one.
    pub fn parse(s: &str) -> Result<RangeKey, InvalidRangeKeyError> {
        let err = || InvalidRangeKeyError { input: s.to_string() };
        let chars: Vec<char> = s.chars().collect();
        let (r1, r2, suffix) = match chars.as_slice() {
            [a, b] => (*a, *b, None),
            [a, b, x] => (*a, *b, Some(*x)),
            _ => return Err(err()),
        };
        let r1 = Rank::from_symbol(r1).ok_or_else(err)?;
        let r2 = Rank::from_symbol(r2).ok_or_else(err)?;
        match (r1 == r2, suffix) {
            (true, None) => Ok(RangeKey(format!("{r1}{r2}"))),
            (false, Some(x @ ('s' | 'o'))) => {
                let (hi, lo) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
                Ok(RangeKey(format!("{hi}{lo}{x}")))
            }
            _ => Err(err()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Is this key a pocket pair?
    pub fn is_pair(&self) -> bool {
        self.0.len() == 2
    }

    /// All 169 keys in 13x13 grid order: pairs on the diagonal, suited
    /// hands above it, offsuit hands below. Matches the layout of the
    /// standard range chart and the ordering of the bundled data asset.
    pub fn all() -> Vec<RangeKey> {
        let ranks: Vec<Rank> = (2u8..=14).rev().map(Rank).collect();
        let mut keys = Vec::with_capacity(RANGE_KEY_COUNT);
        for (i, &hi) in ranks.iter().enumerate() {
            for (j, &lo) in ranks.iter().enumerate() {
                keys.push(RangeKey(if i == j {
                    format!("{hi}{lo}")
                } else if i < j {
                    format!("{hi}{lo}s")
                } else {
                    format!("{lo}{hi}o")
                }));
            }
        }
        keys
    }
}

impl fmt::Display for RangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A hand token could not be parsed. Indicates a caller bug, not a
/// runtime condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRangeKeyError {
    pub input: String,
}

impl fmt::Display for InvalidRangeKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized hand token: {:?}", self.input)
    }
}

impl std::error::Error for InvalidRangeKeyError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range_engine::models::Suit;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn pairs_suited_and_offsuit_forms() {
        assert_eq!(RangeKey::from_cards(card("Ah"), card("Ad")).as_str(), "AA");
        assert_eq!(RangeKey::from_cards(card("Ah"), card("Kh")).as_str(), "AKs");
        assert_eq!(RangeKey::from_cards(card("Kd"), card("As")).as_str(), "AKo");
        assert_eq!(RangeKey::from_cards(card("2c"), card("7d")).as_str(), "72o");
    }

    #[test]
    fn symmetric_under_argument_swap() {
        let a = card("Qh");
        let b = card("Tc");
        assert_eq!(RangeKey::from_cards(a, b), RangeKey::from_cards(b, a));
    }

    #[test]
    fn all_yields_169_distinct_keys() {
        let keys = RangeKey::all();
        assert_eq!(keys.len(), RANGE_KEY_COUNT);
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), RANGE_KEY_COUNT);
        let pairs = keys.iter().filter(|k| k.is_pair()).count();
        assert_eq!(pairs, 13);
    }

    #[test]
    fn every_two_card_combination_maps_into_the_169() {
        let valid: std::collections::HashSet<RangeKey> =
            RangeKey::all().into_iter().collect();
        let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
        let deck: Vec<Card> = suits
            .iter()
            .flat_map(|&suit| (2u8..=14).map(move |r| Card { rank: Rank(r), suit }))
            .collect();
        let mut combos = 0usize;
        for (i, &a) in deck.iter().enumerate() {
            for &b in &deck[i + 1..] {
                combos += 1;
                let key = RangeKey::from_cards(a, b);
                assert!(valid.contains(&key), "{key} not a valid range key");
                assert_eq!(key, RangeKey::from_cards(b, a));
            }
        }
        assert_eq!(combos, 1326);
    }

    #[test]
    fn parse_canonicalizes_and_rejects_malformed() {
        assert_eq!(RangeKey::parse("KAs").unwrap().as_str(), "AKs");
        assert_eq!(RangeKey::parse("TT").unwrap().as_str(), "TT");
        for bad in ["", "A", "AAs", "AKx", "AK", "AKso", "1Ko"] {
            assert!(RangeKey::parse(bad).is_err(), "{bad:?} should not parse");
        }
    }
}
