use rand::Rng;

use crate::range_engine::models::{Card, Rank, Suit};

/// A standard 52-card deck that can be shuffled and dealt from.
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Build a fresh ordered deck and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
        let mut cards: Vec<Card> = suits
            .iter()
            .flat_map(|&suit| (2u8..=14).map(move |r| Card { rank: Rank(r), suit }))
            .collect();

        // Fisher-Yates shuffle
        for i in (1..cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            cards.swap(i, j);
        }

        Deck { cards, cursor: 0 }
    }

    /// Deal one card; panics if the deck is exhausted.
    pub fn deal(&mut self) -> Card {
        assert!(self.cursor < self.cards.len(), "Deck exhausted");
        let card = self.cards[self.cursor];
        self.cursor += 1;
        card
    }

    /// Remaining cards available.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }
}

/// Deal a hero hand of two distinct cards from a freshly shuffled deck.
///
/// Each call builds and discards its own deck, so there is no dealing state
/// carried between training rounds. Deterministic under a seeded rng.
pub fn deal_two_cards<R: Rng>(rng: &mut R) -> [Card; 2] {
    let mut deck = Deck::new_shuffled(rng);
    [deck.deal(), deck.deal()]
}
