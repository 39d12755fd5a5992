//! Headless training session — deals hands, checks answers against the
//! strategy table, and walks the per-round state machine:
//! dealt → awaiting answer → correct / incorrect / undetermined → re-deal.
//!
//! The session owns no strategy data; it borrows an immutable
//! [`StrategyTable`] and drives it with pure queries. A UI on top of this
//! only needs to render rounds and forward the user's picks.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::range_engine::deck::deal_two_cards;
use crate::range_engine::models::{Action, Card, Position};
use crate::range_engine::range_key::RangeKey;
use crate::range_engine::ranges::{
    PositionRangeTable, RangeDataError, Resolution, StrategyTable,
};

/// Settings for a training session.
///
/// `rng_seed: Some(u64)` reproduces the exact same sequence of dealt
/// hands — useful for tests and for replaying a drill.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub stack: u32,
    pub opener: Position,
    pub defender: Position,
    pub rng_seed: Option<u64>,
}

impl SessionConfig {
    pub fn new(stack: u32, opener: Position, defender: Position) -> Self {
        SessionConfig { stack, opener, defender, rng_seed: None }
    }
}

/// One dealt training hand: the concrete cards and their range key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub cards: [Card; 2],
    pub key: RangeKey,
}

/// Result of answering a round.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome<'a> {
    /// The chosen action matches the table.
    Correct { action: Action },
    /// Wrong answer; carries the full per-scenario table so the caller can
    /// display the 13x13 grid.
    Incorrect {
        chosen: Action,
        correct: Action,
        range: &'a PositionRangeTable,
    },
    /// No strategy data exists for the scenario; the answer cannot be
    /// judged and there is no grid to show.
    Undetermined,
}

/// A running training session against one scenario.
pub struct TrainerSession<'a> {
    table: &'a StrategyTable,
    stack: u32,
    opener: Position,
    defender: Position,
    rng: StdRng,
    round: Round,
    answered: bool,
}

impl<'a> TrainerSession<'a> {
    /// Start a session and deal the first hand.
    pub fn new(table: &'a StrategyTable, config: SessionConfig) -> Self {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let round = Self::fresh_round(&mut rng);
        TrainerSession {
            table,
            stack: config.stack,
            opener: config.opener,
            defender: config.defender,
            rng,
            round,
            answered: false,
        }
    }

    fn fresh_round(rng: &mut StdRng) -> Round {
        let cards = deal_two_cards(rng);
        let key = RangeKey::from_cards(cards[0], cards[1]);
        Round { cards, key }
    }

    /// The hand currently on the table.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Current (stack, opener, defender).
    pub fn scenario(&self) -> (u32, Position, Position) {
        (self.stack, self.opener, self.defender)
    }

    /// Has the current round been answered?
    pub fn answered(&self) -> bool {
        self.answered
    }

    /// Deal the next hand, discarding the current round.
    pub fn deal(&mut self) -> &Round {
        self.round = Self::fresh_round(&mut self.rng);
        self.answered = false;
        &self.round
    }

    /// Change the scenario and deal a fresh hand for it. The old round is
    /// meaningless under the new settings, so it never survives.
    pub fn set_scenario(&mut self, stack: u32, opener: Position, defender: Position) -> &Round {
        self.stack = stack;
        self.opener = opener;
        self.defender = defender;
        self.deal()
    }

    /// Answer the current round.
    ///
    /// Returns `None` if the round was already answered (the round is
    /// terminal until [`deal`](Self::deal) is called). Otherwise the
    /// outcome, or a [`RangeDataError`] when the strategy data itself is
    /// faulty.
    pub fn submit(
        &mut self,
        chosen: Action,
    ) -> Option<Result<RoundOutcome<'a>, RangeDataError>> {
        if self.answered {
            return None;
        }
        self.answered = true;

        let resolution =
            match self
                .table
                .resolve_action(self.stack, self.opener, self.defender, &self.round.key)
            {
                Ok(r) => r,
                Err(e) => return Some(Err(e)),
            };
        let correct = match resolution {
            Resolution::Listed { action, .. } => action,
            Resolution::UnlistedFold => Action::Fold,
            Resolution::ScenarioNotFound => return Some(Ok(RoundOutcome::Undetermined)),
        };

        Some(Ok(if chosen == correct {
            RoundOutcome::Correct { action: correct }
        } else {
            // The scenario resolved above, so its table exists; the grid is
            // only fetched on a miss.
            match self.table.range_table(self.stack, self.opener, self.defender) {
                Some(range) => RoundOutcome::Incorrect { chosen, correct, range },
                None => RoundOutcome::Undetermined,
            }
        }))
    }
}
