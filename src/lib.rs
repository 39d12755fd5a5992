//! # preflop_range_trainer
//!
//! A fully offline preflop poker training engine.
//!
//! The engine presents a randomly dealt two-card hand in a fixed scenario —
//! one position (the opener) has raised, another (the defender, or hero)
//! must respond — and checks a Fold/Call/Raise pick against a precomputed
//! GTO strategy table keyed by (stack size, opener, defender, hand). On a
//! wrong answer the full 13x13 range table for the scenario is available
//! for display.
//!
//! ## How it works
//!
//! 1. Load a [`StrategyTable`] — either [`StrategyTable::bundled`] (the
//!    40bb 8-max asset shipped with the crate) or
//!    [`StrategyTable::from_json`] for your own data.
//! 2. Either query it directly ([`StrategyTable::resolve_action`],
//!    [`StrategyTable::range_table`]) or run a [`TrainerSession`], which
//!    deals hands, classifies them into canonical [`RangeKey`]s, and judges
//!    answers round by round.
//!
//! Hand resolution keeps three outcomes distinct: a hand with a table
//! entry, a hand missing from a known table (folded by policy), and a
//! scenario with no data at all (undeterminable — never coerced to a
//! fold). A corrupt action code in the data is a hard
//! [`RangeDataError`], never an action.
//!
//! ## Quick start
//!
//! ```rust
//! use preflop_range_trainer::{
//!     Action, Position, RangeKey, SessionConfig, StrategyTable, TrainerSession,
//! };
//!
//! let table = StrategyTable::bundled();
//!
//! // Direct query: what does the button do with AKs facing a cutoff open?
//! let key = RangeKey::parse("AKs").unwrap();
//! let res = table
//!     .resolve_action(40, Position::CO, Position::BU, &key)
//!     .unwrap();
//! assert_eq!(res.action(), Some(Action::Raise));
//!
//! // Training loop: deal, answer, repeat. Seeded for reproducibility.
//! let mut session = TrainerSession::new(
//!     table,
//!     SessionConfig {
//!         stack: 40,
//!         opener: Position::CO,
//!         defender: Position::BU,
//!         rng_seed: Some(42),
//!     },
//! );
//! let round = session.round();
//! println!("Dealt {} {} -> {}", round.cards[0], round.cards[1], round.key);
//! let outcome = session.submit(Action::Fold).unwrap().unwrap();
//! println!("{outcome:?}");
//! session.deal(); // next hand
//! ```
//!
//! A runnable end-to-end demo ships as the `demo` example; its source
//! lives under `demos/` rather than the conventional `examples/`
//! directory and is wired up via an explicit `[[example]]` entry in
//! `Cargo.toml`. Run it with `cargo run --example demo`.

pub mod range_engine;

// Convenience re-exports so callers can use `preflop_range_trainer::StrategyTable`
// directly without reaching into `range_engine::`.
pub use range_engine::{
    deal_two_cards, Action, Card, Deck, HandActionDetail, InvalidCardError,
    InvalidPositionError, InvalidRangeKeyError, Position, PositionRangeTable, Rank,
    RangeDataError, RangeKey, Resolution, Round, RoundOutcome, SessionConfig,
    StrategyTable, Suit, TrainerSession, RANGE_KEY_COUNT,
};
