//! Core range engine — card handling, hand classification, and strategy
//! table resolution.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared value types: cards, positions, actions |
//! | `deck`      | 52-card deck with Fisher-Yates shuffle and two-card dealing |
//! | `range_key` | Canonical 169-way hand classification ("AKs", "TT", "72o") |
//! | `ranges`    | The strategy table: loading, scenario lookup, hand resolution |
//! | `trainer`   | Headless training session driving the per-round state machine |

pub mod deck;
pub mod models;
pub mod range_key;
pub mod ranges;
pub mod trainer;

// Re-export the public API surface so callers can use
// `range_engine::StrategyTable` without reaching into sub-modules.
pub use deck::{deal_two_cards, Deck};
pub use models::{
    Action, Card, InvalidCardError, InvalidPositionError, Position, Rank, Suit,
};
pub use range_key::{InvalidRangeKeyError, RangeKey, RANGE_KEY_COUNT};
pub use ranges::{
    HandActionDetail, PositionRangeTable, RangeDataError, Resolution, StrategyTable,
};
pub use trainer::{Round, RoundOutcome, SessionConfig, TrainerSession};
