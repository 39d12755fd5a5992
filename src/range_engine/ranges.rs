//! Range resolution engine — the read-only strategy table and its two
//! query operations.
//!
//! The table is nested: stack size → opener position → `"vs_"` + defender
//! code → range key → action entry. Lookups are exact-match only; the
//! engine never guesses a nearby stack or scenario. Three outcomes are
//! kept distinct when resolving a hand:
//!
//! - the scenario itself is unknown ([`Resolution::ScenarioNotFound`]) —
//!   the engine cannot judge at all;
//! - the scenario is known but the hand has no entry
//!   ([`Resolution::UnlistedFold`]) — played as a fold by policy;
//! - the entry exists but carries an unrecognized action code
//!   ([`RangeDataError::UnknownActionCode`]) — a data bug, never silently
//!   coerced to an action.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::range_engine::models::{Action, Position};
use crate::range_engine::range_key::RangeKey;

// ---------------------------------------------------------------------------
// Data asset model
// ---------------------------------------------------------------------------

/// One entry in a range table: a raw action code plus an optional mixing
/// frequency in [0, 1].
///
/// The code is carried as data rather than parsed at load time so that an
/// unrecognized code surfaces as a fault on the hand that holds it, instead
/// of rejecting the whole asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandActionDetail {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
}

/// A per-scenario table: range key → action entry. Usually all 169 keys,
/// but partial tables are legal; missing hands fold by policy.
pub type PositionRangeTable = HashMap<String, HandActionDetail>;

/// The full loaded strategy asset. Built once, never mutated, safe to
/// share across threads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StrategyTable {
    stacks: HashMap<u32, HashMap<Position, HashMap<String, PositionRangeTable>>>,
}

// ---------------------------------------------------------------------------
// Resolution results and faults
// ---------------------------------------------------------------------------

/// Outcome of resolving a single hand against a scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The hand has an explicit entry in the scenario's table.
    Listed {
        action: Action,
        frequency: Option<f64>,
    },
    /// The scenario's table exists but has no entry for this hand. Played
    /// as a fold, kept distinct from a listed fold so callers and tests
    /// can tell the two apart.
    UnlistedFold,
    /// No table exists for this (stack, opener, defender). The action is
    /// undeterminable — this never degrades to a fold.
    ScenarioNotFound,
}

impl Resolution {
    /// Collapse to the simplified action, if one can be determined.
    pub fn action(&self) -> Option<Action> {
        match self {
            Resolution::Listed { action, .. } => Some(*action),
            Resolution::UnlistedFold => Some(Action::Fold),
            Resolution::ScenarioNotFound => None,
        }
    }
}

/// Faults in the strategy data itself, as opposed to expected data-absence
/// conditions (which are ordinary [`Resolution`] values).
#[derive(Debug)]
pub enum RangeDataError {
    /// The asset document failed to parse.
    Malformed(serde_json::Error),
    /// A hand entry carries an action code outside `F`/`C`/`R`.
    UnknownActionCode { code: String, hand: RangeKey },
}

impl fmt::Display for RangeDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeDataError::Malformed(e) => {
                write!(f, "malformed strategy data: {e}")
            }
            RangeDataError::UnknownActionCode { code, hand } => {
                write!(f, "unknown action code {code:?} for hand {hand}")
            }
        }
    }
}

impl std::error::Error for RangeDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RangeDataError::Malformed(e) => Some(e),
            RangeDataError::UnknownActionCode { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl StrategyTable {
    /// Parse a strategy document. The document is keyed by stack size, then
    /// opener code, then `"vs_"` + defender code, then range key.
    pub fn from_json(json: &str) -> Result<StrategyTable, RangeDataError> {
        serde_json::from_str(json).map_err(RangeDataError::Malformed)
    }

    /// The strategy asset shipped with the crate (40bb, 8-max). Parsed
    /// lazily on first access and shared for the process lifetime.
    pub fn bundled() -> &'static StrategyTable {
        static TABLE: OnceLock<StrategyTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            StrategyTable::from_json(include_str!("../../data/ranges_40bb_8max.json"))
                .expect("bundled strategy asset parses")
        })
    }

    /// Stack sizes present in the loaded data, ascending. For settings UIs.
    pub fn supported_stacks(&self) -> Vec<u32> {
        let mut stacks: Vec<u32> = self.stacks.keys().copied().collect();
        stacks.sort_unstable();
        stacks
    }

    /// Fetch the per-scenario table, or `None` when the stack size is not
    /// loaded, opener equals defender, or no table exists for this exact
    /// (opener, defender) pair. Exact-match only.
    pub fn range_table(
        &self,
        stack: u32,
        opener: Position,
        defender: Position,
    ) -> Option<&PositionRangeTable> {
        let Some(openers) = self.stacks.get(&stack) else {
            warn!("stack size {stack}bb not present in strategy data");
            return None;
        };
        if opener == defender {
            warn!("invalid scenario: opener and defender are both {opener}");
            return None;
        }
        let vs_key = format!("vs_{}", defender.code());
        let table = openers.get(&opener).and_then(|vs| vs.get(&vs_key));
        if table.is_none() {
            warn!("no range for {defender} vs {opener} open at {stack}bb");
        }
        table
    }

    /// Resolve a single hand to its simplified action for a scenario.
    ///
    /// Missing scenario propagates as [`Resolution::ScenarioNotFound`];
    /// a hand missing from a present table folds by policy as
    /// [`Resolution::UnlistedFold`]; an unrecognized action code is a
    /// [`RangeDataError`], never an action.
    pub fn resolve_action(
        &self,
        stack: u32,
        opener: Position,
        defender: Position,
        hand: &RangeKey,
    ) -> Result<Resolution, RangeDataError> {
        let Some(table) = self.range_table(stack, opener, defender) else {
            return Ok(Resolution::ScenarioNotFound);
        };
        let Some(detail) = table.get(hand.as_str()) else {
            warn!(
                "hand {hand} not in range for {defender} vs {opener} at {stack}bb; \
                 defaulting to Fold"
            );
            return Ok(Resolution::UnlistedFold);
        };
        match Action::from_code(&detail.action) {
            Some(action) => Ok(Resolution::Listed {
                action,
                frequency: detail.frequency,
            }),
            None => {
                error!(
                    "unknown action code {:?} for hand {hand} \
                     ({defender} vs {opener} at {stack}bb)",
                    detail.action
                );
                Err(RangeDataError::UnknownActionCode {
                    code: detail.action.clone(),
                    hand: hand.clone(),
                })
            }
        }
    }
}
