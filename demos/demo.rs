//! End-to-end demo of the preflop range trainer.
//!
//! Run with: `cargo run --example demo`
//!
//! Shows the whole engine surface:
//!
//! 1. **Direct queries** — resolving specific hands against the bundled
//!    40bb 8-max strategy table.
//! 2. **Fallback policy** — what the engine returns for an unsupported
//!    stack, an absent scenario, and a hand missing from a known table.
//! 3. **A training session** — ten seeded rounds of CO opens vs the
//!    button, answered by a simple always-call "student", with the full
//!    13x13 range grid printed after a wrong answer.
//!
//! Seeds are fixed, so the output is deterministic and reproducible.

use preflop_range_trainer::{
    Action, Position, RangeKey, Resolution, RoundOutcome, SessionConfig, StrategyTable,
    TrainerSession,
};

/// Print a per-scenario table as the familiar 13x13 grid of action codes.
fn print_grid(table: &StrategyTable, stack: u32, opener: Position, defender: Position) {
    let Some(range) = table.range_table(stack, opener, defender) else {
        println!("  (no range data for {defender} vs {opener} at {stack}bb)");
        return;
    };
    println!("  Range for {defender} vs {opener} open at {stack}bb:");
    for row in RangeKey::all().chunks(13) {
        let line: Vec<String> = row
            .iter()
            .map(|k| {
                let code = range.get(k.as_str()).map(|d| d.action.as_str()).unwrap_or("-");
                format!("{:>4}:{}", k.as_str(), code)
            })
            .collect();
        println!("  {}", line.join(" "));
    }
}

fn main() {
    let table = StrategyTable::bundled();

    // ── Direct queries ──────────────────────────────────────────────────────
    println!("══ Direct queries: BU defending vs a CO open, 40bb ══");
    println!();
    for hand in ["AA", "AKs", "KQs", "T8s", "72o"] {
        let key = RangeKey::parse(hand).unwrap();
        match table.resolve_action(40, Position::CO, Position::BU, &key) {
            Ok(res) => match res {
                Resolution::Listed { action, frequency } => {
                    let mix = frequency
                        .map(|f| format!(" (mixed, {:.0}%)", f * 100.0))
                        .unwrap_or_default();
                    println!("  {hand:>4} -> {action}{mix}");
                }
                Resolution::UnlistedFold => println!("  {hand:>4} -> Fold (not in range)"),
                Resolution::ScenarioNotFound => println!("  {hand:>4} -> no data"),
            },
            Err(e) => println!("  {hand:>4} -> data fault: {e}"),
        }
    }
    println!();

    // ── Fallback policy ─────────────────────────────────────────────────────
    println!("══ Fallback policy ══");
    println!();
    let aa = RangeKey::parse("AA").unwrap();
    let r = table.resolve_action(17, Position::CO, Position::BU, &aa).unwrap();
    println!("  unsupported stack (17bb):    {r:?}");
    let r = table.resolve_action(40, Position::CO, Position::CO, &aa).unwrap();
    println!("  opener == defender (CO/CO):  {r:?}");
    println!();

    // ── Training session ────────────────────────────────────────────────────
    println!("══ Training session: 10 rounds, CO vs BU, seed 42 ══");
    println!();
    let mut session = TrainerSession::new(
        table,
        SessionConfig {
            stack: 40,
            opener: Position::CO,
            defender: Position::BU,
            rng_seed: Some(42),
        },
    );

    // A deliberately naive student: always calls.
    for round_no in 1..=10 {
        let round = session.round().clone();
        let outcome = session
            .submit(Action::Call)
            .expect("round awaits an answer")
            .expect("bundled data is well-formed");
        print!(
            "  #{round_no:<2} dealt {} {}  ({:>4})  answered Call -> ",
            round.cards[0], round.cards[1], round.key
        );
        match outcome {
            RoundOutcome::Correct { action } => println!("correct ({action})"),
            RoundOutcome::Incorrect { correct, .. } => println!("wrong, GTO is {correct}"),
            RoundOutcome::Undetermined => println!("no data for this scenario"),
        }
        session.deal();
    }
    println!();

    // After a miss the UI would show the grid; print it once here.
    print_grid(table, 40, Position::CO, Position::BU);
}
