//! yard_shift — drive a mixed shift of traffic through the yard.
//!
//! Admits two passenger services and two freight services, then nominates
//! every train still on the yard each tick until the shift is cleared (or
//! the yard stops making progress, which this roster never does).

use anyhow::Result;

use sb_control::{SignalBox, TickObserver};
use sb_core::{Section, Tick};

// ── Constants ─────────────────────────────────────────────────────────────────

/// (name, entry, destination) of every service in the shift.
const SHIFT: [(&str, u8, u8); 4] = [
    ("IC101", 1, 9),  // passenger, full mainline run
    ("IC102", 2, 8),  // passenger, follows one section behind
    ("G201", 3, 11),  // freight, southbound goods run
    ("G202", 4, 3),   // freight, crossing move — waits for the mainline
];

/// Safety valve for the dispatch loop.
const MAX_TICKS: usize = 32;

// ── Observer ──────────────────────────────────────────────────────────────────

struct MovementLog;

impl TickObserver for MovementLog {
    fn on_hop(&mut self, tick: Tick, train: &str, from: Section, to: Section) {
        println!("  {tick}: {train:<6} {from:>2} -> {to:<2}");
    }

    fn on_exit(&mut self, tick: Tick, train: &str, from: Section) {
        println!("  {tick}: {train:<6} {from:>2} -> out");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== yard_shift — signalbox interlocking demo ===");
    println!();

    let mut sb = SignalBox::new();
    for (name, entry, destination) in SHIFT {
        sb.admit(name, entry, destination)?;
        println!(
            "admitted {name:<6} at {entry:>2}, bound for {destination:>2} ({})",
            sb.train_class(name)?
        );
    }
    println!();

    let mut log = MovementLog;
    let mut total_moves = 0;
    for _ in 0..MAX_TICKS {
        let on_yard: Vec<&str> = SHIFT
            .iter()
            .filter(|(name, _, _)| matches!(sb.train(name), Ok(Some(_))))
            .map(|(name, _, _)| *name)
            .collect();
        if on_yard.is_empty() {
            break;
        }
        total_moves += sb.move_trains_observed(&on_yard, &mut log)?;
    }

    println!();
    println!(
        "shift cleared in {} ticks, {total_moves} movements",
        sb.tick().0
    );
    println!();
    println!("{:<8} {:<10} {}", "Train", "Class", "Position");
    println!("{}", "-".repeat(30));
    for (name, _, _) in SHIFT {
        let position = match sb.train(name)? {
            Some(section) => section.to_string(),
            None => "departed".to_string(),
        };
        println!("{:<8} {:<10} {}", name, sb.train_class(name)?, position);
    }

    Ok(())
}
