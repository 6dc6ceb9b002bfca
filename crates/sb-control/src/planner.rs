//! The tick movement planner.
//!
//! # Contract
//!
//! Given the committed state and an ordered candidate set, decide which
//! candidates advance by exactly one section (or leave the yard) this tick.
//! The planner never mutates anything: it reads a snapshot and returns a
//! [`TickPlan`] the facade commits atomically.
//!
//! # Confirmation
//!
//! Candidates are confirmed iteratively.  Each pass scans the ordered list
//! from the top and confirms the **first** candidate whose action is safe;
//! the loop ends when a pass confirms nobody.  Restarting from the top after
//! every confirmation matters: a confirmation can unblock a higher-priority
//! candidate, and that candidate must get the next claim ahead of anyone
//! later in the order.  Confirmations are never retracted, so the loop runs
//! at most once per candidate.
//!
//! An action is safe when it clears all of:
//!
//! 1. **Crossing interlock** — the freight 3↔4 hop is refused while any
//!    crossing-guard section is occupied.  Committed occupancy only: a guard
//!    occupant that is itself confirmed to vacate this tick still blocks.
//! 2. **Target exclusivity** — at most one confirmed entrant per section
//!    per tick.
//! 3. **Target availability** — the target is empty, or its occupant is
//!    already confirmed to hop away or exit (chain unblocking: a section can
//!    be taken in the same tick its occupant leaves it).
//! 4. **Head-on prohibition** — a candidate may not enter a section whose
//!    occupant is confirmed to enter the candidate's own section.
//!
//! A tick in which nothing is safe is not an error; the plan is empty and
//! the yard holds position.

use sb_core::{Section, TrainClass, TrainId};
use sb_topology::Topology;

use crate::occupancy::OccupancyBoard;
use crate::roster::Roster;

/// A confirmed action for one train.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Step {
    /// Advance one section along the train's path.
    Hop(Section),
    /// Leave the yard from the destination section.
    Exit,
}

/// The planner's output for one tick.
pub(crate) struct TickPlan {
    /// Confirmed actions in candidate order; the commit applies them as-is.
    pub confirmed: Vec<(TrainId, Step)>,
    /// Trains that reached their destination unmarked this tick: they halt
    /// now and become exit candidates the next time they are nominated.
    pub newly_marked: Vec<TrainId>,
}

/// One nominated train with its intended action.
struct Candidate {
    id: TrainId,
    /// Committed position at the start of the tick.
    at: Section,
    step: Step,
}

/// Plan one tick for the given present candidates.
pub(crate) fn plan_tick(
    topology: &Topology,
    roster: &Roster,
    board: &OccupancyBoard,
    mut candidates: Vec<TrainId>,
) -> TickPlan {
    // Passenger before freight, then by name.  Confirmation scans and the
    // commit both follow this order; it is the single source of determinism.
    candidates.sort_by(|&a, &b| {
        let ra = roster.get(a);
        let rb = roster.get(b);
        (ra.class(), ra.name()).cmp(&(rb.class(), rb.name()))
    });

    // Intended action per candidate.  A train standing on its destination
    // follows the two-step exit: halt and mark on the first nomination,
    // leave on the next.
    let mut newly_marked = Vec::new();
    let mut intents: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for &id in &candidates {
        let record = roster.get(id);
        let Some(at) = record.position() else { continue };
        if at == record.destination() {
            if record.is_leaving() {
                intents.push(Candidate { id, at, step: Step::Exit });
            } else {
                newly_marked.push(id);
            }
            continue;
        }
        let Some(next) = record.path().successor_of(at) else { continue };
        intents.push(Candidate { id, at, step: Step::Hop(next) });
    }

    // Iterative confirmation.
    let mut confirmed: Vec<Option<Step>> = vec![None; roster.len()];
    let mut claimed = [false; Section::COUNT];
    loop {
        let next_confirm = intents.iter().find(|candidate| {
            confirmed[candidate.id.index()].is_none()
                && is_safe(candidate, topology, roster, board, &confirmed, &claimed)
        });
        let Some(candidate) = next_confirm else { break };
        if let Step::Hop(target) = candidate.step {
            claimed[target.index()] = true;
        }
        confirmed[candidate.id.index()] = Some(candidate.step);
    }

    TickPlan {
        confirmed: intents
            .iter()
            .filter_map(|candidate| confirmed[candidate.id.index()].map(|step| (candidate.id, step)))
            .collect(),
        newly_marked,
    }
}

/// Check one candidate against the four safety rules.
fn is_safe(
    candidate: &Candidate,
    topology: &Topology,
    roster: &Roster,
    board: &OccupancyBoard,
    confirmed: &[Option<Step>],
    claimed: &[bool; Section::COUNT],
) -> bool {
    let target = match candidate.step {
        // An exit vacates without targeting a section, so nothing can
        // refuse it.
        Step::Exit => return true,
        Step::Hop(target) => target,
    };

    // Rule 1: crossing interlock, against committed occupancy only.
    if roster.get(candidate.id).class() == TrainClass::Freight
        && topology.is_crossing_hop(candidate.at, target)
        && topology
            .crossing_guard()
            .iter()
            .any(|&guard| !board.is_free(guard))
    {
        return false;
    }

    // Rule 2: target exclusivity.
    if claimed[target.index()] {
        return false;
    }

    // Rules 3 and 4: availability and the head-on prohibition.
    match board.occupant(target) {
        None => true,
        Some(occupant) => match confirmed[occupant.index()] {
            Some(Step::Exit) => true,
            Some(Step::Hop(occupant_target)) => occupant_target != candidate.at,
            None => false,
        },
    }
}
