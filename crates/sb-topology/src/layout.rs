//! The fixed eleven-section yard.
//!
//! # Shape
//!
//! Two corridors, disjoint as graphs:
//!
//! ```text
//! passenger   1 ─┐
//!                5 ── 6 ── 10 ── 8
//!             2 ─┘           └── 9
//!
//! freight     4 ── 3 ── 7 ── 11
//! ```
//!
//! The 3–4 segment physically crosses the passenger mainline, so the 3↔4
//! hop is guarded by the crossing-sensitive sections {1, 5, 6} even though
//! no track connects the corridors.
//!
//! # Determinism
//!
//! Neighbour lists are built in a fixed link order and never reordered.  The
//! path finder breaks ties by scanning neighbours in list order, so this
//! order is part of the observable routing behaviour.

use sb_core::{Section, TrainClass};

/// Shorthand for section literals in the layout tables.
const fn s(number: u8) -> Section {
    match Section::new(number) {
        Ok(section) => section,
        Err(_) => panic!("section literal out of range"),
    }
}

/// Entry sections of the freight corridor.  Everything else is passenger.
const FREIGHT_SECTIONS: [Section; 4] = [s(3), s(4), s(7), s(11)];

/// Passenger sections whose occupation forbids the freight 3↔4 hop.
const CROSSING_GUARD: [Section; 3] = [s(1), s(5), s(6)];

/// The two ends of the guarded freight hop.
const CROSSING_HOP: (Section, Section) = (s(3), s(4));

/// The yard: per-section neighbour lists plus the corridor and crossing
/// classification tables.
///
/// Immutable after construction; use [`Topology::yard`].
pub struct Topology {
    /// Neighbours of each section, indexed by `Section::index()`, in fixed
    /// link order.
    neighbours: [Vec<Section>; Section::COUNT],
}

impl Topology {
    /// Build the standard eleven-section yard.
    pub fn yard() -> Topology {
        let mut topology = Topology {
            neighbours: std::array::from_fn(|_| Vec::new()),
        };

        // Passenger corridor.
        topology.link(s(1), s(5));
        topology.link(s(2), s(5));
        topology.link(s(5), s(6));
        topology.link(s(6), s(10));
        topology.link(s(10), s(8));
        topology.link(s(10), s(9));

        // Freight corridor.
        topology.link(s(3), s(4));
        topology.link(s(3), s(7));
        topology.link(s(7), s(11));

        topology
    }

    /// Connect `a` and `b` in both directions.  Track is bidirectional; the
    /// undirected edge set is also what path discovery searches.
    fn link(&mut self, a: Section, b: Section) {
        self.neighbours[a.index()].push(b);
        self.neighbours[b.index()].push(a);
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Neighbours of `section` in fixed link order.
    #[inline]
    pub fn neighbours(&self, section: Section) -> &[Section] {
        &self.neighbours[section.index()]
    }

    /// `true` if `a` and `b` are directly connected.
    pub fn are_linked(&self, a: Section, b: Section) -> bool {
        self.neighbours(a).contains(&b)
    }

    // ── Classification ────────────────────────────────────────────────────

    /// The service class implied by entering the yard at `entry`.
    pub fn classify(&self, entry: Section) -> TrainClass {
        if FREIGHT_SECTIONS.contains(&entry) {
            TrainClass::Freight
        } else {
            TrainClass::Passenger
        }
    }

    // ── Crossing interlock tables ─────────────────────────────────────────

    /// `true` if occupying `section` forbids the freight crossing hop.
    #[inline]
    pub fn guards_crossing(&self, section: Section) -> bool {
        CROSSING_GUARD.contains(&section)
    }

    /// The crossing-sensitive sections, for callers that need to scan them.
    #[inline]
    pub fn crossing_guard(&self) -> &[Section] {
        &CROSSING_GUARD
    }

    /// `true` if the hop `from` → `to` (either direction) traverses the
    /// physical crossing.
    #[inline]
    pub fn is_crossing_hop(&self, from: Section, to: Section) -> bool {
        let (a, b) = CROSSING_HOP;
        (from, to) == (a, b) || (from, to) == (b, a)
    }
}
