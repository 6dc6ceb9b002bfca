//! The controller facade: admission, movement, queries.

use sb_core::{Section, Tick, TrainClass, TrainId};
use sb_topology::{find_path, Topology};

use crate::error::{ControlError, ControlResult};
use crate::observer::{NoopObserver, TickObserver};
use crate::occupancy::OccupancyBoard;
use crate::planner::{plan_tick, Step};
use crate::roster::Roster;

/// The interlocking controller for the eleven-section yard.
///
/// Single-threaded and externally driven: the host calls
/// [`admit`](SignalBox::admit) and [`move_trains`](SignalBox::move_trains)
/// serially, and every state transition is synchronous with the call that
/// triggers it.  Between calls the board and the roster positions always
/// form a bijection and no train has ever advanced more than one section
/// per tick.
pub struct SignalBox {
    topology: Topology,
    roster: Roster,
    board: OccupancyBoard,
    tick: Tick,
}

impl SignalBox {
    /// A controller over the standard yard with an empty roster.
    pub fn new() -> SignalBox {
        SignalBox {
            topology: Topology::yard(),
            roster: Roster::new(),
            board: OccupancyBoard::new(),
            tick: Tick::ZERO,
        }
    }

    // ── Admission ─────────────────────────────────────────────────────────

    /// Admit a new train at `entry`, routed to `destination`.
    ///
    /// The checks run in a fixed order, so the first violated one names the
    /// error: duplicate name, then section numbers, then entry occupancy,
    /// then reachability.  On success the train's path is stored and the
    /// entry section becomes occupied.
    pub fn admit(&mut self, name: &str, entry: u8, destination: u8) -> ControlResult<()> {
        if self.roster.contains(name) {
            return Err(ControlError::DuplicateTrain(name.to_string()));
        }
        let entry = Section::new(entry)?;
        let destination = Section::new(destination)?;
        if let Some(occupant) = self.board.occupant(entry) {
            return Err(ControlError::EntryOccupied {
                section: entry,
                occupant: self.roster.get(occupant).name().to_string(),
            });
        }
        let path = find_path(&self.topology, entry, destination)?;
        let class = self.topology.classify(entry);
        let id = self.roster.enroll(name, class, path)?;
        self.board.place(entry, id);
        Ok(())
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Advance zero or more of the nominated trains by one section each (or
    /// out of the yard) and return how many advanced.
    ///
    /// A return of zero is not an error: it is how a preserved deadlock, a
    /// halt at a destination, or an empty nomination reads.
    pub fn move_trains(&mut self, names: &[&str]) -> ControlResult<usize> {
        self.move_trains_observed(names, &mut NoopObserver)
    }

    /// [`move_trains`](SignalBox::move_trains), reporting every committed
    /// action through `observer`.
    pub fn move_trains_observed<O: TickObserver>(
        &mut self,
        names: &[&str],
        observer: &mut O,
    ) -> ControlResult<usize> {
        // Validate every name before anything mutates: one unknown name
        // fails the whole call.  Exited trains and repeated names are
        // dropped from the candidate set, not errors.
        let mut candidates = Vec::with_capacity(names.len());
        let mut nominated = vec![false; self.roster.len()];
        for &name in names {
            let id = self.lookup(name)?;
            if !self.roster.get(id).is_present() || nominated[id.index()] {
                continue;
            }
            nominated[id.index()] = true;
            candidates.push(id);
        }

        let tick = self.tick;
        self.tick = tick.next();
        observer.on_tick_start(tick, candidates.len());

        let plan = plan_tick(&self.topology, &self.roster, &self.board, candidates);

        // Commit.  Every confirmed source is vacated before any placement
        // so a chained entrant never lands on a slot its predecessor has
        // not cleared yet.
        for &(id, _) in &plan.confirmed {
            if let Some(from) = self.roster.get(id).position() {
                self.board.vacate(from);
            }
        }
        let moved = plan.confirmed.len();
        for &(id, step) in &plan.confirmed {
            let Some(from) = self.roster.get(id).position() else {
                continue;
            };
            match step {
                Step::Hop(to) => {
                    self.board.place(to, id);
                    self.roster.get_mut(id).position = Some(to);
                    observer.on_hop(tick, self.roster.get(id).name(), from, to);
                }
                Step::Exit => {
                    let record = self.roster.get_mut(id);
                    record.position = None;
                    record.leaving = false;
                    observer.on_exit(tick, self.roster.get(id).name(), from);
                }
            }
        }
        for id in plan.newly_marked {
            self.roster.get_mut(id).leaving = true;
        }
        debug_assert!(self.board.is_coherent(&self.roster));

        observer.on_tick_end(tick, moved);
        Ok(moved)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The name of the train occupying `section`, or `None` if it is empty.
    pub fn section(&self, section: u8) -> ControlResult<Option<&str>> {
        let section = Section::new(section)?;
        Ok(self
            .board
            .occupant(section)
            .map(|id| self.roster.get(id).name()))
    }

    /// The current section of `name`, or `None` once it has left the yard.
    ///
    /// A name that was never admitted is an error; a known-but-exited train
    /// is `Ok(None)`.
    pub fn train(&self, name: &str) -> ControlResult<Option<Section>> {
        let id = self.lookup(name)?;
        Ok(self.roster.get(id).position())
    }

    /// Occupied sections in ascending numeric order.
    pub fn occupied_sections(&self) -> impl Iterator<Item = (Section, &str)> + '_ {
        self.board
            .iter()
            .map(|(section, id)| (section, self.roster.get(id).name()))
    }

    /// `true` if `name` was ever admitted, exited or not.
    pub fn is_admitted(&self, name: &str) -> bool {
        self.roster.contains(name)
    }

    /// The service class derived from the train's entry section.
    pub fn train_class(&self, name: &str) -> ControlResult<TrainClass> {
        let id = self.lookup(name)?;
        Ok(self.roster.get(id).class())
    }

    /// The tick the next movement call will run as.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Read access to the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Read access to the occupancy board.
    pub fn board(&self) -> &OccupancyBoard {
        &self.board
    }

    fn lookup(&self, name: &str) -> ControlResult<TrainId> {
        self.roster
            .id_of(name)
            .ok_or_else(|| ControlError::UnknownTrain(name.to_string()))
    }
}

impl Default for SignalBox {
    fn default() -> Self {
        Self::new()
    }
}
