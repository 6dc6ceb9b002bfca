//! `sb-control` — the interlocking controller.
//!
//! # Tick loop
//!
//! The controller is externally driven: the host calls
//! [`SignalBox::move_trains`] with the trains it wants advanced, and one call
//! is one tick.  Inside a tick:
//!
//! ```text
//! ① Validate — every nominated name must be on the roster; exited trains
//!              are dropped from the candidate set.
//! ② Order    — passenger before freight, then by name.  This order is the
//!              single source of determinism.
//! ③ Intend   — per candidate: exit, mark-for-exit, or next hop on its path.
//! ④ Confirm  — iterative passes over the ordered candidates; each pass
//!              confirms the first candidate that clears the crossing
//!              interlock, target availability (with chain unblocking),
//!              the head-on prohibition, and target exclusivity.
//! ⑤ Commit   — all confirmed actions apply atomically; the count of
//!              confirmed actions is returned.
//! ```
//!
//! # What lives here
//!
//! | Module        | Contents                                        |
//! |---------------|-------------------------------------------------|
//! | [`error`]     | `ControlError`, `ErrorKind`, `ControlResult`    |
//! | [`roster`]    | `Roster`, `TrainRecord`                         |
//! | [`occupancy`] | `OccupancyBoard`                                |
//! | `planner`     | tick planning (crate-internal)                  |
//! | [`signalbox`] | `SignalBox` — admission, movement, queries      |
//! | [`observer`]  | `TickObserver`, `NoopObserver`                  |

pub mod error;
pub mod observer;
pub mod occupancy;
mod planner;
pub mod roster;
pub mod signalbox;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ControlError, ControlResult, ErrorKind};
pub use observer::{NoopObserver, TickObserver};
pub use occupancy::OccupancyBoard;
pub use roster::{Roster, TrainRecord};
pub use signalbox::SignalBox;
