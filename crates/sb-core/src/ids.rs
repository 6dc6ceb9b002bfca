//! Typed roster index.

use std::fmt;

/// Index of a train record in the roster arena.
///
/// `Copy + Ord + Hash` so it can be used as a map key and a sorted-collection
/// element without ceremony.  The inner integer is `pub` to allow direct
/// indexing via `id.0 as usize`, but callers should prefer [`TrainId::index`]
/// for clarity.  Records are never removed from the roster, so a `TrainId`
/// stays valid for the lifetime of the controller that issued it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainId(pub u32);

impl TrainId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: TrainId = TrainId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for TrainId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainId({})", self.0)
    }
}

impl From<TrainId> for usize {
    #[inline(always)]
    fn from(id: TrainId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for TrainId {
    type Error = std::num::TryFromIntError;

    fn try_from(n: usize) -> Result<TrainId, Self::Error> {
        u32::try_from(n).map(TrainId)
    }
}
