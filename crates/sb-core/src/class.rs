//! Train service classification.

/// The service class of a train, derived from its entry section.
///
/// Variant order is load-bearing: the planner sorts candidates by
/// `(TrainClass, name)`, and the derived `Ord` puts `Passenger` first, which
/// is what gives passenger services right of way through shared
/// infrastructure.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrainClass {
    /// Passenger service on the mainline corridor.
    Passenger,
    /// Freight service on the goods corridor.
    Freight,
}

impl TrainClass {
    /// `true` for passenger services.
    #[inline]
    pub fn is_passenger(self) -> bool {
        matches!(self, TrainClass::Passenger)
    }

    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            TrainClass::Passenger => "passenger",
            TrainClass::Freight => "freight",
        }
    }
}

impl std::fmt::Display for TrainClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
