//! Unit tests for sb-core primitives.

#[cfg(test)]
mod section {
    use crate::{InvalidSection, Section};

    #[test]
    fn accepts_full_range() {
        for n in 1..=11 {
            let s = Section::new(n).unwrap();
            assert_eq!(s.number(), n);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Section::new(0), Err(InvalidSection(0)));
        assert_eq!(Section::new(12), Err(InvalidSection(12)));
        assert_eq!(Section::new(u8::MAX), Err(InvalidSection(u8::MAX)));
    }

    #[test]
    fn index_is_zero_based() {
        assert_eq!(Section::new(1).unwrap().index(), 0);
        assert_eq!(Section::new(11).unwrap().index(), 10);
    }

    #[test]
    fn all_is_ascending_and_complete() {
        let all: Vec<u8> = Section::all().map(Section::number).collect();
        assert_eq!(all, (1..=11).collect::<Vec<_>>());
        assert_eq!(all.len(), Section::COUNT);
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(Section::new(7).unwrap().to_string(), "7");
    }
}

#[cfg(test)]
mod ids {
    use crate::TrainId;

    #[test]
    fn index_roundtrip() {
        let id = TrainId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TrainId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(TrainId(0) < TrainId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(TrainId::INVALID.0, u32::MAX);
        assert_eq!(TrainId::default(), TrainId::INVALID);
    }
}

#[cfg(test)]
mod class {
    use crate::TrainClass;

    #[test]
    fn passenger_sorts_before_freight() {
        assert!(TrainClass::Passenger < TrainClass::Freight);
    }

    #[test]
    fn display() {
        assert_eq!(TrainClass::Passenger.to_string(), "passenger");
        assert_eq!(TrainClass::Freight.to_string(), "freight");
    }
}

#[cfg(test)]
mod tick {
    use crate::Tick;

    #[test]
    fn next_and_since() {
        let t = Tick::ZERO;
        assert_eq!(t.next(), Tick(1));
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }
}
