//! Unit tests for sb-topology.

#[cfg(test)]
mod helpers {
    use sb_core::Section;

    pub fn s(n: u8) -> Section {
        Section::new(n).unwrap()
    }
}

// ── Layout structure ──────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use super::helpers::s;
    use crate::Topology;
    use sb_core::{Section, TrainClass};

    #[test]
    fn neighbour_lists_fixed_order() {
        let topology = Topology::yard();
        let numbers = |n: u8| -> Vec<u8> {
            topology
                .neighbours(s(n))
                .iter()
                .map(|section| section.number())
                .collect()
        };

        assert_eq!(numbers(1), vec![5]);
        assert_eq!(numbers(2), vec![5]);
        assert_eq!(numbers(5), vec![1, 2, 6]);
        assert_eq!(numbers(6), vec![5, 10]);
        assert_eq!(numbers(10), vec![6, 8, 9]);
        assert_eq!(numbers(8), vec![10]);
        assert_eq!(numbers(9), vec![10]);
        assert_eq!(numbers(3), vec![4, 7]);
        assert_eq!(numbers(4), vec![3]);
        assert_eq!(numbers(7), vec![3, 11]);
        assert_eq!(numbers(11), vec![7]);
    }

    #[test]
    fn links_are_symmetric() {
        let topology = Topology::yard();
        for a in Section::all() {
            for &b in topology.neighbours(a) {
                assert!(
                    topology.are_linked(b, a),
                    "link {a}-{b} missing its reverse"
                );
            }
        }
    }

    #[test]
    fn corridors_share_no_edge() {
        let topology = Topology::yard();
        for entry in Section::all() {
            let class = topology.classify(entry);
            for &neighbour in topology.neighbours(entry) {
                assert_eq!(
                    topology.classify(neighbour),
                    class,
                    "edge {entry}-{neighbour} bridges the corridors"
                );
            }
        }
    }

    #[test]
    fn classification_tables() {
        let topology = Topology::yard();
        for n in [1, 2, 5, 6, 8, 9, 10] {
            assert_eq!(topology.classify(s(n)), TrainClass::Passenger);
        }
        for n in [3, 4, 7, 11] {
            assert_eq!(topology.classify(s(n)), TrainClass::Freight);
        }
    }

    #[test]
    fn crossing_tables() {
        let topology = Topology::yard();
        for n in [1, 5, 6] {
            assert!(topology.guards_crossing(s(n)));
        }
        for n in [2, 3, 4, 7, 8, 9, 10, 11] {
            assert!(!topology.guards_crossing(s(n)));
        }
        assert!(topology.is_crossing_hop(s(3), s(4)));
        assert!(topology.is_crossing_hop(s(4), s(3)));
        assert!(!topology.is_crossing_hop(s(3), s(7)));
    }
}

// ── Path discovery ────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use super::helpers::s;
    use crate::{find_path, RouteError, Topology};

    fn path_numbers(from: u8, to: u8) -> Vec<u8> {
        let topology = Topology::yard();
        find_path(&topology, s(from), s(to))
            .unwrap()
            .sections()
            .iter()
            .map(|section| section.number())
            .collect()
    }

    #[test]
    fn trivial_same_section() {
        let topology = Topology::yard();
        let path = find_path(&topology, s(5), s(5)).unwrap();
        assert_eq!(path.sections(), [s(5)]);
        assert_eq!(path.hop_count(), 0);
    }

    #[test]
    fn freight_run_south() {
        assert_eq!(path_numbers(3, 11), vec![3, 7, 11]);
    }

    #[test]
    fn passenger_full_corridor() {
        assert_eq!(path_numbers(1, 9), vec![1, 5, 6, 10, 9]);
        assert_eq!(path_numbers(2, 8), vec![2, 5, 6, 10, 8]);
    }

    #[test]
    fn single_hop() {
        assert_eq!(path_numbers(4, 3), vec![4, 3]);
        assert_eq!(path_numbers(7, 3), vec![7, 3]);
    }

    #[test]
    fn branch_tiebreak_follows_link_order() {
        // From 10 both 8 and 9 are one hop; the fork is resolved per
        // destination, and sibling branches stay unreachable through the fork.
        assert_eq!(path_numbers(6, 8), vec![6, 10, 8]);
        assert_eq!(path_numbers(6, 9), vec![6, 10, 9]);
        assert_eq!(path_numbers(8, 9), vec![8, 10, 9]);
    }

    #[test]
    fn cross_corridor_is_unreachable() {
        let topology = Topology::yard();
        for (from, to) in [(1, 3), (3, 1), (11, 9), (5, 4)] {
            assert_eq!(
                find_path(&topology, s(from), s(to)),
                Err(RouteError::NoRoute { from: s(from), to: s(to) })
            );
        }
    }

    #[test]
    fn successor_walks_one_hop() {
        let topology = Topology::yard();
        let path = find_path(&topology, s(1), s(9)).unwrap();
        assert_eq!(path.successor_of(s(1)), Some(s(5)));
        assert_eq!(path.successor_of(s(10)), Some(s(9)));
        assert_eq!(path.successor_of(s(9)), None, "destination has no successor");
        assert_eq!(path.successor_of(s(4)), None, "off-path section has no successor");
    }

    #[test]
    fn paths_never_repeat_sections() {
        let topology = Topology::yard();
        for from in sb_core::Section::all() {
            for to in sb_core::Section::all() {
                let Ok(path) = find_path(&topology, from, to) else {
                    continue;
                };
                let mut seen = std::collections::HashSet::new();
                assert!(
                    path.sections().iter().all(|&section| seen.insert(section)),
                    "path {from}->{to} repeats a section"
                );
            }
        }
    }
}
