pub mod error;
pub mod grid;
pub mod member;
pub mod rank;
pub mod shared;
pub mod store;

pub use error::SlotError;
pub use grid::{Cell, Weekday};
pub use member::{Member, Roster};
pub use rank::{rank, BestTimesRanker, Candidate, Overlap, RankOptions};
pub use shared::SharedSlotStore;
pub use store::{Assignment, SlotStore, Toggled};

#[cfg(test)]
mod tests {
    use crate::member::{Member, Roster};
    use crate::store::SlotStore;

    fn roster() -> Roster {
        Roster::new(vec![
            Member::new("M1", "Ada").with_photo("ada.png"),
            Member::new("M2", "Grace"),
            Member::new("M3", "Edsger"),
        ])
        .unwrap()
    }

    #[test]
    fn ranks_full_overlap_and_drops_lonely_cells() {
        use crate::rank::{rank, Overlap, RankOptions};
        use crate::store::Assignment;

        let store = SlotStore::with_assignments(
            roster(),
            vec![
                Assignment::new(0, 18, "M1").unwrap(),
                Assignment::new(0, 18, "M2").unwrap(),
                Assignment::new(0, 18, "M3").unwrap(),
                Assignment::new(1, 19, "M1").unwrap(),
            ],
        )
        .unwrap();

        assert_eq!(store.overlap_count(0, 18), Ok(3));
        assert_eq!(store.overlap_count(1, 19), Ok(1));

        let best = rank(&store, 3, RankOptions::default());
        assert_eq!(best.len(), 1);
        assert_eq!((best[0].day(), best[0].hour(), best[0].count), (0, 18, 3));
        assert_eq!(best[0].overlap, Overlap::Full);
    }

    #[test]
    fn toggle_adds_then_removes() {
        use crate::store::Toggled;

        let mut store = SlotStore::new(roster());
        store.toggle(2, 20, "M1").unwrap();
        let before = store.overlap_count(2, 20).unwrap();

        assert_eq!(store.is_assigned(2, 20, "M2"), Ok(false));
        assert_eq!(store.toggle(2, 20, "M2"), Ok(Toggled::Added));
        assert_eq!(store.is_assigned(2, 20, "M2"), Ok(true));
        assert_eq!(store.overlap_count(2, 20), Ok(before + 1));

        assert_eq!(store.toggle(2, 20, "M2"), Ok(Toggled::Removed));
        assert_eq!(store.is_assigned(2, 20, "M2"), Ok(false));
        assert_eq!(store.overlap_count(2, 20), Ok(before));
    }

    #[test]
    fn equal_counts_rank_in_grid_order() {
        use crate::rank::{rank, RankOptions};

        let mut store = SlotStore::new(roster());
        for member in ["M1", "M3"] {
            store.toggle(3, 21, member).unwrap();
            store.toggle(3, 16, member).unwrap();
        }

        let best = rank(&store, 3, RankOptions::default());
        assert_eq!(
            best.iter().map(|c| (c.day(), c.hour(), c.count)).collect::<Vec<_>>(),
            vec![(3, 16, 2), (3, 21, 2)]
        );
    }

    #[test]
    fn even_toggles_restore_every_cell() {
        use crate::grid::Cell;

        let mut store = SlotStore::new(roster());
        store.toggle(0, 14, "M3").unwrap();
        let before = store.assignments().collect::<Vec<_>>();

        for cell in Cell::all() {
            for member in ["M1", "M2", "M3"] {
                let assigned = store.is_assigned(cell.day(), cell.hour(), member).unwrap();
                for _ in 0..4 {
                    store.toggle_cell(cell, member).unwrap();
                }
                assert_eq!(
                    store.is_assigned(cell.day(), cell.hour(), member),
                    Ok(assigned)
                );
            }
        }

        assert_eq!(store.assignments().collect::<Vec<_>>(), before);
    }

    #[test]
    fn counts_agree_with_member_sets() {
        use crate::grid::Cell;

        let mut store = SlotStore::new(roster());
        let members = ["M1", "M2", "M3"];
        for (i, cell) in Cell::all().enumerate() {
            for member in members.iter().take(i % 4) {
                store.toggle_cell(cell, member).unwrap();
            }
        }

        for cell in Cell::all() {
            let count = store.overlap_count(cell.day(), cell.hour()).unwrap();
            let at = store.assignments_at(cell.day(), cell.hour()).unwrap();
            assert_eq!(count, at.len());
            assert!(count <= store.roster().len());
        }
    }

    #[test]
    fn ranking_respects_threshold_order_and_limit() {
        use crate::grid::Cell;
        use crate::rank::{rank, RankOptions};
        use itertools::Itertools;

        let mut store = SlotStore::new(roster());
        let members = ["M1", "M2", "M3"];
        for (i, cell) in Cell::all().enumerate() {
            for member in members.iter().take((i * 7) % 4) {
                store.toggle_cell(cell, member).unwrap();
            }
        }

        for minimum_overlap in 0..=4 {
            for limit in [0, 1, 5, 70, 100] {
                let options = RankOptions {
                    minimum_overlap,
                    limit,
                };
                let best = rank(&store, 3, options);

                assert!(best.len() <= limit);
                assert!(best.iter().all(|c| c.count >= minimum_overlap));
                assert!(best
                    .iter()
                    .tuple_windows()
                    .all(|(a, b)| a.count > b.count || (a.count == b.count && a.cell < b.cell)));
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn roster_and_assignments_round_trip_json() {
        use crate::store::Assignment;

        let json = r#"[{"id":"M1","name":"Ada","photo":"ada.png"},{"id":"M2","name":"Grace"},{"id":"M3","name":"Edsger"}]"#;
        let parsed: Roster = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, roster());

        let duplicate = r#"[{"id":"M1","name":"Ada"},{"id":"M1","name":"Ada"}]"#;
        assert!(serde_json::from_str::<Roster>(duplicate).is_err());

        let assignment: Assignment =
            serde_json::from_str(r#"{"day":0,"hour":18,"memberId":"M1"}"#).unwrap();
        assert_eq!(assignment, Assignment::new(0, 18, "M1").unwrap());
        assert!(serde_json::from_str::<Assignment>(r#"{"day":0,"hour":24,"memberId":"M1"}"#).is_err());
    }
}
