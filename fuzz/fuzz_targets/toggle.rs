#![no_main]
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;
use treffpunkt::{grid::Cell, SlotStore, Toggled};

fuzz_target!(|data: (SlotStore, Cell, u8)| {
    let (mut store, cell, member) = data;
    let member = (member as usize % store.roster().len()).to_string();

    let before = store.assignments().collect_vec();
    let count = store.count_at(cell);
    let assigned = store.members_at(cell).contains(&member);

    let first = store.toggle(cell.day(), cell.hour(), &member).unwrap();
    match first {
        Toggled::Added => {
            assert!(!assigned);
            assert_eq!(store.count_at(cell), count + 1);
        }
        Toggled::Removed => {
            assert!(assigned);
            assert_eq!(store.count_at(cell), count - 1);
        }
    }

    store.toggle_cell(cell, &member).unwrap();
    assert_eq!(
        store.assignments().collect_vec(),
        before,
        "Toggling twice should restore the assignments"
    );

    for cell in Cell::all() {
        let at = store.assignments_at(cell.day(), cell.hour()).unwrap();
        assert_eq!(store.count_at(cell), at.len());
        assert!(at.len() <= store.roster().len());
    }
});
