use crate::error::SlotError;
use crate::grid::{Cell, CELLS, DAYS, FIRST_HOUR, HOURS};
use crate::member::Roster;
use itertools::Itertools;
use log::{debug, trace, warn};
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// "This member is available at this cell."
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Assignment {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub cell: Cell,
    pub member_id: String,
}

impl Assignment {
    pub fn new(day: u8, hour: u8, member_id: &str) -> Result<Assignment, SlotError> {
        Ok(Assignment {
            cell: Cell::new(day, hour)?,
            member_id: member_id.to_string(),
        })
    }
}

/// Which way a toggle went.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// Owns the set of `(day, hour, member)` assignments of one session.
///
/// Assignments are indexed by cell, so looking up a cell is a direct index
/// and counting overlap never materialises a new set. [`SlotStore::toggle`]
/// is the only way to change the set once the store is built.
#[derive(Clone, Debug)]
pub struct SlotStore {
    roster: Roster,
    cells: Vec<BTreeSet<String>>,
}

impl SlotStore {
    /// An empty store for `roster`
    pub fn new(roster: Roster) -> SlotStore {
        debug!("Creating empty slot store for {} members", roster.len());
        SlotStore {
            roster,
            cells: vec![BTreeSet::new(); CELLS],
        }
    }

    /// A store seeded with `assignments`.
    ///
    /// Every assignment is checked against the roster. Repeated assignments
    /// collapse into one.
    ///
    /// # Examples
    /// ```
    /// use treffpunkt::{Assignment, Member, Roster, SlotError, SlotStore};
    ///
    /// let roster = Roster::new(vec![Member::new("1", "Ada")]).unwrap();
    ///
    /// let store = SlotStore::with_assignments(
    ///     roster.clone(),
    ///     vec![Assignment::new(0, 18, "1").unwrap(), Assignment::new(0, 18, "1").unwrap()],
    /// )
    /// .unwrap();
    /// assert_eq!(store.len(), 1);
    ///
    /// assert!(matches!(
    ///     SlotStore::with_assignments(roster, vec![Assignment::new(0, 18, "2").unwrap()]),
    ///     Err(SlotError::UnknownMember { .. })
    /// ));
    /// ```
    pub fn with_assignments<I>(roster: Roster, assignments: I) -> Result<SlotStore, SlotError>
    where
        I: IntoIterator<Item = Assignment>,
    {
        let mut store = SlotStore::new(roster);
        for Assignment { cell, member_id } in assignments {
            store.check_member(&member_id)?;
            store.cells[cell.index()].insert(member_id);
        }
        debug!("Seeded slot store with {} assignments", store.len());

        Ok(store)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Adds the assignment `(day, hour, member_id)` if it is absent, removes it
    /// otherwise. Toggling twice is a no-op.
    ///
    /// # Errors
    /// Coordinates are checked first, then the member. Nothing changes on error.
    ///
    /// # Examples
    /// ```
    /// use treffpunkt::{Member, Roster, SlotError, SlotStore, Toggled};
    ///
    /// let roster = Roster::new(vec![Member::new("1", "Ada")]).unwrap();
    /// let mut store = SlotStore::new(roster);
    ///
    /// assert_eq!(store.toggle(2, 20, "1"), Ok(Toggled::Added));
    /// assert_eq!(store.toggle(2, 20, "1"), Ok(Toggled::Removed));
    ///
    /// assert!(matches!(store.toggle(2, 24, "1"), Err(SlotError::InvalidCoordinate { .. })));
    /// assert!(matches!(store.toggle(2, 20, "9"), Err(SlotError::UnknownMember { .. })));
    /// assert!(store.is_empty());
    /// ```
    pub fn toggle(&mut self, day: u8, hour: u8, member_id: &str) -> Result<Toggled, SlotError> {
        let cell = locate(day, hour)?;
        self.toggle_cell(cell, member_id)
    }

    /// [`SlotStore::toggle`] for an already validated cell
    pub fn toggle_cell(&mut self, cell: Cell, member_id: &str) -> Result<Toggled, SlotError> {
        self.check_member(member_id)?;

        let members = &mut self.cells[cell.index()];
        let toggled = if members.remove(member_id) {
            Toggled::Removed
        } else {
            members.insert(member_id.to_string());
            Toggled::Added
        };
        debug!("{:?} member ({}) at {}", toggled, member_id, cell);

        Ok(toggled)
    }

    /// Every member assigned to the cell. Untouched cells give an empty set.
    pub fn assignments_at(&self, day: u8, hour: u8) -> Result<&BTreeSet<String>, SlotError> {
        Ok(self.members_at(locate(day, hour)?))
    }

    pub fn members_at(&self, cell: Cell) -> &BTreeSet<String> {
        &self.cells[cell.index()]
    }

    /// # Errors
    /// Fails for invalid coordinates and for ids outside the roster.
    pub fn is_assigned(&self, day: u8, hour: u8, member_id: &str) -> Result<bool, SlotError> {
        let cell = locate(day, hour)?;
        self.check_member(member_id)?;
        Ok(self.members_at(cell).contains(member_id))
    }

    /// Number of members assigned to the cell, `|assignments_at(day, hour)|`
    pub fn overlap_count(&self, day: u8, hour: u8) -> Result<usize, SlotError> {
        Ok(self.count_at(locate(day, hour)?))
    }

    pub fn count_at(&self, cell: Cell) -> usize {
        self.cells[cell.index()].len()
    }

    /// The cells `member_id` is assigned to, in `(day, hour)` order
    ///
    /// # Examples
    /// ```
    /// use treffpunkt::{grid::Cell, Member, Roster, SlotStore};
    ///
    /// let roster = Roster::new(vec![Member::new("1", "Ada")]).unwrap();
    /// let mut store = SlotStore::new(roster);
    /// store.toggle(4, 22, "1").unwrap();
    /// store.toggle(1, 15, "1").unwrap();
    ///
    /// assert_eq!(
    ///     store.assignments_of("1").unwrap(),
    ///     vec![Cell::new(1, 15).unwrap(), Cell::new(4, 22).unwrap()]
    /// );
    /// ```
    pub fn assignments_of(&self, member_id: &str) -> Result<Vec<Cell>, SlotError> {
        self.check_member(member_id)?;
        Ok(Cell::all()
            .filter(|&cell| self.members_at(cell).contains(member_id))
            .collect_vec())
    }

    /// Overlap counts laid out as `[day][hour - FIRST_HOUR]`, for heat maps
    pub fn overlap_grid(&self) -> [[usize; HOURS]; DAYS] {
        let mut grid = [[0; HOURS]; DAYS];
        for cell in Cell::all() {
            grid[cell.day() as usize][(cell.hour() - FIRST_HOUR) as usize] = self.count_at(cell);
        }
        trace!("Overlap grid: {:?}", grid);
        grid
    }

    /// All assignments in `(day, hour, member id)` order
    pub fn assignments(&self) -> impl Iterator<Item = Assignment> + '_ {
        Cell::all().flat_map(move |cell| {
            self.members_at(cell).iter().map(move |id| Assignment {
                cell,
                member_id: id.clone(),
            })
        })
    }

    pub fn len(&self) -> usize {
        self.cells.iter().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(BTreeSet::is_empty)
    }

    fn check_member(&self, member_id: &str) -> Result<(), SlotError> {
        if self.roster.contains(member_id) {
            Ok(())
        } else {
            warn!("Rejected unknown member ({})", member_id);
            Err(SlotError::UnknownMember {
                id: member_id.to_string(),
            })
        }
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for SlotStore {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use crate::member::Member;

        let size = u.int_in_range(1..=12_usize)?;
        let members = (0..size)
            .map(|i| Member::new(&i.to_string(), &format!("Member {}", i)))
            .collect_vec();
        let roster = Roster::new(members).map_err(|_| arbitrary::Error::IncorrectFormat)?;

        let mut store = SlotStore::new(roster);
        let len = u.arbitrary_len::<(Cell, u8)>()?;
        for _ in 0..len {
            let cell = u.arbitrary::<Cell>()?;
            let member = u.int_in_range(0..=size - 1)?.to_string();
            store
                .toggle_cell(cell, &member)
                .map_err(|_| arbitrary::Error::IncorrectFormat)?;
        }
        Ok(store)
    }
}

fn locate(day: u8, hour: u8) -> Result<Cell, SlotError> {
    Cell::new(day, hour).map_err(|e| {
        warn!("{}", e);
        e
    })
}
