use crate::grid::Cell;
use crate::store::SlotStore;
use itertools::Itertools;
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};

/// Ranking thresholds. Missing fields fall back to the defaults when
/// deserialised.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, rename_all = "camelCase")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct RankOptions {
    /// Cells with fewer assigned members are never suggested
    pub minimum_overlap: usize,
    /// Maximum number of suggestions
    pub limit: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        RankOptions {
            minimum_overlap: 2,
            limit: 5,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Overlap {
    /// Every member of the roster is available
    Full,
    Partial,
}

/// A suggested meeting cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub cell: Cell,
    pub count: usize,
    pub overlap: Overlap,
}

impl Candidate {
    pub fn day(&self) -> u8 {
        self.cell.day()
    }

    pub fn hour(&self) -> u8 {
        self.cell.hour()
    }

    pub fn hour_label(&self) -> String {
        self.cell.hour_label()
    }

    pub fn is_full_overlap(&self) -> bool {
        self.overlap == Overlap::Full
    }
}

#[cfg(feature = "serde")]
impl Serialize for Candidate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Candidate", 5)?;
        state.serialize_field("day", &self.day())?;
        state.serialize_field("hour", &self.hour())?;
        state.serialize_field("hourLabel", &self.hour_label())?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("overlap", &self.overlap)?;
        state.end()
    }
}

/// Picks the best meeting times out of `store`.
///
/// Every cell of the grid is scanned; cells with at least
/// `options.minimum_overlap` members are kept, ordered by count descending
/// and then by `(day, hour)` ascending, and cut to `options.limit` entries.
///
/// A candidate is flagged [`Overlap::Full`] when its count equals a non-zero
/// `roster_size`. The flag never affects the order.
///
/// # Examples
/// ```
/// use treffpunkt::{rank, Member, Overlap, RankOptions, Roster, SlotStore};
///
/// let roster = Roster::new(vec![
///     Member::new("M1", "Ada"),
///     Member::new("M2", "Grace"),
///     Member::new("M3", "Edsger"),
/// ])
/// .unwrap();
/// let mut store = SlotStore::new(roster);
///
/// for member in ["M1", "M2", "M3"] {
///     store.toggle(0, 18, member).unwrap();
/// }
/// store.toggle(1, 19, "M1").unwrap();
///
/// let best = rank(&store, 3, RankOptions::default());
/// assert_eq!(best.len(), 1);
/// assert_eq!((best[0].day(), best[0].hour(), best[0].count), (0, 18, 3));
/// assert_eq!(best[0].overlap, Overlap::Full);
/// ```
pub fn rank(store: &SlotStore, roster_size: usize, options: RankOptions) -> Vec<Candidate> {
    let candidates = Cell::all()
        .map(|cell| (cell, store.count_at(cell)))
        .filter(|&(_, count)| count >= options.minimum_overlap)
        .sorted_by(|(a, a_count), (b, b_count)| b_count.cmp(a_count).then_with(|| a.cmp(b)))
        .take(options.limit)
        .map(|(cell, count)| Candidate {
            cell,
            count,
            overlap: if roster_size > 0 && count == roster_size {
                Overlap::Full
            } else {
                Overlap::Partial
            },
        })
        .collect_vec();

    debug!(
        "Ranked {} candidates (minimum overlap {}, limit {})",
        candidates.len(),
        options.minimum_overlap,
        options.limit
    );
    trace!("Candidates: {:?}", candidates);

    candidates
}

/// Ranks against the store's own roster.
#[derive(Debug, Default, Copy, Clone)]
pub struct BestTimesRanker {
    pub options: RankOptions,
}

impl BestTimesRanker {
    pub fn new(options: RankOptions) -> Self {
        BestTimesRanker { options }
    }

    pub fn rank(&self, store: &SlotStore) -> Vec<Candidate> {
        rank(store, store.roster().len(), self.options)
    }
}
