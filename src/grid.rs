use crate::error::SlotError;
use core::fmt;
use itertools::iproduct;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of days on the grid, Monday through Sunday.
pub const DAYS: usize = 7;
/// First displayed hour bucket (14:00).
pub const FIRST_HOUR: u8 = 14;
/// Last displayed hour bucket (23:00), inclusive.
pub const LAST_HOUR: u8 = 23;
/// Number of hourly buckets per day.
pub const HOURS: usize = (LAST_HOUR - FIRST_HOUR + 1) as usize;
/// Total number of cells on the weekly grid.
pub const CELLS: usize = DAYS * HOURS;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; DAYS] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Monday is 0, Sunday is 6
    ///
    /// # Examples
    /// ```
    /// use treffpunkt::grid::Weekday;
    ///
    /// assert_eq!(Weekday::from_index(0), Some(Weekday::Monday));
    /// assert_eq!(Weekday::from_index(6), Some(Weekday::Sunday));
    /// assert_eq!(Weekday::from_index(7), None);
    /// ```
    pub fn from_index(day: u8) -> Option<Weekday> {
        Weekday::ALL.get(day as usize).copied()
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// A single `(day, hour)` slot on the weekly grid.
///
/// A `Cell` can only hold coordinates inside the grid, so every
/// method taking one is infallible with respect to bounds.
/// Cells order by day first, then hour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawCell", into = "RawCell")
)]
pub struct Cell {
    day: u8,
    hour: u8,
}

impl Cell {
    /// Validates raw coordinates
    ///
    /// # Examples
    /// ```
    /// use treffpunkt::{grid::Cell, SlotError};
    ///
    /// let cell = Cell::new(0, 18).unwrap();
    /// assert_eq!(cell.day(), 0);
    /// assert_eq!(cell.hour(), 18);
    ///
    /// assert_eq!(
    ///     Cell::new(7, 18),
    ///     Err(SlotError::InvalidCoordinate { day: 7, hour: 18 })
    /// );
    /// assert!(Cell::new(0, 13).is_err());
    /// assert!(Cell::new(0, 24).is_err());
    /// ```
    pub fn new(day: u8, hour: u8) -> Result<Cell, SlotError> {
        if (day as usize) < DAYS && (FIRST_HOUR..=LAST_HOUR).contains(&hour) {
            Ok(Cell { day, hour })
        } else {
            Err(SlotError::InvalidCoordinate { day, hour })
        }
    }

    pub fn day(self) -> u8 {
        self.day
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn weekday(self) -> Weekday {
        Weekday::ALL[self.day as usize]
    }

    /// Row-major position of this cell, `0..CELLS`
    pub fn index(self) -> usize {
        self.day as usize * HOURS + (self.hour - FIRST_HOUR) as usize
    }

    /// Inverse of [`Cell::index`]
    ///
    /// # Examples
    /// ```
    /// use treffpunkt::grid::{Cell, CELLS};
    ///
    /// let cell = Cell::new(3, 21).unwrap();
    /// assert_eq!(Cell::from_index(cell.index()), Some(cell));
    /// assert_eq!(Cell::from_index(CELLS), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Cell> {
        if index < CELLS {
            Some(Cell {
                day: (index / HOURS) as u8,
                hour: FIRST_HOUR + (index % HOURS) as u8,
            })
        } else {
            None
        }
    }

    /// Every cell of the grid in ascending `(day, hour)` order
    ///
    /// # Examples
    /// ```
    /// use treffpunkt::grid::{Cell, CELLS};
    ///
    /// let cells: Vec<Cell> = Cell::all().collect();
    /// assert_eq!(cells.len(), CELLS);
    /// assert_eq!(cells[0], Cell::new(0, 14).unwrap());
    /// assert_eq!(cells[CELLS - 1], Cell::new(6, 23).unwrap());
    /// ```
    pub fn all() -> impl Iterator<Item = Cell> {
        iproduct!(0..DAYS as u8, FIRST_HOUR..=LAST_HOUR).map(|(day, hour)| Cell { day, hour })
    }

    /// Hour formatted for display, e.g. `18:00`
    pub fn hour_label(self) -> String {
        format!("{:02}:00", self.hour)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:00", self.weekday().short_name(), self.hour)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Cell {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let day = u.int_in_range(0..=(DAYS as u8 - 1))?;
        let hour = u.int_in_range(FIRST_HOUR..=LAST_HOUR)?;
        Ok(Cell { day, hour })
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawCell {
    day: u8,
    hour: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCell> for Cell {
    type Error = SlotError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        Cell::new(raw.day, raw.hour)
    }
}

#[cfg(feature = "serde")]
impl From<Cell> for RawCell {
    fn from(cell: Cell) -> Self {
        RawCell {
            day: cell.day,
            hour: cell.hour,
        }
    }
}
