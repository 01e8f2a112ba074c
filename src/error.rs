use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Every failure is a caller-input problem detected before the store is touched.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "kind"))]
pub enum SlotError {
    #[error("Invalid grid coordinate: day {day} must be within 0..=6 and hour {hour} within 14..=23")]
    InvalidCoordinate { day: u8, hour: u8 },
    #[error("Member ({id}) is not part of the roster")]
    UnknownMember { id: String },
    #[error("Member ({id}) appears more than once in the roster")]
    DuplicateMember { id: String },
}
