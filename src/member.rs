use crate::error::SlotError;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Member {
    pub id: String,
    pub name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub photo: Option<String>,
}

impl Member {
    pub fn new(id: &str, name: &str) -> Member {
        Member {
            id: id.to_string(),
            name: name.to_string(),
            photo: None,
        }
    }

    pub fn with_photo(mut self, photo: &str) -> Member {
        self.photo = Some(photo.to_string());
        self
    }
}

/// The fixed, ordered list of members taking part in a session.
///
/// Ids are unique within a roster. The roster never changes once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Member>", into = "Vec<Member>")
)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    /// # Examples
    /// ```
    /// use treffpunkt::{Member, Roster, SlotError};
    ///
    /// let roster = Roster::new(vec![Member::new("1", "Ada"), Member::new("2", "Grace")]).unwrap();
    /// assert_eq!(roster.len(), 2);
    /// assert!(roster.contains("2"));
    ///
    /// assert_eq!(
    ///     Roster::new(vec![Member::new("1", "Ada"), Member::new("1", "Ada again")]),
    ///     Err(SlotError::DuplicateMember { id: "1".to_string() })
    /// );
    /// ```
    pub fn new(members: Vec<Member>) -> Result<Roster, SlotError> {
        let mut seen = HashSet::with_capacity(members.len());
        if let Some(duplicate) = members.iter().find(|m| !seen.insert(m.id.as_str())) {
            return Err(SlotError::DuplicateMember {
                id: duplicate.id.clone(),
            });
        }

        Ok(Roster { members })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }
}

impl TryFrom<Vec<Member>> for Roster {
    type Error = SlotError;

    fn try_from(members: Vec<Member>) -> Result<Self, Self::Error> {
        Roster::new(members)
    }
}

impl From<Roster> for Vec<Member> {
    fn from(roster: Roster) -> Self {
        roster.members
    }
}
