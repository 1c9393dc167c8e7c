use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, err};

/// Opaque identifier of a teacher record.
///
/// Backed by a UUIDv7, so ids are unique within a session and ordered by
/// creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeacherId(Uuid);

impl TeacherId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// When this id was minted, taken from the UUIDv7 timestamp bits.
    pub fn created_at(&self) -> Option<Timestamp> {
        let ts = self.0.get_timestamp()?;
        let (seconds, nanos) = ts.to_unix();
        Timestamp::new(seconds as i64, nanos as i32).ok()
    }
}

impl Default for TeacherId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TeacherId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for TeacherId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| err!("invalid teacher id '{}': {}", s, e))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Active,
    Inactive,
    OnLeave,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Active, Status::Inactive, Status::OnLeave];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::OnLeave => "on-leave",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
            Status::OnLeave => "On Leave",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| err!("unknown status '{}'", s))
    }
}

/// Everything about a teacher except the id.
///
/// This is what the add and edit forms produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub department: String,
    pub status: Status,
    pub experience: u32,
    pub subjects: Vec<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub department: String,
    pub status: Status,
    pub experience: u32,
    pub subjects: Vec<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

impl Teacher {
    pub fn from_draft(id: TeacherId, draft: TeacherDraft) -> Self {
        let TeacherDraft {
            name,
            email,
            phone,
            address,
            department,
            status,
            experience,
            subjects,
            bio,
            avatar,
        } = draft;

        Self {
            id,
            name,
            email,
            phone,
            address,
            department,
            status,
            experience,
            subjects,
            bio,
            avatar,
        }
    }

    pub fn to_draft(&self) -> TeacherDraft {
        TeacherDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            department: self.department.clone(),
            status: self.status,
            experience: self.experience,
            subjects: self.subjects.clone(),
            bio: self.bio.clone(),
            avatar: self.avatar.clone(),
        }
    }

    /// Upper-cased first letter of each word in the name, for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(name: &str) -> Teacher {
        Teacher::from_draft(
            TeacherId::new(),
            TeacherDraft {
                name: name.into(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&Status::OnLeave).unwrap(), "\"on-leave\"");
        assert_eq!("on-leave".parse::<Status>().unwrap(), Status::OnLeave);
        assert!("retired".parse::<Status>().is_err());
    }

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(teacher("sarah  jane johnson").initials(), "SJJ");
        assert_eq!(teacher("").initials(), "");
    }

    #[test]
    fn ids_round_trip_through_strings() {
        let id = TeacherId::new();
        let parsed: TeacherId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-an-id".parse::<TeacherId>().is_err());
    }

    #[test]
    fn ids_carry_a_creation_time() {
        assert!(TeacherId::new().created_at().is_some());
    }

    #[test]
    fn draft_round_trips_through_teacher() {
        let t = teacher("Michael Chen");
        assert_eq!(Teacher::from_draft(t.id, t.to_draft()), t);
    }
}
