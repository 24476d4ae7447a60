//! Idea workflow status.
//!
//! Each variant's discriminant matches the seed data order (1-based) in the
//! `idea_statuses` lookup table. The wire form is the kebab-case name
//! (`"in-progress"`), never the numeric id.
//!
//! There is no transition graph: any status may move to any other status,
//! including its current value. Only [`IdeaStatus::Pending`] is assigned at
//! creation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IdeaStatus {
    #[default]
    Pending = 1,
    Approved = 2,
    Rejected = 3,
    InProgress = 4,
    Completed = 5,
}

/// Returned when a status name or id is outside the fixed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid status")]
pub struct InvalidStatus;

impl IdeaStatus {
    pub const ALL: [IdeaStatus; 5] = [
        IdeaStatus::Pending,
        IdeaStatus::Approved,
        IdeaStatus::Rejected,
        IdeaStatus::InProgress,
        IdeaStatus::Completed,
    ];

    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IdeaStatus::Pending => "pending",
            IdeaStatus::Approved => "approved",
            IdeaStatus::Rejected => "rejected",
            IdeaStatus::InProgress => "in-progress",
            IdeaStatus::Completed => "completed",
        }
    }
}

impl From<IdeaStatus> for StatusId {
    fn from(value: IdeaStatus) -> Self {
        value as StatusId
    }
}

impl TryFrom<StatusId> for IdeaStatus {
    type Error = InvalidStatus;

    fn try_from(value: StatusId) -> Result<Self, Self::Error> {
        IdeaStatus::ALL
            .into_iter()
            .find(|s| s.id() == value)
            .ok_or(InvalidStatus)
    }
}

impl FromStr for IdeaStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdeaStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(InvalidStatus)
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for IdeaStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IdeaStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown idea status '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ids_match_seed_data() {
        assert_eq!(IdeaStatus::Pending.id(), 1);
        assert_eq!(IdeaStatus::Approved.id(), 2);
        assert_eq!(IdeaStatus::Rejected.id(), 3);
        assert_eq!(IdeaStatus::InProgress.id(), 4);
        assert_eq!(IdeaStatus::Completed.id(), 5);
    }

    #[test]
    fn default_is_pending() {
        assert_eq!(IdeaStatus::default(), IdeaStatus::Pending);
    }

    #[test]
    fn parses_every_wire_name() {
        for status in IdeaStatus::ALL {
            assert_eq!(status.as_str().parse::<IdeaStatus>(), Ok(status));
        }
    }

    #[test]
    fn rejects_names_outside_the_enumeration() {
        for raw in ["", "PENDING", "in_progress", "done", " approved"] {
            assert_eq!(raw.parse::<IdeaStatus>(), Err(InvalidStatus), "{raw:?}");
        }
    }

    #[test]
    fn unknown_status_id_is_rejected() {
        assert_eq!(IdeaStatus::try_from(0), Err(InvalidStatus));
        assert_eq!(IdeaStatus::try_from(6), Err(InvalidStatus));
        assert_eq!(IdeaStatus::try_from(4), Ok(IdeaStatus::InProgress));
    }

    #[test]
    fn serializes_as_kebab_case_name() {
        let json = serde_json::to_string(&IdeaStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let back: IdeaStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(back, IdeaStatus::Completed);

        assert!(serde_json::from_str::<IdeaStatus>("\"archived\"").is_err());
    }
}
