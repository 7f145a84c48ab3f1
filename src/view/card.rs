//! Activity card view-model

use crate::model::{initials, ActivityRecord};

/// Placeholder shown for an activity nobody has joined
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet.";

/// One participant row: avatar label plus email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantItem {
    pub initials: String,
    pub email: String,
}

/// Roster section of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Roster {
    Empty,
    Members(Vec<ParticipantItem>),
}

impl Roster {
    pub fn from_participants(participants: &[String]) -> Self {
        if participants.is_empty() {
            return Roster::Empty;
        }
        Roster::Members(
            participants
                .iter()
                .map(|email| ParticipantItem {
                    initials: initials(email),
                    email: email.clone(),
                })
                .collect(),
        )
    }

    pub fn count(&self) -> usize {
        match self {
            Roster::Empty => 0,
            Roster::Members(items) => items.len(),
        }
    }

    /// Heading of a non-empty roster, e.g. `Participants (2):`
    pub fn heading(&self) -> String {
        format!("Participants ({}):", self.count())
    }
}

/// Everything a rendered activity card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub roster: Roster,
}

impl ActivityCard {
    pub fn new(name: &str, record: &ActivityRecord) -> Self {
        Self {
            name: name.to_string(),
            description: record.description.clone(),
            schedule: record.schedule.clone(),
            spots_left: record.spots_left(),
            roster: Roster::from_participants(&record.participants),
        }
    }

    /// Availability line, e.g. `3 spots left`
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}
