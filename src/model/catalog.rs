//! Activity catalog types
//!
//! The catalog is a JSON object keyed by activity name. Key order is the
//! display order, so the catalog keeps entries in the order the server sent
//! them instead of collecting into a hash map.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One activity as returned by `GET /activities`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails, in signup order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn new(description: impl Into<String>, schedule: impl Into<String>, max_participants: u32) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style participant append
    pub fn participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }

    /// Remaining capacity. Negative when the server has over-subscribed the
    /// activity; the value is reported as-is.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Ordered mapping of activity name to record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<(String, ActivityRecord)>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an activity. A name that is already present keeps its original
    /// position and takes the new record.
    pub fn insert(&mut self, name: impl Into<String>, record: ActivityRecord) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = record,
            None => self.entries.push((name, record)),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, record: ActivityRecord) -> Self {
        self.insert(name, record);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ActivityRecord> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, record)| record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entries in server order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivityRecord)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activity details")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut catalog = ActivityCatalog {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((name, record)) = access.next_entry::<String, ActivityRecord>()? {
                    catalog.insert(name, record);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|(name, record)| (name, record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"{
        "Programming Class": {
            "description": "Learn programming fundamentals",
            "schedule": "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            "max_participants": 20,
            "participants": ["emma@mergington.edu", "sophia@mergington.edu"]
        },
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": []
        },
        "Art Studio": {
            "description": "Painting and drawing",
            "schedule": "Mondays, 4:00 PM - 5:30 PM",
            "max_participants": 15,
            "participants": ["amelia@mergington.edu"]
        }
    }"#;

    #[test]
    fn test_decode_preserves_server_order() {
        let catalog: ActivityCatalog = serde_json::from_str(CATALOG_JSON).unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Studio"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_decode_record_fields() {
        let catalog: ActivityCatalog = serde_json::from_str(CATALOG_JSON).unwrap();
        let chess = catalog.get("Chess Club").unwrap();
        assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(chess.max_participants, 12);
        assert!(chess.participants.is_empty());
    }

    #[test]
    fn test_missing_participants_defaults_to_empty() {
        let json = r#"{"Drama": {"description": "d", "schedule": "s", "max_participants": 3}}"#;
        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();
        assert!(catalog.get("Drama").unwrap().participants.is_empty());
    }

    #[test]
    fn test_duplicate_name_keeps_first_position() {
        let json = r#"{
            "A": {"description": "first", "schedule": "s", "max_participants": 1},
            "B": {"description": "b", "schedule": "s", "max_participants": 1},
            "A": {"description": "second", "schedule": "s", "max_participants": 1}
        }"#;
        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(catalog.get("A").unwrap().description, "second");
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(serde_json::from_str::<ActivityCatalog>("[]").is_err());
        assert!(serde_json::from_str::<ActivityCatalog>(r#"{"A": 1}"#).is_err());
    }

    #[test]
    fn test_spots_left() {
        let record = ActivityRecord::new("d", "s", 2)
            .participant("a@x.com")
            .participant("b@x.com")
            .participant("c@x.com");
        assert_eq!(record.spots_left(), -1);

        let record = ActivityRecord::new("d", "s", 10).participant("a@x.com");
        assert_eq!(record.spots_left(), 9);
    }

    #[test]
    fn test_serialize_keeps_order() {
        let catalog = ActivityCatalog::new()
            .with("Zeta", ActivityRecord::new("z", "s", 1))
            .with("Alpha", ActivityRecord::new("a", "s", 1));
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.find("Zeta").unwrap() < json.find("Alpha").unwrap());
    }
}
