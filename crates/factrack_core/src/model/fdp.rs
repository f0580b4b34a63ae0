//! FDP and workshop participation records.
//!
//! # Responsibility
//! - Define the persisted shape of one faculty development program entry.
//! - Provide the demonstration seed set written on first hydrate.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `certificate` holds upload metadata (a file name), never file bytes.

use crate::model::StoredRecord;
use serde::{Deserialize, Serialize};

/// Geographic scope of a program or event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventLevel {
    National,
    International,
}

/// One attended FDP, workshop, or conference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FdpRecord {
    /// Stable identifier assigned at creation.
    pub id: String,
    /// Program title.
    pub title: String,
    /// Free-form program kind (Workshop, Conference, Seminar, ...).
    /// Serialized as `type` to match the stored schema.
    #[serde(rename = "type")]
    pub kind: String,
    /// Program date in `YYYY-MM-DD` form.
    pub date: String,
    /// Hosting institution or location.
    pub venue: String,
    /// National or international scope.
    pub level: EventLevel,
    /// Uploaded certificate file name. Metadata only; file content is
    /// never persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    /// Attributed faculty member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_name: Option<String>,
}

impl StoredRecord for FdpRecord {
    const STORAGE_KEY: &'static str = "fdp_records";
    const DOMAIN: &'static str = "fdp";

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn owner(&self) -> Option<&str> {
        self.faculty_name.as_deref()
    }

    fn set_owner(&mut self, owner: Option<String>) {
        self.faculty_name = owner;
    }

    fn seed() -> Vec<Self> {
        vec![
            FdpRecord {
                id: "1".to_string(),
                title: "Advanced Web Development Workshop".to_string(),
                kind: "Workshop".to_string(),
                date: "2024-03-15".to_string(),
                venue: "IIT Delhi".to_string(),
                level: EventLevel::National,
                certificate: None,
                faculty_name: Some("Dr. Smith".to_string()),
            },
            FdpRecord {
                id: "2".to_string(),
                title: "International Conference on AI".to_string(),
                kind: "Conference".to_string(),
                date: "2024-02-20".to_string(),
                venue: "MIT, USA".to_string(),
                level: EventLevel::International,
                certificate: None,
                faculty_name: Some("Dr. Johnson".to_string()),
            },
        ]
    }
}
