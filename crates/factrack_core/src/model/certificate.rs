//! Earned certificate records.
//!
//! # Responsibility
//! - Define the persisted shape of one certificate entry.
//! - Provide the demonstration seed set written on first hydrate.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.

use crate::model::StoredRecord;
use serde::{Deserialize, Serialize};

/// Certificate category. Serialized values match the stored schema labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertificateCategory {
    #[serde(rename = "FDP")]
    Fdp,
    Course,
    Workshop,
    Training,
    Other,
}

/// One certificate earned by a faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Stable identifier assigned at creation.
    pub id: String,
    /// Certificate title.
    pub title: String,
    /// Issue date in `YYYY-MM-DD` form.
    pub date: String,
    /// Issuing institution or platform.
    pub issuing_body: String,
    /// Certificate category.
    pub category: CertificateCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Attributed faculty member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_name: Option<String>,
}

impl StoredRecord for Certificate {
    const STORAGE_KEY: &'static str = "certificates";
    const DOMAIN: &'static str = "certificate";

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
            Certificate {
                id: "1".to_string(),
                title: "Advanced Web Development Certificate".to_string(),
                date: "2024-03-15".to_string(),
                issuing_body: "IIT Delhi".to_string(),
                category: CertificateCategory::Fdp,
                description: Some(
                    "Completed 40-hour intensive workshop on modern web development".to_string(),
                ),
                faculty_name: Some("Dr. Smith".to_string()),
            },
            Certificate {
                id: "2".to_string(),
                title: "Python Programming Certification".to_string(),
                date: "2024-02-20".to_string(),
                issuing_body: "Coursera".to_string(),
                category: CertificateCategory::Course,
                description: Some(
                    "Online certification in Python programming and data science".to_string(),
                ),
                faculty_name: Some("Dr. Johnson".to_string()),
            },
        ]
    }
}
