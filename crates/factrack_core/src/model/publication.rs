//! Publication and book records.
//!
//! # Responsibility
//! - Define the persisted shape of one publication entry.
//! - Provide the demonstration seed set written on first hydrate.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - Identifier fields (`doi`, `isbn`) are optional and depend on the
//!   publication kind; the store does not cross-validate them.

use crate::model::StoredRecord;
use serde::{Deserialize, Serialize};

/// Publication kind. Serialized values match the stored schema labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PublicationType {
    Journal,
    Book,
    #[serde(rename = "Conference Paper")]
    ConferencePaper,
    #[serde(rename = "Book Chapter")]
    BookChapter,
}

/// One published journal article, book, paper, or chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    /// Stable identifier assigned at creation.
    pub id: String,
    /// Publication title.
    pub title: String,
    /// Serialized as `type` to match the stored schema.
    #[serde(rename = "type")]
    pub kind: PublicationType,
    /// Author list as entered, comma separated.
    pub authors: String,
    /// Publication year as entered.
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Attributed faculty member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_name: Option<String>,
}

impl StoredRecord for Publication {
    const STORAGE_KEY: &'static str = "publications";
    const DOMAIN: &'static str = "publication";

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
            Publication {
                id: "1".to_string(),
                title: "Machine Learning in Education: A Comprehensive Review".to_string(),
                kind: PublicationType::Journal,
                authors: "Dr. Smith, Dr. Johnson, Dr. Brown".to_string(),
                year: "2024".to_string(),
                doi: Some("10.1234/example.2024.001".to_string()),
                isbn: None,
                journal: Some("Journal of Educational Technology".to_string()),
                publisher: None,
                faculty_name: Some("Dr. Smith".to_string()),
            },
            Publication {
                id: "2".to_string(),
                title: "Advanced Web Development Techniques".to_string(),
                kind: PublicationType::Book,
                authors: "Dr. Johnson".to_string(),
                year: "2023".to_string(),
                doi: None,
                isbn: Some("978-0123456789".to_string()),
                journal: None,
                publisher: Some("Tech Publications".to_string()),
                faculty_name: Some("Dr. Johnson".to_string()),
            },
        ]
    }
}
