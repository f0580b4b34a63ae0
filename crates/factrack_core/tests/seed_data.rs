//! Wire-format and seed-set checks.
//!
//! Stored JSON is the compatibility surface: collections written by one
//! build must hydrate in the next. These tests pin the serialized field
//! names and enum labels against the documented key layout.

use factrack_core::{
    Certificate, CertificateCategory, EventLevel, FdpRecord, Publication, PublicationType, Role,
    StoredRecord, UserAccount,
};
use serde_json::Value;

#[test]
fn storage_keys_match_documented_layout() {
    assert_eq!(FdpRecord::STORAGE_KEY, "fdp_records");
    assert_eq!(Publication::STORAGE_KEY, "publications");
    assert_eq!(Certificate::STORAGE_KEY, "certificates");
}

#[test]
fn fdp_seed_matches_documented_defaults_and_wire_names() {
    let seed = FdpRecord::seed();
    assert_eq!(seed.len(), 2);
    assert_eq!(seed[0].id, "1");
    assert_eq!(seed[0].title, "Advanced Web Development Workshop");
    assert_eq!(seed[1].level, EventLevel::International);

    let value = serde_json::to_value(&seed).unwrap();
    assert_eq!(value[0]["type"], "Workshop");
    assert_eq!(value[0]["facultyName"], "Dr. Smith");
    assert_eq!(value[1]["level"], "International");
    // Absent optionals are omitted, not serialized as null.
    assert!(value[0].get("certificate").is_none());
}

#[test]
fn publication_seed_matches_documented_defaults_and_wire_names() {
    let seed = Publication::seed();
    assert_eq!(seed.len(), 2);
    assert_eq!(seed[0].kind, PublicationType::Journal);
    assert_eq!(seed[1].isbn.as_deref(), Some("978-0123456789"));

    let value = serde_json::to_value(&seed).unwrap();
    assert_eq!(value[0]["type"], "Journal");
    assert_eq!(value[0]["doi"], "10.1234/example.2024.001");
    assert_eq!(value[1]["publisher"], "Tech Publications");
    assert!(value[0].get("isbn").is_none());
}

#[test]
fn multi_word_publication_types_keep_their_labels() {
    let conference = serde_json::to_value(PublicationType::ConferencePaper).unwrap();
    assert_eq!(conference, Value::String("Conference Paper".to_string()));

    let chapter = serde_json::to_value(PublicationType::BookChapter).unwrap();
    assert_eq!(chapter, Value::String("Book Chapter".to_string()));

    let parsed: PublicationType = serde_json::from_str(r#""Conference Paper""#).unwrap();
    assert_eq!(parsed, PublicationType::ConferencePaper);
}

#[test]
fn certificate_seed_matches_documented_defaults_and_wire_names() {
    let seed = Certificate::seed();
    assert_eq!(seed.len(), 2);
    assert_eq!(seed[0].category, CertificateCategory::Fdp);
    assert_eq!(seed[1].issuing_body, "Coursera");

    let value = serde_json::to_value(&seed).unwrap();
    assert_eq!(value[0]["category"], "FDP");
    assert_eq!(value[0]["issuingBody"], "IIT Delhi");
    assert_eq!(value[1]["category"], "Course");
}

#[test]
fn roles_serialize_lowercase() {
    assert_eq!(serde_json::to_value(Role::Faculty).unwrap(), "faculty");
    assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "admin");
}

#[test]
fn account_without_department_omits_the_field() {
    let account = UserAccount {
        id: "7".to_string(),
        email: "solo@univ.edu".to_string(),
        password: "pw".to_string(),
        name: "Solo".to_string(),
        role: Role::Admin,
        department: None,
    };

    let value = serde_json::to_value(&account).unwrap();
    assert!(value.get("department").is_none());

    let parsed: UserAccount = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, account);
}
