//! Domain models for faculty activity records and accounts.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Declare the shared record contract implemented by each activity
//!   domain.
//!
//! # Invariants
//! - Every record is identified by a stable string `id`.
//! - Serialized field names are the wire format; renaming a field is a
//!   breaking storage change.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod certificate;
pub mod fdp;
pub mod ident;
pub mod publication;
pub mod user;

/// Contract implemented by each persisted activity record shape.
///
/// The generic record store is parameterized over this trait: one
/// implementation per domain supplies the storage key, identifier and
/// owner accessors, and the seed set written on first hydrate.
pub trait StoredRecord: Clone + Serialize + DeserializeOwned {
    /// Key under which the domain collection is persisted.
    const STORAGE_KEY: &'static str;
    /// Short domain label used in diagnostic events.
    const DOMAIN: &'static str;

    /// Stable record identifier.
    fn id(&self) -> &str;
    /// Assigns the identifier. Called exactly once, at creation.
    fn assign_id(&mut self, id: String);
    /// Owner display name, when attributed.
    fn owner(&self) -> Option<&str>;
    /// Replaces the owner attribution.
    fn set_owner(&mut self, owner: Option<String>);
    /// Default records written when no prior collection exists.
    fn seed() -> Vec<Self>;
}
