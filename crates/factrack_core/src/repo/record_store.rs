//! Generic typed record store over durable key-value storage.
//!
//! # Responsibility
//! - Hydrate one domain collection from its storage key, seeding defaults
//!   when the key is absent or unreadable.
//! - Apply create/update/delete with owner defaulting and persist the
//!   whole collection after every mutation.
//!
//! # Invariants
//! - Record identifiers are unique within a collection and assigned
//!   exactly once, at creation.
//! - Insertion order is preserved across edit and delete.
//! - An unreadable stored collection is recovered by reseeding, never
//!   surfaced to the caller as fatal.

use crate::model::{ident, StoredRecord};
use crate::model::user::Role;
use crate::store::{DurableStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Owner attribution used when a privileged caller supplies none.
pub const UNKNOWN_OWNER: &str = "Unknown";

pub type RecordResult<T> = Result<T, RecordError>;

/// Record store error for persistence and mutation operations.
#[derive(Debug)]
pub enum RecordError {
    /// Mutation target does not exist in the collection.
    NotFound(String),
    /// Durable storage transport failure.
    Store(StoreError),
    /// Collection could not be encoded for persistence.
    Encode(serde_json::Error),
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode collection: {err}"),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StoreError> for RecordError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Typed store owning one domain's collection.
///
/// Instantiated once per domain (FDP records, publications, certificates)
/// with the record shape supplying key, seed set, and owner plumbing.
pub struct RecordStore<'s, R, S> {
    store: &'s S,
    records: Vec<R>,
}

impl<'s, R: StoredRecord, S: DurableStore> RecordStore<'s, R, S> {
    /// Loads the domain collection from durable storage.
    ///
    /// An absent key initializes the collection to the domain seed set and
    /// persists it immediately. A present but unreadable value is logged
    /// and then treated exactly as absent: corruption is equivalent to
    /// absence, and the accepted recovery is reseeding to defaults.
    pub fn hydrate(store: &'s S) -> RecordResult<Self> {
        let records = match store.get(R::STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<R>>(&raw) {
                Ok(records) => records,
                Err(err) => {
                    warn!(
                        "event=hydrate module=repo domain={} status=corrupt key={} error={err}",
                        R::DOMAIN,
                        R::STORAGE_KEY
                    );
                    Self::seed_into(store)?
                }
            },
            None => Self::seed_into(store)?,
        };

        Ok(Self { store, records })
    }

    /// Returns the hydrated collection in insertion order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns one record by identifier.
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Creates a record from `draft`, assigning a fresh identifier and
    /// applying owner defaulting, then appends and persists.
    ///
    /// Faculty callers always own what they create: any owner carried by
    /// the draft is overwritten with `actor`. Admin callers keep the
    /// draft's owner, with blank or missing attribution falling back to
    /// [`UNKNOWN_OWNER`].
    pub fn create(&mut self, draft: R, role: Role, actor: &str) -> RecordResult<R> {
        let mut record = draft;
        record.assign_id(ident::next_record_id());

        let owner = match role {
            Role::Faculty => actor.to_string(),
            Role::Admin => record
                .owner()
                .filter(|supplied| !supplied.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| UNKNOWN_OWNER.to_string()),
        };
        record.set_owner(Some(owner));

        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Replaces all fields except `id` of the record with that identifier.
    ///
    /// Returns [`RecordError::NotFound`] and leaves the collection
    /// untouched when the identifier is absent. The record keeps its
    /// position in the collection.
    pub fn update(&mut self, id: &str, fields: R) -> RecordResult<()> {
        let position = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| RecordError::NotFound(id.to_string()))?;

        let mut replacement = fields;
        replacement.assign_id(id.to_string());
        self.records[position] = replacement;
        self.persist()
    }

    /// Removes the record with `id`. Absent identifiers are a no-op, not
    /// an error; the collection is persisted either way.
    pub fn delete(&mut self, id: &str) -> RecordResult<()> {
        self.records.retain(|record| record.id() != id);
        self.persist()
    }

    fn seed_into(store: &S) -> RecordResult<Vec<R>> {
        let seeded = R::seed();
        let encoded = serde_json::to_string(&seeded)?;
        store.set(R::STORAGE_KEY, &encoded)?;
        info!(
            "event=hydrate module=repo domain={} status=seeded count={}",
            R::DOMAIN,
            seeded.len()
        );
        Ok(seeded)
    }

    fn persist(&self) -> RecordResult<()> {
        let encoded = serde_json::to_string(&self.records)?;
        self.store.set(R::STORAGE_KEY, &encoded)?;
        Ok(())
    }
}
