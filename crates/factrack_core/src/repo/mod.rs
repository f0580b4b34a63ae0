//! Record persistence layer.
//!
//! # Responsibility
//! - Own one in-memory collection per activity domain.
//! - Keep durable storage consistent with memory after every mutation.
//!
//! # Invariants
//! - The persisted collection always reflects the last successful
//!   mutation; partial writes are never visible.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   storage transport errors.

pub mod record_store;
