//! Core domain logic for FacTrack, a faculty activity tracker.
//! This crate is the single source of truth for business invariants.
//!
//! All state lives in a local durable key-value store; collections are
//! hydrated into memory per store instance and rewritten wholesale after
//! every mutation. The design assumes a single uncontended writer (one
//! interactive process, no background tasks touching the same keys);
//! nothing here locks across instances.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::certificate::{Certificate, CertificateCategory};
pub use model::fdp::{EventLevel, FdpRecord};
pub use model::publication::{Publication, PublicationType};
pub use model::user::{Role, UserAccount, UserIdentity, UserProfile};
pub use model::StoredRecord;
pub use repo::record_store::{RecordError, RecordResult, RecordStore, UNKNOWN_OWNER};
pub use service::report_service::{
    activity_summary, publication_distribution, ActivitySummary, ReportScope,
};
pub use service::session_service::{
    AuthError, AuthResult, SessionService, SignUpRequest, MIN_PASSWORD_LEN,
};
pub use store::{
    open_store, open_store_in_memory, DurableStore, SqliteKvStore, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
