//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `factrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use factrack_core::{
    activity_summary, open_store, open_store_in_memory, Certificate, FdpRecord, Publication,
    RecordStore, ReportScope, SqliteKvStore,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("factrack: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let conn = match std::env::args().nth(1) {
        Some(path) => open_store(path)?,
        None => open_store_in_memory()?,
    };
    let store = SqliteKvStore::try_new(conn)?;

    let fdps = RecordStore::<FdpRecord, _>::hydrate(&store)?;
    let publications = RecordStore::<Publication, _>::hydrate(&store)?;
    let certificates = RecordStore::<Certificate, _>::hydrate(&store)?;

    let summary = activity_summary(
        fdps.records(),
        publications.records(),
        certificates.records(),
        ReportScope::AllFaculty,
    );

    println!("factrack_core version={}", factrack_core::core_version());
    println!(
        "fdp_records={} publications={} certificates={} total={}",
        summary.fdp_count,
        summary.publication_count,
        summary.certificate_count,
        summary.total()
    );

    Ok(())
}
