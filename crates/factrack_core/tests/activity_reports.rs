use factrack_core::store::open_store_in_memory;
use factrack_core::{
    activity_summary, publication_distribution, Certificate, FdpRecord, Publication,
    PublicationType, RecordStore, ReportScope, SqliteKvStore, StoredRecord,
};

#[test]
fn all_faculty_scope_counts_every_record() {
    let summary = activity_summary(
        &FdpRecord::seed(),
        &Publication::seed(),
        &Certificate::seed(),
        ReportScope::AllFaculty,
    );

    assert_eq!(summary.fdp_count, 2);
    assert_eq!(summary.publication_count, 2);
    assert_eq!(summary.certificate_count, 2);
    assert_eq!(summary.total(), 6);
}

#[test]
fn owner_scope_counts_only_attributed_records() {
    let summary = activity_summary(
        &FdpRecord::seed(),
        &Publication::seed(),
        &Certificate::seed(),
        ReportScope::Owner("Dr. Smith"),
    );

    assert_eq!(summary.fdp_count, 1);
    assert_eq!(summary.publication_count, 1);
    assert_eq!(summary.certificate_count, 1);

    let none = activity_summary(
        &FdpRecord::seed(),
        &Publication::seed(),
        &Certificate::seed(),
        ReportScope::Owner("Dr. Nobody"),
    );
    assert_eq!(none.total(), 0);
}

#[test]
fn publication_distribution_counts_by_kind_and_omits_empty_kinds() {
    let distribution = publication_distribution(&Publication::seed());

    assert_eq!(distribution.get(&PublicationType::Journal), Some(&1));
    assert_eq!(distribution.get(&PublicationType::Book), Some(&1));
    assert_eq!(distribution.get(&PublicationType::ConferencePaper), None);
}

#[test]
fn summary_reflects_hydrated_collections() {
    let store = SqliteKvStore::try_new(open_store_in_memory().unwrap()).unwrap();

    let fdps = RecordStore::<FdpRecord, _>::hydrate(&store).unwrap();
    let publications = RecordStore::<Publication, _>::hydrate(&store).unwrap();
    let certificates = RecordStore::<Certificate, _>::hydrate(&store).unwrap();

    let summary = activity_summary(
        fdps.records(),
        publications.records(),
        certificates.records(),
        ReportScope::AllFaculty,
    );
    assert_eq!(summary.total(), 6);
}
