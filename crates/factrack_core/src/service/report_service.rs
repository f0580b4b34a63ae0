//! Activity summary projections for dashboard and reports views.
//!
//! # Responsibility
//! - Compute record counts over hydrated collections, scoped to all
//!   faculty or to one owner.
//!
//! # Invariants
//! - Summaries are pure functions of the supplied collections; nothing
//!   here reads or writes storage.

use crate::model::certificate::Certificate;
use crate::model::fdp::FdpRecord;
use crate::model::publication::{Publication, PublicationType};
use crate::model::StoredRecord;
use std::collections::BTreeMap;

/// Which records a summary covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope<'a> {
    /// Everything, regardless of attribution. Admin dashboards.
    AllFaculty,
    /// Records attributed to one owner. Faculty dashboards.
    Owner(&'a str),
}

/// Per-domain record counts for one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivitySummary {
    pub fdp_count: usize,
    pub publication_count: usize,
    pub certificate_count: usize,
}

impl ActivitySummary {
    /// Total records across all three domains.
    pub fn total(&self) -> usize {
        self.fdp_count + self.publication_count + self.certificate_count
    }
}

/// Counts records per domain within `scope`.
pub fn activity_summary(
    fdp_records: &[FdpRecord],
    publications: &[Publication],
    certificates: &[Certificate],
    scope: ReportScope<'_>,
) -> ActivitySummary {
    ActivitySummary {
        fdp_count: count_in_scope(fdp_records, scope),
        publication_count: count_in_scope(publications, scope),
        certificate_count: count_in_scope(certificates, scope),
    }
}

/// Counts publications by kind, for the reports distribution view.
///
/// Kinds with no publications are omitted.
pub fn publication_distribution(
    publications: &[Publication],
) -> BTreeMap<PublicationType, usize> {
    let mut distribution = BTreeMap::new();
    for publication in publications {
        *distribution.entry(publication.kind).or_insert(0) += 1;
    }
    distribution
}

fn count_in_scope<R: StoredRecord>(records: &[R], scope: ReportScope<'_>) -> usize {
    records
        .iter()
        .filter(|record| match scope {
            ReportScope::AllFaculty => true,
            ReportScope::Owner(owner) => record.owner() == Some(owner),
        })
        .count()
}
