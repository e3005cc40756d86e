//! List views: filter, sort and aggregate in-memory records.
//!
//! All functions are pure derivations. They borrow the source collection and
//! return new vectors; the entity store is never touched from here.

pub mod aggregate;
pub mod criteria;
pub mod filter;
pub mod sort;

pub use aggregate::{DashboardStats, PayrollSummary};
pub use criteria::FilterCriteria;
pub use filter::{filter_records, matches};
pub use sort::{SortKey, sort_records};

use crate::models::Record;

/// Filtered and sorted projection of `records`.
///
/// Filtering keeps input order, then a stable sort on `sort_key` is applied,
/// so equal keys retain their original relative order and applying the same
/// view twice yields the same result.
pub fn apply_view<R: Record + Clone>(
    records: &[R],
    criteria: &FilterCriteria<R::Status>,
    sort_key: SortKey,
) -> Vec<R> {
    let mut view = filter_records(records, criteria);
    sort_records(&mut view, sort_key);
    view
}
