use super::criteria::FilterCriteria;
use crate::models::Record;

/// Conjunction of every active criterion.
pub fn matches<R: Record>(record: &R, criteria: &FilterCriteria<R::Status>) -> bool {
    matches_search(record, &criteria.search_text)
        && criteria.status.is_none_or(|s| record.status() == s)
        && criteria
            .priority
            .is_none_or(|p| record.priority() == Some(p))
        && criteria
            .tags
            .iter()
            .all(|t| record.tags().iter().any(|have| have == t))
        && criteria
            .assignee
            .as_deref()
            .is_none_or(|a| record.assignee() == Some(a))
        && criteria
            .month
            .as_deref()
            .is_none_or(|m| record.month() == Some(m))
}

fn matches_search<R: Record>(record: &R, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    record
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records passing `criteria`, in input order. The input is left untouched.
pub fn filter_records<R: Record + Clone>(
    records: &[R],
    criteria: &FilterCriteria<R::Status>,
) -> Vec<R> {
    records
        .iter()
        .filter(|r| matches(*r, criteria))
        .cloned()
        .collect()
}
