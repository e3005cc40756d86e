use super::priority::Priority;

/// Anything stored in an [`EntityStore`](crate::store::EntityStore) collection.
pub trait Identified {
    /// Human label used in errors and log lines ("project", "task", ...).
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// A record the view engine can filter, sort and aggregate.
///
/// Every accessor beyond `name`/`status`/`searchable_fields` defaults to
/// "not carried by this kind". An active criterion rejects a record that
/// lacks the field; for sorting a missing value compares equal.
pub trait Record: Identified {
    type Status: Copy + PartialEq;

    fn name(&self) -> &str;

    fn status(&self) -> Self::Status;

    /// Fields matched by the free-text search. The name is always first.
    fn searchable_fields(&self) -> Vec<&str>;

    fn priority(&self) -> Option<Priority> {
        None
    }

    fn tags(&self) -> &[String] {
        &[]
    }

    fn assignee(&self) -> Option<&str> {
        None
    }

    fn month(&self) -> Option<&str> {
        None
    }

    /// Raw due date as entered (`YYYY-MM-DD`); parsing happens at sort time.
    fn due_date(&self) -> Option<&str> {
        None
    }

    fn progress(&self) -> Option<u8> {
        None
    }
}
