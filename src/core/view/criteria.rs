use crate::models::Priority;

/// Active filters for one list view.
///
/// Every field defaults to "inactive": an empty search string, `None` for the
/// exact-match fields and an empty tag list all let every record through.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria<S> {
    /// Case-insensitive substring matched against the record's searchable fields.
    pub search_text: String,
    pub status: Option<S>,
    pub priority: Option<Priority>,
    /// The record must carry every one of these tags.
    pub tags: Vec<String>,
    pub assignee: Option<String>,
    pub month: Option<String>,
}

impl<S> Default for FilterCriteria<S> {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            status: None,
            priority: None,
            tags: Vec::new(),
            assignee: None,
            month: None,
        }
    }
}

impl<S> FilterCriteria<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn status(mut self, status: S) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    /// True when no criterion is active.
    pub fn is_default(&self) -> bool {
        self.search_text.is_empty()
            && self.status.is_none()
            && self.priority.is_none()
            && self.tags.is_empty()
            && self.assignee.is_none()
            && self.month.is_none()
    }
}

/// Treats the dashboard's "All" selector value as "no filter".
pub fn unless_all(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.eq_ignore_ascii_case("all") && !v.is_empty())
}
