use super::record::Identified;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Overdue,
    DueSoon,
    Completed,
    Assigned,
    Mentioned,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Overdue => "overdue",
            NotificationKind::DueSoon => "due-soon",
            NotificationKind::Completed => "completed",
            NotificationKind::Assigned => "assigned",
            NotificationKind::Mentioned => "mentioned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_date: DateTime<Utc>,
    pub user_id: Option<String>,
    /// Project, task or workflow the notification refers to.
    pub related_id: Option<String>,
}

impl Identified for Notification {
    const KIND: &'static str = "notification";

    fn id(&self) -> &str {
        &self.id
    }
}
