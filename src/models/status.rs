//! Closed status enumerations, one per record kind.
//!
//! Labels match what the dashboard shows; CLI values are the kebab-case
//! variant names (`not-started`, `in-progress`, ...).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle shared by projects and tasks.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum WorkStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl WorkStatus {
    pub const ALL: [WorkStatus; 3] = [
        WorkStatus::NotStarted,
        WorkStatus::InProgress,
        WorkStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::NotStarted => "Not Started",
            WorkStatus::InProgress => "In Progress",
            WorkStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum PayrollStatus {
    Paid,
    Unpaid,
    Processing,
}

impl PayrollStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PayrollStatus::Paid => "Paid",
            PayrollStatus::Unpaid => "Unpaid",
            PayrollStatus::Processing => "Processing",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Blocked,
}

impl StepStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::InProgress => "in-progress",
            StepStatus::Completed => "completed",
            StepStatus::Blocked => "blocked",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowStatus {
    #[default]
    Active,
    Completed,
    Paused,
    Cancelled,
}

impl WorkflowStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStatus::Active => "active",
            WorkflowStatus::Completed => "completed",
            WorkflowStatus::Paused => "paused",
            WorkflowStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

impl MemberStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Inactive => "Inactive",
        }
    }
}

macro_rules! display_via_label {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(
    WorkStatus,
    PayrollStatus,
    StepStatus,
    WorkflowStatus,
    MemberStatus
);
