pub mod notification;
pub mod payroll;
pub mod priority;
pub mod project;
pub mod record;
pub mod status;
pub mod task;
pub mod team;
pub mod time_entry;
pub mod workflow;

pub use notification::{Notification, NotificationKind};
pub use payroll::PayrollEntry;
pub use priority::Priority;
pub use project::{Project, ProjectTemplate};
pub use record::{Identified, Record};
pub use status::{MemberStatus, PayrollStatus, StepStatus, WorkStatus, WorkflowStatus};
pub use task::{Task, TaskBlueprint};
pub use team::TeamMember;
pub use time_entry::TimeEntry;
pub use workflow::{Workflow, WorkflowStep};
