pub mod forms;
pub mod log;
pub mod notifications;
pub mod payroll;
pub mod ticker;
pub mod tracker;
pub mod view;
