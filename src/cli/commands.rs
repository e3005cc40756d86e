pub mod config;
pub mod dashboard;
pub mod export;
pub mod init;
pub mod list;
pub mod notifications;
pub mod pay;
pub mod shell;
pub mod track;
