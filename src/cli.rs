//! Command-line surface: clap definitions and one handler per command.

pub mod commands;
pub mod parser;
