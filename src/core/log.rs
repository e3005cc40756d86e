//! Internal activity log: one line per store mutation.

use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub id: usize,
    pub date: DateTime<Local>,
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "status" => Colour::Yellow,
        "dismiss" => Colour::Red,
        "read" => Colour::Blue,
        "track" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

const MAX_OP_WIDTH: usize = 60;

impl ActivityLog {
    pub fn record(&mut self, operation: &str, target: &str, message: &str) {
        self.entries.push(LogEntry {
            id: self.entries.len() + 1,
            date: Local::now(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self) -> String {
        let rows: Vec<(usize, String, &str, String, &str)> = self
            .entries
            .iter()
            .map(|e| {
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (
                    e.id,
                    e.date.format("%FT%T%:z").to_string(),
                    e.operation.as_str(),
                    op_target,
                    e.message.as_str(),
                )
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = rows
            .iter()
            .map(|(id, _, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(1);

        let mut out = String::new();
        for (id, date, operation, op_target, message) in rows {
            let color = color_for_operation(operation);

            // taglio a 57 + "..." oltre i 60 caratteri visibili
            let visible = if op_target.chars().count() > MAX_OP_WIDTH {
                let mut s: String = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            out.push_str(&format!(
                "{:>id_w$}: {} | {}{} => {}\n",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w
            ));
        }
        out
    }
}
