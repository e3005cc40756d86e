// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{
    MemberExport, PayrollExport, ProjectExport, StepExport, TaskExport, TimeEntryExport,
};
use crate::export::{ExportFormat, ExportKind};
use crate::models::TimeEntry;
use crate::store::EntityStore;
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write one collection to `path`. Returns the number of rows written.
    ///
    /// Time entries only exist inside a `shell` session, so callers outside
    /// it pass an empty `history`.
    pub fn export(
        store: &EntityStore,
        history: &[TimeEntry],
        kind: ExportKind,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(path, force)?;

        match kind {
            ExportKind::Projects => {
                let rows: Vec<ProjectExport> = store.projects.iter().map(Into::into).collect();
                write(&rows, format, path)
            }
            ExportKind::Tasks => {
                let rows: Vec<TaskExport> = store.tasks.iter().map(Into::into).collect();
                write(&rows, format, path)
            }
            ExportKind::Payroll => {
                let rows: Vec<PayrollExport> = store.payroll.iter().map(Into::into).collect();
                write(&rows, format, path)
            }
            ExportKind::Team => {
                let rows: Vec<MemberExport> = store.team.iter().map(Into::into).collect();
                write(&rows, format, path)
            }
            ExportKind::Steps => {
                let rows: Vec<StepExport> = store
                    .workflows
                    .iter()
                    .flat_map(|w| w.steps.iter().map(move |s| StepExport::new(w, s)))
                    .collect();
                write(&rows, format, path)
            }
            ExportKind::TimeEntries => {
                let rows: Vec<TimeEntryExport> = history.iter().map(Into::into).collect();
                write(&rows, format, path)
            }
        }
    }
}

fn write<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<usize> {
    if rows.is_empty() {
        warning("Nothing to export: the collection is empty.");
    }
    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }
    Ok(rows.len())
}
