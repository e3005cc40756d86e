use crate::cli::parser::ExportArgs;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::TimeEntry;
use crate::store::EntityStore;
use crate::ui::messages::info;
use crate::utils::path::resolve;
use chrono::NaiveDate;

pub fn handle(args: &ExportArgs, today: NaiveDate) -> AppResult<()> {
    let store = EntityStore::seeded(today)?;
    run(args, &store, &[])
}

/// Shared with the shell, which passes its session history.
pub fn run(args: &ExportArgs, store: &EntityStore, history: &[TimeEntry]) -> AppResult<()> {
    let path = resolve(&args.file);
    let rows = ExportLogic::export(store, history, args.what, args.format, &path, args.force)?;
    info(format!("{rows} rows written ({})", args.format.as_str()));
    Ok(())
}
