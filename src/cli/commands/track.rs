use crate::cli::parser::ManualArgs;
use crate::core::ticker::elapsed_display;
use crate::core::tracker::{ManualEntry, SystemClock, TimeTracker};
use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use crate::store::EntityStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{iso, parse_date};
use crate::utils::time::{format_elapsed, format_minutes};
use chrono::NaiveDate;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// `log-time`: book a manual entry and print the day's total.
pub fn handle_manual(args: &ManualArgs, today: NaiveDate) -> AppResult<()> {
    let store = EntityStore::seeded(today)?;
    let mut tracker = TimeTracker::new().pinned_to(today);
    log_manual(&mut tracker, &store, args)?;
    Ok(())
}

/// Shared by `log-time` and the shell's `manual`.
pub fn log_manual(
    tracker: &mut TimeTracker,
    store: &EntityStore,
    args: &ManualArgs,
) -> AppResult<Option<TimeEntry>> {
    store.tasks.require(&args.task)?;
    let date = match &args.date {
        Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
        None => store.today(),
    };

    let input = ManualEntry {
        task_id: args.task.clone(),
        hours: args.hours,
        minutes: args.minutes,
        date,
        description: args.description.clone(),
    };

    match tracker.manual_entry(input, store.tasks.as_slice(), store.projects.as_slice()) {
        Some(entry) => {
            print_entry(&entry);
            info(format!(
                "Total for {}: {}",
                iso(date),
                format_minutes(tracker.total_minutes_for_date(date) as i64)
            ));
            Ok(Some(entry))
        }
        None => {
            warning("Nothing logged: enter a non-zero number of hours or minutes.");
            Ok(None)
        }
    }
}

/// `track --task ID --for SECS`: run the timer with a live display, then stop.
pub fn handle_track(task: &str, seconds: u64, today: NaiveDate) -> AppResult<()> {
    let store = EntityStore::seeded(today)?;
    let t = store.tasks.require(task)?;
    let mut tracker = TimeTracker::new().pinned_to(today);

    if !tracker.start(task) {
        warning("Timer already running.");
        return Ok(());
    }
    let started_at = tracker.started_at().unwrap_or_default();
    info(format!("Tracking '{}' for {seconds}s…", t.name));

    let mut ticker = elapsed_display(SystemClock, started_at, |elapsed| {
        print!("\r⏱  {}", format_elapsed(elapsed));
        io::stdout().flush().ok();
    });
    thread::sleep(Duration::from_secs(seconds));
    ticker.disarm();
    println!();

    if let Some(entry) = tracker.stop(store.tasks.as_slice(), store.projects.as_slice()) {
        print_entry(&entry);
    }
    Ok(())
}

pub fn print_entry(e: &TimeEntry) {
    let project = e.project_name.as_deref().unwrap_or("-");
    let kind = if e.is_manual() { "manual" } else { "timer" };
    success(format!(
        "Logged {} on '{}' ({}) for {} [{}]",
        format_minutes(e.duration as i64),
        e.task_name,
        project,
        iso(e.date),
        kind
    ));
    if let Some(desc) = &e.description {
        println!("    {desc}");
    }
}
