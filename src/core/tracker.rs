//! Time Session Tracker.
//!
//! A two-state machine (`Idle`, `Running`) bound to one task at a time, plus
//! manually logged entries. Invalid calls (`start` while running, `stop`
//! while idle, empty task ids, zero-length manual entries) are ignored: they
//! leave the tracker untouched and report `false`/`None` instead of an error.

use crate::models::{Project, Task, TimeEntry};
use crate::store::ids::IdGenerator;
use crate::utils::time::round_to_minutes;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Source of "now" for the tracker.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, by: TimeDelta) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: DateTime<Utc>) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerState {
    Idle,
    Running {
        task_id: String,
        started_at: DateTime<Utc>,
    },
}

/// Input of a manually logged block of time.
#[derive(Debug, Clone)]
pub struct ManualEntry {
    pub task_id: String,
    pub hours: u32,
    pub minutes: u32,
    pub date: NaiveDate,
    pub description: String,
}

pub struct TimeTracker<C: Clock = SystemClock> {
    clock: C,
    state: TrackerState,
    history: Vec<TimeEntry>,
    ids: IdGenerator,
    today: Option<NaiveDate>,
}

impl TimeTracker<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimeTracker<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimeTracker<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: TrackerState::Idle,
            history: Vec::new(),
            ids: IdGenerator::default(),
            today: None,
        }
    }

    /// File stopped sessions under `date` instead of the clock's UTC date.
    pub fn pinned_to(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    /// Day bucket for sessions stopped at `end`.
    fn bucket_for(&self, end: DateTime<Utc>) -> NaiveDate {
        self.today.unwrap_or_else(|| end.date_naive())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TrackerState::Running { .. })
    }

    pub fn active_task(&self) -> Option<&str> {
        match &self.state {
            TrackerState::Running { task_id, .. } => Some(task_id),
            TrackerState::Idle => None,
        }
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            TrackerState::Running { started_at, .. } => Some(*started_at),
            TrackerState::Idle => None,
        }
    }

    /// `Idle → Running(task, now)`. Returns whether the transition happened.
    pub fn start(&mut self, task_id: &str) -> bool {
        if task_id.is_empty() || self.is_running() {
            return false;
        }
        self.state = TrackerState::Running {
            task_id: task_id.to_string(),
            started_at: self.clock.now(),
        };
        true
    }

    /// `Running → Idle`, emitting the finished session as a history entry.
    pub fn stop(&mut self, tasks: &[Task], projects: &[Project]) -> Option<TimeEntry> {
        let TrackerState::Running {
            task_id,
            started_at,
        } = std::mem::replace(&mut self.state, TrackerState::Idle)
        else {
            return None;
        };

        let end = self.clock.now();
        let minutes = round_to_minutes((end - started_at).num_milliseconds()).max(0);
        let (task_name, project_id, project_name) = resolve_names(&task_id, tasks, projects);

        let entry = TimeEntry {
            id: self.ids.next_id(),
            task_id,
            task_name,
            project_id,
            project_name,
            start_time: started_at,
            end_time: Some(end),
            duration: u32::try_from(minutes).unwrap_or(u32::MAX),
            description: None,
            date: self.bucket_for(end),
        };
        self.history.push(entry.clone());
        Some(entry)
    }

    /// Log time without running the timer. Works in either state.
    pub fn manual_entry(
        &mut self,
        input: ManualEntry,
        tasks: &[Task],
        projects: &[Project],
    ) -> Option<TimeEntry> {
        if input.task_id.is_empty() || (input.hours == 0 && input.minutes == 0) {
            return None;
        }

        let (task_name, project_id, project_name) =
            resolve_names(&input.task_id, tasks, projects);
        let description = Some(input.description.trim().to_string()).filter(|d| !d.is_empty());

        let entry = TimeEntry {
            id: self.ids.next_id(),
            task_id: input.task_id,
            task_name,
            project_id,
            project_name,
            start_time: self.clock.now(),
            end_time: None,
            duration: input.hours.saturating_mul(60).saturating_add(input.minutes),
            description,
            date: input.date,
        };
        self.history.push(entry.clone());
        Some(entry)
    }

    /// Time since `start`, read fresh from the clock on every call.
    pub fn elapsed(&self) -> Option<TimeDelta> {
        self.started_at().map(|s| self.clock.now() - s)
    }

    pub fn history(&self) -> &[TimeEntry] {
        &self.history
    }

    pub fn entries_for_date(&self, date: NaiveDate) -> Vec<&TimeEntry> {
        self.history.iter().filter(|e| e.date == date).collect()
    }

    pub fn total_minutes_for_date(&self, date: NaiveDate) -> u64 {
        total_minutes_for_date(&self.history, date)
    }
}

/// Sum of durations of the entries bucketed on `date`.
pub fn total_minutes_for_date(entries: &[TimeEntry], date: NaiveDate) -> u64 {
    entries
        .iter()
        .filter(|e| e.date == date)
        .map(|e| e.duration as u64)
        .sum()
}

/// Task name plus owning project (id, name) for `task_id`. Unknown tasks
/// resolve to an empty name and no project.
fn resolve_names(
    task_id: &str,
    tasks: &[Task],
    projects: &[Project],
) -> (String, Option<String>, Option<String>) {
    let Some(task) = tasks.iter().find(|t| t.id == task_id) else {
        return (String::new(), None, None);
    };
    let project_name = task
        .project_id
        .as_deref()
        .and_then(|pid| projects.iter().find(|p| p.id == pid))
        .map(|p| p.name.clone());
    (task.name.clone(), task.project_id.clone(), project_name)
}
