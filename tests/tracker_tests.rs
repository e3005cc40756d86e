use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};
use pmdash::core::tracker::{ManualClock, ManualEntry, TimeTracker, TrackerState, total_minutes_for_date};
use pmdash::store::seed;

fn tracker() -> TimeTracker<ManualClock> {
    let start = Utc
        .with_ymd_and_hms(2024, 5, 25, 9, 0, 0)
        .single()
        .expect("valid instant");
    TimeTracker::with_clock(ManualClock::new(start))
}

fn manual(task: &str, hours: u32, minutes: u32, date: NaiveDate) -> ManualEntry {
    ManualEntry {
        task_id: task.to_string(),
        hours,
        minutes,
        date,
        description: String::new(),
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, d).expect("valid date")
}

#[test]
fn start_is_exclusive() {
    let mut t = tracker();
    assert!(t.start("1"));
    assert!(!t.start("3"));
    assert_eq!(t.active_task(), Some("1"));
}

#[test]
fn empty_task_and_idle_stop_are_no_ops() {
    let (tasks, projects) = (seed::tasks(), seed::projects());
    let mut t = tracker();

    assert!(!t.start(""));
    assert_eq!(t.state(), &TrackerState::Idle);
    assert!(t.stop(&tasks, &projects).is_none());
    assert!(t.history().is_empty());
}

#[test]
fn stop_records_rounded_minutes_and_names() {
    let (tasks, projects) = (seed::tasks(), seed::projects());
    let mut t = tracker();

    t.start("1");
    t.clock().advance(TimeDelta::seconds(150));
    let entry = t.stop(&tasks, &projects).expect("entry");

    // 2.5 minutes rounds up
    assert_eq!(entry.duration, 3);
    assert_eq!(entry.task_name, "Design mockups");
    assert_eq!(entry.project_name.as_deref(), Some("Website Redesign"));
    assert_eq!(entry.date, day(25));
    assert!(!t.is_running());
    assert_eq!(t.history().len(), 1);

    t.start("3");
    t.clock().advance(TimeDelta::milliseconds(89_999));
    assert_eq!(t.stop(&tasks, &projects).map(|e| e.duration), Some(1));
}

#[test]
fn duration_is_never_negative() {
    let (tasks, projects) = (seed::tasks(), seed::projects());
    let mut t = tracker();

    t.start("1");
    t.clock().advance(TimeDelta::minutes(-10));
    let entry = t.stop(&tasks, &projects).expect("entry");
    assert_eq!(entry.duration, 0);
}

#[test]
fn elapsed_is_read_from_the_clock() {
    let mut t = tracker();
    assert!(t.elapsed().is_none());

    t.start("1");
    t.clock().advance(TimeDelta::seconds(42));
    assert_eq!(t.elapsed(), Some(TimeDelta::seconds(42)));
    t.clock().advance(TimeDelta::seconds(18));
    assert_eq!(t.elapsed(), Some(TimeDelta::minutes(1)));
}

#[test]
fn manual_entry_converts_hours_and_minutes() {
    let (tasks, projects) = (seed::tasks(), seed::projects());
    let mut t = tracker();

    let entry = t
        .manual_entry(manual("1", 1, 30, day(24)), &tasks, &projects)
        .expect("entry");
    assert_eq!(entry.duration, 90);
    assert!(entry.is_manual());
    assert_eq!(entry.date, day(24));
}

#[test]
fn manual_entry_works_while_running() {
    let (tasks, projects) = (seed::tasks(), seed::projects());
    let mut t = tracker();

    t.start("1");
    assert!(t.manual_entry(manual("5", 0, 20, day(25)), &tasks, &projects).is_some());
    assert_eq!(t.active_task(), Some("1"));
}

#[test]
fn zero_or_taskless_manual_entries_are_rejected() {
    let (tasks, projects) = (seed::tasks(), seed::projects());
    let mut t = tracker();

    assert!(t.manual_entry(manual("1", 0, 0, day(25)), &tasks, &projects).is_none());
    assert!(t.manual_entry(manual("", 1, 0, day(25)), &tasks, &projects).is_none());
    assert!(t.history().is_empty());
}

#[test]
fn daily_total_sums_one_bucket() {
    let (tasks, projects) = (seed::tasks(), seed::projects());
    let mut t = tracker();

    t.manual_entry(manual("1", 1, 0, day(24)), &tasks, &projects);
    t.manual_entry(manual("3", 0, 30, day(24)), &tasks, &projects);
    t.manual_entry(manual("3", 2, 0, day(23)), &tasks, &projects);

    assert_eq!(t.total_minutes_for_date(day(24)), 90);
    assert_eq!(total_minutes_for_date(t.history(), day(23)), 120);
    assert_eq!(t.total_minutes_for_date(day(22)), 0);
    assert_eq!(t.entries_for_date(day(24)).len(), 2);
}

#[test]
fn unknown_task_resolves_to_empty_names() {
    let (tasks, projects) = (seed::tasks(), seed::projects());
    let mut t = tracker();

    let entry = t
        .manual_entry(manual("99", 0, 5, day(25)), &tasks, &projects)
        .expect("entry");
    assert_eq!(entry.task_name, "");
    assert!(entry.project_name.is_none());
}

#[test]
fn pinned_tracker_buckets_sessions_on_its_date() {
    let (tasks, projects) = (seed::tasks(), seed::projects());
    let mut t = tracker().pinned_to(day(1));

    assert!(t.start("1"));
    t.clock().advance(TimeDelta::minutes(45));
    let entry = t.stop(&tasks, &projects).expect("session recorded");

    assert_eq!(entry.date, day(1));
    assert_eq!(t.total_minutes_for_date(day(1)), 45);
    assert_eq!(t.total_minutes_for_date(day(25)), 0);
}
