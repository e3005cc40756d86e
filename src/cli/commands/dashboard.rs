use crate::config::Config;
use crate::core::view::DashboardStats;
use crate::core::view::aggregate::upcoming_deadlines;
use crate::errors::AppResult;
use crate::models::WorkStatus;
use crate::store::EntityStore;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_priority, color_for_work_status, colorize_due, paint};
use crate::utils::date::parse_calendar_date;
use crate::utils::formatting::{bold, pad_right, progress_bar};
use chrono::NaiveDate;

pub fn handle(cfg: &Config, today: NaiveDate) -> AppResult<()> {
    let store = EntityStore::seeded(today)?;
    show(&store, cfg);
    Ok(())
}

pub fn show(store: &EntityStore, cfg: &Config) {
    let today = store.today();
    let stats = DashboardStats::compute(
        store.projects.as_slice(),
        store.tasks.as_slice(),
        store.team.as_slice(),
        today,
    );

    header(format!("Dashboard · {}", today.format("%Y-%m-%d")));
    println!("Projects          : {}", bold(&stats.total_projects.to_string()));
    println!("Tasks             : {}", bold(&stats.total_tasks.to_string()));
    println!("Team members      : {}", bold(&stats.team_members.to_string()));
    println!("Overdue projects  : {}", bold(&stats.overdue_projects.to_string()));
    println!("Average progress  : {}%", stats.average_progress);
    println!(
        "Unread notices    : {}",
        store.notifications.unread_count()
    );

    println!();
    header("Task status");
    let max = stats.task_status.iter().map(|(_, n)| *n).max().unwrap_or(0);
    for (status, count) in &stats.task_status {
        let bar = "■".repeat(*count);
        let width = max.max(1);
        println!(
            "{} {} {}",
            pad_right(status.label(), 12),
            pad_right(&paint(&bar, color_for_work_status(*status)), width),
            count
        );
    }

    println!();
    header("Project progress");
    for p in store.projects.iter() {
        println!("{} {}", pad_right(&p.name, 24), progress_bar(p.progress));
    }

    println!();
    header("Upcoming deadlines");
    for t in upcoming_deadlines(store.tasks.as_slice(), cfg.upcoming_deadlines) {
        let overdue = parse_calendar_date(&t.due_date).is_some_and(|d| d < today)
            && t.status != WorkStatus::Completed;
        println!(
            "{}  {} {} ({})",
            colorize_due(&t.due_date, overdue),
            pad_right(&t.name, 22),
            paint(t.priority.label(), color_for_priority(t.priority)),
            t.assignee
        );
    }
}
