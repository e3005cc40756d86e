use crate::core::notifications::NotificationFeed;
use crate::errors::AppResult;
use crate::models::{Notification, NotificationKind};
use crate::store::EntityStore;
use crate::ui::messages::{header, info};
use crate::utils::colors::{BLUE, GREEN, GREY, MAGENTA, RED, YELLOW, paint};
use crate::utils::formatting::bold;
use chrono::NaiveDate;

pub fn handle(unread_only: bool, today: NaiveDate) -> AppResult<()> {
    let store = EntityStore::seeded(today)?;
    show(&store.notifications, unread_only);
    Ok(())
}

fn color_for_kind(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Overdue => RED,
        NotificationKind::DueSoon => YELLOW,
        NotificationKind::Completed => GREEN,
        NotificationKind::Assigned => BLUE,
        NotificationKind::Mentioned => MAGENTA,
    }
}

pub fn show(feed: &NotificationFeed, unread_only: bool) {
    header(format!("Notifications ({} unread)", feed.unread_count()));

    let items: Vec<&Notification> = if unread_only {
        feed.unread().collect()
    } else {
        feed.items().iter().collect()
    };
    if items.is_empty() {
        info("No notifications.");
        return;
    }

    let opts = textwrap::Options::new(72)
        .initial_indent("      ")
        .subsequent_indent("      ");
    for n in items {
        let marker = if n.read { " " } else { "●" };
        let title = if n.read { n.title.clone() } else { bold(&n.title) };
        println!(
            "{marker} {:>2} {} {}  {}",
            n.id,
            paint(&format!("[{}]", n.kind.label()), color_for_kind(n.kind)),
            title,
            paint(&n.created_date.format("%Y-%m-%d %H:%M").to_string(), GREY)
        );
        println!("{}", textwrap::fill(&n.message, &opts));
    }
}
