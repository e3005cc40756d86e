use chrono::TimeDelta;
use pmdash::models::team::initials_of;
use pmdash::utils::colors::{GREEN, paint};
use pmdash::utils::date::{month_label, parse_calendar_date, parse_date};
use pmdash::utils::formatting::{money, progress_bar, strip_ansi, visible_width};
use pmdash::utils::table::{Column, Table};
use pmdash::utils::time::{format_elapsed, format_minutes, round_to_minutes};

#[test]
fn money_groups_thousands() {
    assert_eq!(money(0, "$"), "$0");
    assert_eq!(money(999, "$"), "$999");
    assert_eq!(money(23_800, "$"), "$23,800");
    assert_eq!(money(1_234_567, "€"), "€1,234,567");
    assert_eq!(money(-5_000, "$"), "-$5,000");
}

#[test]
fn progress_bar_has_ten_cells() {
    assert_eq!(progress_bar(0), "░░░░░░░░░░   0%");
    assert_eq!(progress_bar(75), "████████░░  75%");
    assert_eq!(progress_bar(100), "██████████ 100%");
}

#[test]
fn ansi_codes_have_no_width() {
    let painted = paint("Completed", GREEN);
    assert_eq!(strip_ansi(&painted), "Completed");
    assert_eq!(visible_width(&painted), 9);
}

#[test]
fn table_columns_align_on_visible_width() {
    let mut table = Table::new(vec![Column::new("ID", 2), Column::new("Status", 6)]);
    table.add_row(vec!["1".to_string(), paint("Completed", GREEN)]);
    table.add_row(vec!["22".to_string(), "Paid".to_string()]);

    let out = strip_ansi(&table.render());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "ID Status    ");
    assert_eq!(lines[1], "------------");
    assert_eq!(lines[2], "1  Completed ");
    assert_eq!(lines[3], "22 Paid      ");
}

#[test]
fn elapsed_and_minutes_formatting() {
    assert_eq!(format_elapsed(TimeDelta::seconds(3_725)), "01:02:05");
    assert_eq!(format_elapsed(TimeDelta::seconds(-3)), "00:00:00");
    assert_eq!(format_minutes(90), "01:30");
    assert_eq!(round_to_minutes(89_999), 1);
    assert_eq!(round_to_minutes(90_000), 2);
}

#[test]
fn date_parsing() {
    assert!(parse_date("2024-05-25").is_some());
    assert!(parse_date("25/05/2024").is_none());
    assert_eq!(
        parse_calendar_date("2024-05-25T10:00:00Z"),
        parse_date("2024-05-25")
    );
    let d = parse_date("2024-03-31").expect("valid");
    assert_eq!(month_label(d), "March 2024");
}

#[test]
fn initials_from_names() {
    assert_eq!(initials_of("john smith"), "JS");
    assert_eq!(initials_of("  Emily   Davis "), "ED");
    assert_eq!(initials_of(""), "");
}
