use crate::cli::parser::{
    Commands, PayrollArgs, ProjectsArgs, TasksArgs, TeamArgs, WorkflowsArgs,
};
use crate::config::Config;
use crate::core::view::{PayrollSummary, apply_view, aggregate::workflow_completion};
use crate::errors::AppResult;
use crate::models::{Project, Workflow};
use crate::store::EntityStore;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{
    color_for_payroll, color_for_priority, color_for_step, color_for_work_status,
    color_for_workflow, colorize_due, colorize_optional, paint, GREY,
};
use crate::utils::formatting::{money, progress_bar};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    let store = EntityStore::seeded(today)?;
    match cmd {
        Commands::Projects(args) => show_projects(args, &store, cfg),
        Commands::Tasks(args) => show_tasks(args, &store, cfg),
        Commands::Payroll(args) => show_payroll(args, &store, cfg),
        Commands::Workflows(args) => show_workflows(args, &store, cfg),
        Commands::Team(args) => show_team(args, &store, cfg),
        _ => {}
    }
    Ok(())
}

fn or_dash(value: Option<&str>) -> String {
    colorize_optional(value.unwrap_or("-"))
}

fn nothing_matches(kind: &str) {
    warning(format!("No {kind} match the current filters."));
}

pub fn show_projects(args: &ProjectsArgs, store: &EntityStore, cfg: &Config) {
    let view = apply_view(
        store.projects.as_slice(),
        &args.view.criteria(args.status),
        args.view.sort_key(cfg),
    );

    header(format!("Projects ({} of {})", view.len(), store.projects.len()));
    if view.is_empty() {
        nothing_matches("projects");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 3),
        Column::new("Project", 20),
        Column::new("Status", 11),
        Column::new("Priority", 8),
        Column::new("Due", 10),
        Column::new("Progress", 15),
        Column::new("Client", 12),
        Column::new("Tags", 10),
    ])
    .with_separator(cfg.separator());

    for p in &view {
        table.add_row(vec![
            p.id.clone(),
            p.name.clone(),
            paint(p.status.label(), color_for_work_status(p.status)),
            p.priority
                .map(|x| paint(x.label(), color_for_priority(x)))
                .unwrap_or_else(|| or_dash(None)),
            colorize_due(&p.due_date, p.is_overdue(store.today())),
            progress_bar(p.progress),
            or_dash(p.client_name.as_deref()),
            p.tags.join(", "),
        ]);
    }
    print!("{}", table.render());

    if args.details {
        for p in &view {
            print_project_details(p, cfg);
        }
    }
}

fn print_project_details(p: &Project, cfg: &Config) {
    println!();
    println!("#{} {}", p.id, p.name);
    if let Some(desc) = &p.description {
        let opts = textwrap::Options::new(72)
            .initial_indent("    ")
            .subsequent_indent("    ");
        println!("{}", textwrap::fill(desc, opts));
    }
    if let Some(budget) = p.budget {
        println!("    Budget : {}", money(budget as i64, &cfg.currency_symbol));
    }
    match (p.estimated_hours, p.actual_hours) {
        (Some(est), Some(act)) => println!(
            "    Hours  : {act} / {est} ({:.0}%)",
            p.hours_utilization().unwrap_or(0.0)
        ),
        (Some(est), None) => println!("    Hours  : - / {est}"),
        _ => {}
    }
}

pub fn show_tasks(args: &TasksArgs, store: &EntityStore, cfg: &Config) {
    let view = apply_view(
        store.tasks.as_slice(),
        &args.view.criteria(args.status),
        args.view.sort_key(cfg),
    );

    header(format!("Tasks ({} of {})", view.len(), store.tasks.len()));
    if view.is_empty() {
        nothing_matches("tasks");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 3),
        Column::new("Task", 20),
        Column::new("Assignee", 12),
        Column::new("Status", 11),
        Column::new("Priority", 8),
        Column::new("Due", 10),
        Column::new("Project", 18),
    ])
    .with_separator(cfg.separator());

    for t in &view {
        let project = t
            .project_id
            .as_deref()
            .and_then(|pid| store.projects.get(pid))
            .map(|p| p.name.as_str());
        table.add_row(vec![
            t.id.clone(),
            t.name.clone(),
            t.assignee.clone(),
            paint(t.status.label(), color_for_work_status(t.status)),
            paint(t.priority.label(), color_for_priority(t.priority)),
            t.due_date.clone(),
            or_dash(project),
        ]);
    }
    print!("{}", table.render());
}

pub fn show_payroll(args: &PayrollArgs, store: &EntityStore, cfg: &Config) {
    if args.summary {
        print_payroll_summary(store, cfg);
    }

    let view = apply_view(
        store.payroll.as_slice(),
        &args.view.criteria(args.status),
        args.view.sort_key(cfg),
    );

    header(format!("Payroll ({} of {})", view.len(), store.payroll.len()));
    if view.is_empty() {
        nothing_matches("payroll entries");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 3),
        Column::new("Employee", 14),
        Column::new("Month", 12),
        Column::new("Status", 10),
        Column::new("Amount", 9),
        Column::new("Hours", 6),
        Column::new("OT", 4),
        Column::new("Bonus", 6),
    ])
    .with_separator(cfg.separator());

    for e in &view {
        table.add_row(vec![
            e.id.clone(),
            e.employee_name.clone(),
            e.month.clone(),
            paint(e.status.label(), color_for_payroll(e.status)),
            money(e.amount_or_zero(), &cfg.currency_symbol),
            format!("{}", e.hours_worked.unwrap_or_default()),
            format!("{}", e.overtime_hours.unwrap_or_default()),
            money(e.bonus.unwrap_or_default().round() as i64, &cfg.currency_symbol),
        ]);
    }
    print!("{}", table.render());
}

fn print_payroll_summary(store: &EntityStore, cfg: &Config) {
    let s = PayrollSummary::compute(store.payroll.as_slice(), store.team.as_slice());
    let sym = &cfg.currency_symbol;
    header("Payroll summary");
    println!("Total payroll    : {}", money(s.total_payroll, sym));
    println!("Unpaid           : {}", money(s.unpaid_amount, sym));
    println!("Processing       : {}", s.processing_count);
    println!("Active employees : {}", s.active_employees);
    println!();
}

pub fn show_workflows(args: &WorkflowsArgs, store: &EntityStore, cfg: &Config) {
    let view = apply_view(
        store.workflows.as_slice(),
        &args.view.criteria(args.status),
        args.view.sort_key(cfg),
    );

    header(format!(
        "Workflows ({} of {})",
        view.len(),
        store.workflows.len()
    ));
    if view.is_empty() {
        nothing_matches("workflows");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 3),
        Column::new("Workflow", 24),
        Column::new("Status", 9),
        Column::new("Priority", 8),
        Column::new("Steps", 5),
        Column::new("Due", 10),
    ])
    .with_separator(cfg.separator());

    for w in &view {
        let (done, total) = workflow_completion(w);
        table.add_row(vec![
            w.id.clone(),
            w.name.clone(),
            paint(w.status.label(), color_for_workflow(w.status)),
            w.priority
                .map(|x| paint(x.label(), color_for_priority(x)))
                .unwrap_or_else(|| or_dash(None)),
            format!("{done}/{total}"),
            or_dash(w.due_date.as_deref()),
        ]);
    }
    print!("{}", table.render());

    if args.steps {
        for w in &view {
            print_steps(w, store, cfg);
        }
    }
}

fn print_steps(w: &Workflow, store: &EntityStore, cfg: &Config) {
    println!();
    header(format!("{} · steps", w.name));
    if !w.description.is_empty() {
        println!("{}", paint(&textwrap::fill(&w.description, 72), GREY));
    }

    let mut table = Table::new(vec![
        Column::new("ID", 3),
        Column::new("Step", 22),
        Column::new("Assignee", 12),
        Column::new("Status", 11),
        Column::new("Due", 10),
        Column::new("After", 6),
    ])
    .with_separator(cfg.separator());

    for s in &w.steps {
        let assignee = match store.team.get(&s.assignee_id) {
            Some(m) => m.name.clone(),
            None => or_dash(Some(s.assignee_id.as_str()).filter(|a| !a.is_empty())),
        };
        let mut status = paint(s.status.label(), color_for_step(s.status));
        if let Some(reason) = &s.blocked_reason {
            status.push_str(&format!(" ({reason})"));
        }
        table.add_row(vec![
            s.id.clone(),
            s.name.clone(),
            assignee,
            status,
            s.due_date.clone(),
            s.dependencies.join(","),
        ]);
    }
    print!("{}", table.render());
}

pub fn show_team(args: &TeamArgs, store: &EntityStore, cfg: &Config) {
    let view = apply_view(
        store.team.as_slice(),
        &args.view.criteria(args.status),
        args.view.sort_key(cfg),
    );

    header(format!("Team ({} of {})", view.len(), store.team.len()));
    if view.is_empty() {
        nothing_matches("team members");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 3),
        Column::new("", 2),
        Column::new("Name", 14),
        Column::new("Role", 18),
        Column::new("Department", 11),
        Column::new("Email", 20),
        Column::new("Salary", 8),
        Column::new("Status", 8),
    ])
    .with_separator(cfg.separator());

    for m in &view {
        table.add_row(vec![
            m.id.clone(),
            m.initials.clone(),
            m.name.clone(),
            or_dash(m.role.as_deref()),
            or_dash(m.department.as_deref()),
            m.email.clone(),
            m.salary
                .map(|s| money(s as i64, &cfg.currency_symbol))
                .unwrap_or_else(|| or_dash(None)),
            m.status.label().to_string(),
        ]);
    }
    print!("{}", table.render());
}
