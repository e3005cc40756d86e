use crate::cli::parser::PayArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::EntityStore;
use crate::ui::messages::header;
use crate::utils::formatting::{bold, money};
use chrono::NaiveDate;

/// Payroll breakdown for a team member's salary or a raw salary.
pub fn handle(args: &PayArgs, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    let (who, salary) = match &args.employee {
        Some(id) => {
            let store = EntityStore::seeded(today)?;
            let m = store.team.require(id)?;
            (m.name.clone(), m.salary.unwrap_or(0))
        }
        None => ("custom salary".to_string(), args.salary.unwrap_or(0)),
    };

    let policy = cfg.pay_policy();
    let pay = policy.breakdown(salary as f64, args.hours, args.overtime, args.bonus);
    let sym = &cfg.currency_symbol;

    header(format!("Pay for {who}"));
    println!("Base salary   : {}", money(salary as i64, sym));
    println!(
        "Hourly rate   : {sym}{:.3}  (salary / {} h)",
        pay.hourly_rate, policy.monthly_hours
    );
    println!("Base pay      : {sym}{:.2}  ({} h)", pay.base_pay, args.hours);
    println!(
        "Overtime pay  : {sym}{:.3}  ({} h × {})",
        pay.overtime_pay, args.overtime, policy.overtime_multiplier
    );
    println!("Bonus         : {sym}{:.2}", pay.bonus);
    println!("Amount        : {}", bold(&money(pay.amount, sym)));
    Ok(())
}
