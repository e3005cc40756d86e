//! Payroll amount: hourly rate derived from the monthly salary, overtime at a
//! premium, plus a flat bonus. Amounts are whole currency units.

use serde::Serialize;

/// Parameters turning a monthly salary into pay for hours worked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayPolicy {
    pub monthly_hours: f64,
    pub overtime_multiplier: f64,
}

impl PayPolicy {
    pub const STANDARD_MONTHLY_HOURS: f64 = 160.0;
    pub const OVERTIME_MULTIPLIER: f64 = 1.5;

    pub fn hourly_rate(&self, base_salary: f64) -> f64 {
        base_salary / self.monthly_hours
    }

    pub fn breakdown(
        &self,
        base_salary: f64,
        hours_worked: f64,
        overtime_hours: f64,
        bonus: f64,
    ) -> PayBreakdown {
        let hourly_rate = self.hourly_rate(base_salary);
        let base_pay = hourly_rate * hours_worked;
        let overtime_pay = hourly_rate * self.overtime_multiplier * overtime_hours;
        PayBreakdown {
            hourly_rate,
            base_pay,
            overtime_pay,
            bonus,
            amount: (base_pay + overtime_pay + bonus).round() as i64,
        }
    }
}

impl Default for PayPolicy {
    fn default() -> Self {
        Self {
            monthly_hours: Self::STANDARD_MONTHLY_HOURS,
            overtime_multiplier: Self::OVERTIME_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayBreakdown {
    pub hourly_rate: f64,
    pub base_pay: f64,
    pub overtime_pay: f64,
    pub bonus: f64,
    /// Rounded to the nearest whole unit.
    pub amount: i64,
}

/// `round(rate*hours + rate*1.5*overtime + bonus)` with `rate = base/160`.
pub fn compute_amount(base_salary: f64, hours_worked: f64, overtime_hours: f64, bonus: f64) -> i64 {
    PayPolicy::default()
        .breakdown(base_salary, hours_worked, overtime_hours, bonus)
        .amount
}
