use super::record::{Identified, Record};
use super::status::PayrollStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollEntry {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    /// Month label, e.g. "March 2024".
    pub month: String,
    pub status: PayrollStatus,
    pub amount: Option<i64>,
    pub due_date: Option<String>,
    pub hours_worked: Option<f64>,
    pub overtime_hours: Option<f64>,
    pub bonus: Option<f64>,
}

impl PayrollEntry {
    pub fn amount_or_zero(&self) -> i64 {
        self.amount.unwrap_or(0)
    }
}

impl Identified for PayrollEntry {
    const KIND: &'static str = "payroll entry";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for PayrollEntry {
    type Status = PayrollStatus;

    fn name(&self) -> &str {
        &self.employee_name
    }

    fn status(&self) -> PayrollStatus {
        self.status
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.employee_name.as_str()]
    }

    fn month(&self) -> Option<&str> {
        Some(&self.month)
    }

    fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }
}
