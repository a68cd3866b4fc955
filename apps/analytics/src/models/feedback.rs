use chrono::NaiveDate;
use serde::Serialize;

/// A single free-text feedback submission from an employee.
#[derive(Debug, Clone, Serialize)]
pub struct Feedback {
    pub employee_id: String,
    pub date: NaiveDate,
    pub text: String,
}
