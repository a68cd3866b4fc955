use serde::Serialize;

use crate::errors::AppError;

/// HR snapshot of one employee, as consumed by the turnover risk rules.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    /// 0.0 – 1.0
    pub satisfaction_level: f64,
    /// 0.0 – 1.0
    pub last_evaluation: f64,
    pub number_of_projects: u32,
    pub average_monthly_hours: u32,
    /// Whole years with the company.
    pub time_in_company: u32,
    pub recent_promotion: bool,
}

impl Employee {
    /// Rejects ratio fields that are NaN, infinite or outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), AppError> {
        check_unit_interval("satisfaction_level", self.satisfaction_level, &self.id)?;
        check_unit_interval("last_evaluation", self.last_evaluation, &self.id)?;
        Ok(())
    }
}

fn check_unit_interval(field: &str, value: f64, employee_id: &str) -> Result<(), AppError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{field} for employee {employee_id} must be within [0, 1], got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_employee(satisfaction: f64, evaluation: f64) -> Employee {
        Employee {
            id: "E900".to_string(),
            name: "Test Employee".to_string(),
            satisfaction_level: satisfaction,
            last_evaluation: evaluation,
            number_of_projects: 3,
            average_monthly_hours: 160,
            time_in_company: 2,
            recent_promotion: false,
        }
    }

    #[test]
    fn test_boundaries_are_valid() {
        assert!(make_employee(0.0, 1.0).validate().is_ok());
        assert!(make_employee(1.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_satisfaction_rejected() {
        let err = make_employee(1.2, 0.5).validate().unwrap_err();
        assert!(err.to_string().contains("satisfaction_level"));
        assert!(err.to_string().contains("E900"));
    }

    #[test]
    fn test_nan_evaluation_rejected() {
        let err = make_employee(0.5, f64::NAN).validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("last_evaluation"));
    }
}
