//! Turnover risk — additive rule-based scoring of an employee snapshot.
//!
//! Every rule is evaluated independently and contributes fixed points when it fires.
//! The five weights sum to 100, so the score never leaves `[0, 100]`.

use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::employee::Employee;

pub const LOW_SATISFACTION_BELOW: f64 = 0.4;
pub const EXCESSIVE_HOURS_ABOVE: u32 = 250;
pub const STAGNATION_TENURE_YEARS: u32 = 4;
pub const PROJECT_OVERLOAD_ABOVE: u32 = 5;
pub const LOW_EVALUATION_BELOW: f64 = 0.6;
pub const HIGH_EFFORT_HOURS_ABOVE: u32 = 200;

pub const HIGH_RISK_THRESHOLD: u32 = 60;
pub const MEDIUM_RISK_THRESHOLD: u32 = 40;

/// One turnover rule. Declaration order is evaluation and reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    LowSatisfaction,
    ExcessiveHours,
    NoRecentAdvancement,
    ProjectOverload,
    LowPerformanceHighEffort,
}

impl RiskFactor {
    pub const ALL: [RiskFactor; 5] = [
        RiskFactor::LowSatisfaction,
        RiskFactor::ExcessiveHours,
        RiskFactor::NoRecentAdvancement,
        RiskFactor::ProjectOverload,
        RiskFactor::LowPerformanceHighEffort,
    ];

    pub fn points(&self) -> u32 {
        match self {
            RiskFactor::LowSatisfaction => 30,
            RiskFactor::ExcessiveHours => 25,
            RiskFactor::NoRecentAdvancement => 20,
            RiskFactor::ProjectOverload => 15,
            RiskFactor::LowPerformanceHighEffort => 10,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskFactor::LowSatisfaction => "Low job satisfaction",
            RiskFactor::ExcessiveHours => "Excessive working hours",
            RiskFactor::NoRecentAdvancement => "No recent career advancement",
            RiskFactor::ProjectOverload => "Overloaded with projects",
            RiskFactor::LowPerformanceHighEffort => "Low performance despite high effort",
        }
    }

    fn applies_to(&self, e: &Employee) -> bool {
        match self {
            RiskFactor::LowSatisfaction => e.satisfaction_level < LOW_SATISFACTION_BELOW,
            RiskFactor::ExcessiveHours => e.average_monthly_hours > EXCESSIVE_HOURS_ABOVE,
            RiskFactor::NoRecentAdvancement => {
                e.time_in_company >= STAGNATION_TENURE_YEARS && !e.recent_promotion
            }
            RiskFactor::ProjectOverload => e.number_of_projects > PROJECT_OVERLOAD_ABOVE,
            RiskFactor::LowPerformanceHighEffort => {
                e.last_evaluation < LOW_EVALUATION_BELOW
                    && e.average_monthly_hours > HIGH_EFFORT_HOURS_ABOVE
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            RiskLevel::High => "🔴 HIGH",
            RiskLevel::Medium => "🟠 MEDIUM",
            RiskLevel::Low => "🟢 LOW",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<RiskFactor>,
}

impl RiskAssessment {
    pub fn factor_descriptions(&self) -> Vec<&'static str> {
        self.risk_factors.iter().map(RiskFactor::description).collect()
    }
}

/// Scores an employee's turnover risk. Fails only on out-of-range ratio fields.
pub fn predict_turnover_risk(employee: &Employee) -> Result<RiskAssessment, AppError> {
    employee.validate()?;

    let risk_factors: Vec<RiskFactor> = RiskFactor::ALL
        .into_iter()
        .filter(|factor| factor.applies_to(employee))
        .collect();

    let risk_score = risk_factors.iter().map(RiskFactor::points).sum();
    let risk_level = RiskLevel::from_score(risk_score);

    debug!(
        employee_id = %employee.id,
        risk_score,
        factors = risk_factors.len(),
        "turnover risk scored"
    );

    Ok(RiskAssessment {
        risk_score,
        risk_level,
        risk_factors,
    })
}
