//! Hard-coded demo records. Every run scores exactly these.

use chrono::NaiveDate;

use crate::models::employee::Employee;
use crate::models::feedback::Feedback;
use crate::models::job::{Candidate, JobDescription, JobRequirements};
use crate::models::resume::Resume;

const ALICE_RESUME: &str = r#"
    Alice Johnson
    alice.johnson@email.com | +1-555-0101

    EXPERIENCE:
    Senior Data Scientist at TechCorp (2020-Present)
    - Led machine learning projects
    - Developed Python-based analytics tools

    SKILLS: Python, Machine Learning, SQL, AWS, Docker
    "#;

const BOB_RESUME: &str = r#"
    Bob Smith
    bob.smith@email.com | +1-555-0102

    Software Engineer with 5 years experience
    Expert in Java, React, Node.js, and SQL

    Built scalable web applications for Fortune 500 companies
    "#;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn resumes() -> Vec<Resume> {
    vec![Resume::new(ALICE_RESUME), Resume::new(BOB_RESUME)]
}

pub fn job_requirements() -> JobRequirements {
    JobRequirements {
        title: "Senior Data Scientist".to_string(),
        required_skills: strings(&["Python", "Machine Learning", "SQL", "Data Analysis"]),
        preferred_skills: strings(&["AWS", "Docker", "TensorFlow"]),
    }
}

pub fn candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            name: "Alice Johnson".to_string(),
            skills: strings(&["Python", "Machine Learning", "SQL", "AWS", "Docker"]),
        },
        Candidate {
            name: "Bob Smith".to_string(),
            skills: strings(&["Java", "React", "Node.js", "SQL"]),
        },
    ]
}

pub fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "E001".to_string(),
            name: "Employee A".to_string(),
            satisfaction_level: 0.35,
            last_evaluation: 0.85,
            number_of_projects: 6,
            average_monthly_hours: 280,
            time_in_company: 4,
            recent_promotion: false,
        },
        Employee {
            id: "E002".to_string(),
            name: "Employee B".to_string(),
            satisfaction_level: 0.75,
            last_evaluation: 0.82,
            number_of_projects: 3,
            average_monthly_hours: 180,
            time_in_company: 2,
            recent_promotion: true,
        },
        Employee {
            id: "E003".to_string(),
            name: "Employee C".to_string(),
            satisfaction_level: 0.50,
            last_evaluation: 0.65,
            number_of_projects: 5,
            average_monthly_hours: 220,
            time_in_company: 3,
            recent_promotion: false,
        },
    ]
}

fn feedback(employee_id: &str, (y, m, d): (i32, u32, u32), text: &str) -> Option<Feedback> {
    Some(Feedback {
        employee_id: employee_id.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d)?,
        text: text.to_string(),
    })
}

pub fn feedback_samples() -> Vec<Feedback> {
    [
        feedback(
            "E101",
            (2024, 1, 15),
            "I love the flexible work hours and remote options. Great work-life balance!",
        ),
        feedback(
            "E102",
            (2024, 1, 16),
            "Very disappointed with the lack of career growth opportunities.",
        ),
        feedback(
            "E103",
            (2024, 1, 17),
            "Urgent: The workload is terrible and affecting my health. Considering leaving.",
        ),
        feedback(
            "E104",
            (2024, 1, 18),
            "Good team environment. Management is supportive.",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn job_descriptions() -> Vec<JobDescription> {
    vec![
        JobDescription {
            title: "Software Developer".to_string(),
            text: "We're looking for a rockstar developer who is aggressive and competitive.
        Must be young and energetic with a culture fit mindset."
                .to_string(),
        },
        JobDescription {
            title: "Data Analyst".to_string(),
            text: "Seeking an analytical professional with strong problem-solving skills.
        Experience with Python and SQL required. Remote work available."
                .to_string(),
        },
    ]
}
