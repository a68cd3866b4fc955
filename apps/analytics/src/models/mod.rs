//! Literal input records. Each one is built from sample data, scored once and dropped.

pub mod employee;
pub mod feedback;
pub mod job;
pub mod resume;
