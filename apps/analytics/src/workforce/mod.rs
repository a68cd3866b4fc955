// Workforce-side heuristics: turnover risk rules and feedback sentiment.

pub mod sentiment;
pub mod turnover;
