//! Numeric helpers shared by the scorers.

/// Rounds to `places` decimal places, exact ties going to the even digit.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// `part / whole * 100`, or 0.0 when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
