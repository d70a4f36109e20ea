//! Shared helpers for loan calculations: input coercion and display rounding.

/// Parses free-form calculator input into an amount.
///
/// Accepts currency formatting (`$`, comma thousands separators) and trims
/// whitespace. Empty, non-numeric, and non-finite input all coerce to `0.0`
/// rather than failing: calculators update live while the user is still
/// typing, so a half-entered number must never produce an error state.
///
/// # Examples
///
/// ```
/// use loan_core::calculations::common::parse_amount;
///
/// assert_eq!(parse_amount("750000"), 750000.0);
/// assert_eq!(parse_amount("$1,234.56"), 1234.56);
/// assert_eq!(parse_amount(""), 0.0);
/// assert_eq!(parse_amount("abc"), 0.0);
/// ```
pub fn parse_amount(s: &str) -> f64 {
    let normalized: String = s
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();
    if normalized.is_empty() {
        return 0.0;
    }
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        Ok(_) => {
            tracing::warn!(input = %s, "non-finite amount coerced to zero");
            0.0
        }
        Err(err) => {
            tracing::warn!(input = %s, "invalid amount coerced to zero: {err}");
            0.0
        }
    }
}

/// Rounds to two decimal places, half away from zero, matching how every
/// calculator result is displayed.
///
/// # Examples
///
/// ```
/// use loan_core::calculations::common::round_to_cents;
///
/// assert_eq!(round_to_cents(3941.5728), 3941.57);
/// assert_eq!(round_to_cents(0.005), 0.01);
/// assert_eq!(round_to_cents(-0.005), -0.01);
/// ```
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
