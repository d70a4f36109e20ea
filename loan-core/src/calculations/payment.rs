//! Amortized payment math: the standard monthly payment formula and its
//! present-value-of-an-annuity inverse.
//!
//! Both directions share the same rate/term handling, so for any valid rate
//! and term `monthly_payment(principal_for_payment(b, r, t), r, t)` returns
//! `b` within floating-point tolerance.
//!
//! # Example
//!
//! ```
//! use loan_core::calculations::payment::monthly_payment;
//! use loan_core::calculations::common::round_to_cents;
//!
//! let payment = monthly_payment(600_000.0, 6.875, 30.0).unwrap();
//! assert_eq!(round_to_cents(payment), 3941.57);
//! ```

use thiserror::Error;

/// Errors for invalid calculation inputs.
///
/// These are caught at the calculation boundary and rendered as an "unable
/// to calculate with these inputs" state; nothing here is fatal to the host.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalculationError {
    /// Loan principal below zero.
    #[error("loan amount cannot be negative (got {0})")]
    NegativePrincipal(f64),

    /// Target payment below zero when solving for principal.
    #[error("payment amount cannot be negative (got {0})")]
    NegativePayment(f64),

    /// Annual interest rate below zero.
    #[error("interest rate cannot be negative (got {0}%)")]
    NegativeRate(f64),

    /// A term that produces zero monthly payments would divide by zero in
    /// the zero-rate branch, so it is rejected up front.
    #[error("loan term must cover at least one payment (got {0} years)")]
    InvalidTerm(f64),

    /// NaN or infinity passed directly to the engine. Input that arrives
    /// through [`parse_amount`](super::common::parse_amount) can never hit
    /// this; it coerces non-finite text to zero.
    #[error("inputs must be finite numbers")]
    NonFiniteInput,
}

fn check_rate_and_term(annual_rate_percent: f64, term_years: f64) -> Result<(), CalculationError> {
    if !annual_rate_percent.is_finite() || !term_years.is_finite() {
        return Err(CalculationError::NonFiniteInput);
    }
    if annual_rate_percent < 0.0 {
        return Err(CalculationError::NegativeRate(annual_rate_percent));
    }
    if term_years <= 0.0 {
        return Err(CalculationError::InvalidTerm(term_years));
    }
    Ok(())
}

fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Standard amortized monthly payment for a fixed-rate loan.
///
/// `principal * (r * (1+r)^n) / ((1+r)^n - 1)` with monthly rate `r` and
/// `n = term_years * 12` payments. A zero rate degenerates to straight-line
/// `principal / n`.
///
/// # Errors
///
/// Returns [`CalculationError`] for a negative principal, negative rate,
/// a term of zero or fewer years, or non-finite input.
pub fn monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> Result<f64, CalculationError> {
    check_rate_and_term(annual_rate_percent, term_years)?;
    if !principal.is_finite() {
        return Err(CalculationError::NonFiniteInput);
    }
    if principal < 0.0 {
        return Err(CalculationError::NegativePrincipal(principal));
    }
    if principal == 0.0 {
        return Ok(0.0);
    }

    let n = term_years * 12.0;
    let r = monthly_rate(annual_rate_percent);
    if r == 0.0 {
        return Ok(principal / n);
    }

    let growth = (1.0 + r).powf(n);
    if growth.is_infinite() {
        // Limit of the formula as (1+r)^n overflows: interest dominates and
        // the payment approaches pure interest on the principal.
        return Ok(principal * r);
    }
    Ok(principal * (r * growth) / (growth - 1.0))
}

/// Maximum principal supportable by a fixed monthly payment: the present
/// value of an annuity of `payment` over the term at the given rate.
///
/// This is the inverse of [`monthly_payment`]; the affordability calculator
/// uses it to turn a housing budget into a loan ceiling.
///
/// # Errors
///
/// Returns [`CalculationError`] for a negative payment, negative rate,
/// a term of zero or fewer years, or non-finite input.
pub fn principal_for_payment(
    payment: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> Result<f64, CalculationError> {
    check_rate_and_term(annual_rate_percent, term_years)?;
    if !payment.is_finite() {
        return Err(CalculationError::NonFiniteInput);
    }
    if payment < 0.0 {
        return Err(CalculationError::NegativePayment(payment));
    }
    if payment == 0.0 {
        return Ok(0.0);
    }

    let n = term_years * 12.0;
    let r = monthly_rate(annual_rate_percent);
    if r == 0.0 {
        return Ok(payment * n);
    }

    let growth = (1.0 + r).powf(n);
    if growth.is_infinite() {
        return Ok(payment / r);
    }
    Ok(payment * (growth - 1.0) / (r * growth))
}
