//! Investment and refinance ratios: DSCR, renovation ROI, refinance
//! savings, and debt-to-income.
//!
//! All functions guard their denominators so a zero or garbage input yields
//! a defined `0.0` instead of NaN or infinity leaking into the display
//! layer.

/// Debt Service Coverage Ratio: income over the loan payment for the same
/// period (monthly rent over monthly payment, or annual NOI over annual
/// debt service). Values at or above 1.0 mean the property carries its own
/// debt.
///
/// A zero or negative payment returns `0.0`.
pub fn debt_service_coverage(income: f64, debt_service: f64) -> f64 {
    if debt_service <= 0.0 || !debt_service.is_finite() || !income.is_finite() {
        return 0.0;
    }
    income / debt_service
}

/// Renovation return on investment, as a percentage of the budget.
///
/// The pre-renovation value is derived as `after_value - budget`, so any
/// positive budget yields exactly 100% and a zero budget yields 0%. This
/// mirrors the published calculator output; see DESIGN.md before changing
/// the formula, as downstream copy quotes it.
pub fn renovation_roi(after_value: f64, budget: f64) -> f64 {
    if !after_value.is_finite() || !budget.is_finite() {
        return 0.0;
    }
    let before_value = after_value - budget;
    let denominator = if budget == 0.0 { 1.0 } else { budget };
    ((after_value - before_value) / denominator) * 100.0
}

/// Monthly savings from refinancing, floored at zero: replacing a payment
/// with a more expensive one reports no savings rather than a negative
/// number.
pub fn refinance_savings(current_payment: f64, new_payment: f64) -> f64 {
    if !current_payment.is_finite() || !new_payment.is_finite() {
        return 0.0;
    }
    (current_payment - new_payment).max(0.0)
}

/// Debt-to-income ratio as a percentage of gross monthly income.
///
/// Zero or negative income returns `0.0`.
pub fn debt_to_income(monthly_debt: f64, monthly_income: f64) -> f64 {
    if monthly_income <= 0.0 || !monthly_income.is_finite() || !monthly_debt.is_finite() {
        return 0.0;
    }
    (monthly_debt / monthly_income) * 100.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // debt_service_coverage tests
    // =========================================================================

    #[test]
    fn dscr_ratio_of_rent_to_payment() {
        assert_eq!(debt_service_coverage(3000.0, 2400.0), 1.25);
    }

    #[test]
    fn dscr_below_one_when_payment_exceeds_rent() {
        assert_eq!(debt_service_coverage(1800.0, 2400.0), 0.75);
    }

    #[test]
    fn dscr_zero_payment_returns_zero_not_infinity() {
        assert_eq!(debt_service_coverage(3000.0, 0.0), 0.0);
        assert_eq!(debt_service_coverage(0.0, 0.0), 0.0);
    }

    #[test]
    fn dscr_negative_payment_returns_zero() {
        assert_eq!(debt_service_coverage(3000.0, -100.0), 0.0);
    }

    #[test]
    fn dscr_non_finite_inputs_return_zero() {
        assert_eq!(debt_service_coverage(f64::NAN, 2400.0), 0.0);
        assert_eq!(debt_service_coverage(3000.0, f64::INFINITY), 0.0);
    }

    // =========================================================================
    // renovation_roi tests
    // =========================================================================

    #[test]
    fn renovation_roi_positive_budget_is_always_one_hundred() {
        assert_eq!(renovation_roi(850_000.0, 100_000.0), 100.0);
        assert_eq!(renovation_roi(300_000.0, 25_000.0), 100.0);
    }

    #[test]
    fn renovation_roi_zero_budget_is_zero() {
        assert_eq!(renovation_roi(850_000.0, 0.0), 0.0);
    }

    // =========================================================================
    // refinance_savings tests
    // =========================================================================

    #[test]
    fn refinance_savings_reports_the_payment_drop() {
        assert_eq!(refinance_savings(3200.0, 2900.0), 300.0);
    }

    #[test]
    fn refinance_savings_floors_at_zero() {
        assert_eq!(refinance_savings(2900.0, 3200.0), 0.0);
        assert_eq!(refinance_savings(2900.0, 2900.0), 0.0);
    }

    // =========================================================================
    // debt_to_income tests
    // =========================================================================

    #[test]
    fn dti_percentage_of_gross_income() {
        assert_eq!(debt_to_income(2880.0, 8000.0), 36.0);
    }

    #[test]
    fn dti_zero_income_returns_zero() {
        assert_eq!(debt_to_income(2880.0, 0.0), 0.0);
    }
}
