//! Affordability: how much home a borrower's income supports.
//!
//! Applies the classic qualification ratios to gross monthly income, takes
//! the more restrictive of the two as the housing-payment budget, and solves
//! the amortization formula in reverse to turn that budget into a loan
//! ceiling.
//!
//! # Example
//!
//! ```
//! use loan_core::calculations::{AffordabilityCalculator, AffordabilityInput};
//!
//! let input = AffordabilityInput {
//!     monthly_income: 8000.0,
//!     monthly_debts: 500.0,
//!     down_payment: 100_000.0,
//!     annual_rate_percent: 6.875,
//!     term_years: 30.0,
//! };
//!
//! let result = AffordabilityCalculator::default().calculate(&input).unwrap();
//! assert_eq!(result.housing_budget, 2240.0);
//! ```

use serde::{Deserialize, Serialize};

use super::payment::{CalculationError, principal_for_payment};

/// Input values for an affordability estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityInput {
    /// Gross monthly income before taxes.
    pub monthly_income: f64,

    /// Existing monthly debt obligations (cards, auto, student loans).
    pub monthly_debts: f64,

    /// Cash the borrower will put down.
    pub down_payment: f64,

    /// Annual interest rate as a percentage (e.g. 6.875).
    pub annual_rate_percent: f64,

    /// Loan term in years.
    pub term_years: f64,
}

/// Result of an affordability estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityResult {
    /// Monthly housing payment the ratios allow.
    pub housing_budget: f64,

    /// Loan principal supportable at that budget.
    pub max_loan_amount: f64,

    /// Loan ceiling plus down payment.
    pub max_home_price: f64,
}

/// Affordability calculator with configurable qualification ratios.
///
/// The defaults are the standard 28% front-end (housing payment only) and
/// 36% back-end (housing plus all other debt) ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityCalculator {
    pub front_end_ratio: f64,
    pub back_end_ratio: f64,
}

impl Default for AffordabilityCalculator {
    fn default() -> Self {
        Self {
            front_end_ratio: 0.28,
            back_end_ratio: 0.36,
        }
    }
}

impl AffordabilityCalculator {
    /// Calculates the maximum affordable loan amount and home price.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] if the rate is negative, the term covers
    /// no payments, or any input is non-finite.
    pub fn calculate(
        &self,
        input: &AffordabilityInput,
    ) -> Result<AffordabilityResult, CalculationError> {
        if !input.monthly_income.is_finite()
            || !input.monthly_debts.is_finite()
            || !input.down_payment.is_finite()
        {
            return Err(CalculationError::NonFiniteInput);
        }

        let housing_budget = self.housing_budget(input.monthly_income, input.monthly_debts);
        let max_loan_amount = principal_for_payment(
            housing_budget,
            input.annual_rate_percent,
            input.term_years,
        )?;

        Ok(AffordabilityResult {
            housing_budget,
            max_loan_amount,
            max_home_price: max_loan_amount + input.down_payment,
        })
    }

    /// The monthly payment the ratios allow: the smaller of the front-end
    /// cap and the back-end cap net of existing debts, floored at zero.
    fn housing_budget(
        &self,
        monthly_income: f64,
        monthly_debts: f64,
    ) -> f64 {
        let front_end_cap = monthly_income * self.front_end_ratio;
        let back_end_cap = monthly_income * self.back_end_ratio - monthly_debts;
        front_end_cap.min(back_end_cap).max(0.0)
    }
}
