//! Loan calculation modules for the calculator hub.
//!
//! Pure, synchronous math over `f64`. Raw text from calculator widgets goes
//! through [`common::parse_amount`] first, so every function here can assume
//! finite inputs from that path; direct callers are guarded anyway.

pub mod affordability;
pub mod common;
pub mod investment;
pub mod payment;

pub use affordability::{AffordabilityCalculator, AffordabilityInput, AffordabilityResult};
pub use investment::{debt_service_coverage, debt_to_income, refinance_savings, renovation_roi};
pub use payment::{CalculationError, monthly_payment, principal_for_payment};
