use serde::{Deserialize, Serialize};

/// Loan programs with a customized application flow.
///
/// The string forms are the slugs used throughout the site (page routes,
/// the `loanType` form field, CLI arguments). A slug outside this set is
/// not an error; the catalog falls back to the base step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    Va,
    Fha,
    Construction,
    ReverseMortgage,
    FixFlip,
    BankStatement,
    Commercial,
    DscrInvestment,
}

impl LoanType {
    /// All programs with a customized step list, in display order.
    pub const ALL: [LoanType; 8] = [
        Self::Va,
        Self::Fha,
        Self::Construction,
        Self::ReverseMortgage,
        Self::FixFlip,
        Self::BankStatement,
        Self::Commercial,
        Self::DscrInvestment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Va => "va-loans",
            Self::Fha => "fha-loans",
            Self::Construction => "construction-loans",
            Self::ReverseMortgage => "reverse-mortgage",
            Self::FixFlip => "fix-flip-loans",
            Self::BankStatement => "bank-statement-loans",
            Self::Commercial => "commercial-loans",
            Self::DscrInvestment => "dscr-investment-loans",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "va-loans" => Some(Self::Va),
            "fha-loans" => Some(Self::Fha),
            "construction-loans" => Some(Self::Construction),
            "reverse-mortgage" => Some(Self::ReverseMortgage),
            "fix-flip-loans" => Some(Self::FixFlip),
            "bank-statement-loans" => Some(Self::BankStatement),
            "commercial-loans" => Some(Self::Commercial),
            "dscr-investment-loans" => Some(Self::DscrInvestment),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_known_slug() {
        for loan_type in LoanType::ALL {
            assert_eq!(LoanType::parse(loan_type.as_str()), Some(loan_type));
        }
    }

    #[test]
    fn parse_returns_none_for_unknown_slug() {
        assert_eq!(LoanType::parse("jumbo-loans"), None);
        assert_eq!(LoanType::parse(""), None);
    }
}
