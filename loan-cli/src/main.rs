use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use loan_core::calculations::common::round_to_cents;
use loan_core::calculations::{
    AffordabilityCalculator, AffordabilityInput, debt_service_coverage, debt_to_income,
    monthly_payment, refinance_savings, renovation_roi,
};

mod apply;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Mortgage calculators and loan application intake.
///
/// The calculator subcommands print a single figure; `apply` walks through
/// a full loan application on the terminal, saving a resumable draft after
/// every answer.
#[derive(Debug, Parser)]
#[command(name = "loan-cli", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Monthly principal-and-interest payment for a loan.
    Payment {
        /// Loan principal in dollars.
        #[arg(long)]
        principal: f64,

        /// Annual interest rate, in percent.
        #[arg(long, default_value_t = 6.875)]
        rate: f64,

        /// Term in years.
        #[arg(long, default_value_t = 30.0)]
        term: f64,
    },

    /// Housing budget and maximum purchase price from income and debts.
    Affordability {
        /// Gross monthly income in dollars.
        #[arg(long)]
        income: f64,

        /// Existing monthly debt payments in dollars.
        #[arg(long, default_value_t = 0.0)]
        debts: f64,

        /// Available down payment in dollars.
        #[arg(long, default_value_t = 0.0)]
        down: f64,

        /// Annual interest rate, in percent.
        #[arg(long, default_value_t = 6.875)]
        rate: f64,

        /// Term in years.
        #[arg(long, default_value_t = 30.0)]
        term: f64,
    },

    /// Debt service coverage ratio for a rental property.
    Dscr {
        /// Monthly rental income in dollars.
        #[arg(long)]
        rent: f64,

        /// Monthly loan payment in dollars.
        #[arg(long)]
        payment: f64,
    },

    /// Renovation return on investment.
    Roi {
        /// Expected after-renovation value in dollars.
        #[arg(long)]
        after_value: f64,

        /// Renovation budget in dollars.
        #[arg(long)]
        budget: f64,
    },

    /// Monthly savings from replacing one payment with another.
    Refinance {
        /// Current monthly payment in dollars.
        #[arg(long)]
        current: f64,

        /// Proposed monthly payment in dollars.
        #[arg(long = "new")]
        new_payment: f64,
    },

    /// Debt-to-income ratio as a percentage.
    Dti {
        /// Monthly debt payments in dollars.
        #[arg(long)]
        debt: f64,

        /// Gross monthly income in dollars.
        #[arg(long)]
        income: f64,
    },

    /// Walk through a loan application on the terminal.
    Apply {
        /// Loan program slug, e.g. `va-loans` or `fha-loans`.
        #[arg(long, default_value = "purchase")]
        loan_type: String,

        /// Draft file; the application is saved here after every answer.
        #[arg(long, default_value = "loan-draft.json")]
        draft: PathBuf,

        /// Resume from the saved draft instead of starting fresh.
        #[arg(long, default_value_t = false)]
        resume: bool,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Payment {
            principal,
            rate,
            term,
        } => {
            let payment = monthly_payment(principal, rate, term)?;
            println!(
                "Monthly payment: ${:.2} ({principal} at {rate}% over {term} years)",
                round_to_cents(payment)
            );
        }
        Command::Affordability {
            income,
            debts,
            down,
            rate,
            term,
        } => {
            let result = AffordabilityCalculator::default().calculate(&AffordabilityInput {
                monthly_income: income,
                monthly_debts: debts,
                down_payment: down,
                annual_rate_percent: rate,
                term_years: term,
            })?;
            println!(
                "Housing budget:  ${:.2}/month",
                round_to_cents(result.housing_budget)
            );
            println!(
                "Maximum loan:    ${:.2}",
                round_to_cents(result.max_loan_amount)
            );
            println!(
                "Maximum price:   ${:.2}",
                round_to_cents(result.max_home_price)
            );
        }
        Command::Dscr { rent, payment } => {
            println!("DSCR: {:.2}", debt_service_coverage(rent, payment));
        }
        Command::Roi { after_value, budget } => {
            println!("Renovation ROI: {:.1}%", renovation_roi(after_value, budget));
        }
        Command::Refinance {
            current,
            new_payment,
        } => {
            println!(
                "Monthly savings: ${:.2}",
                round_to_cents(refinance_savings(current, new_payment))
            );
        }
        Command::Dti { debt, income } => {
            println!("DTI: {:.1}%", debt_to_income(debt, income));
        }
        Command::Apply {
            loan_type,
            draft,
            resume,
        } => apply::run(&loan_type, draft, resume)?,
    }

    Ok(())
}
