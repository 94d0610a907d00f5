use clap::Args;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_analytics_core::investment::{self, InvestmentInput};
use loan_analytics_core::time_value;

use crate::input;

/// Arguments for the borrow-and-invest comparison
#[derive(Args)]
pub struct InvestCompareArgs {
    /// Principal invested as a lump sum at loan origination
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Assumed CAGR in percent (may be negative)
    #[arg(long, allow_hyphen_values = true)]
    pub growth: Option<Decimal>,

    /// Investment horizon in years (may be fractional)
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Total paid on the loan; derived from --rate when omitted
    #[arg(long)]
    pub total_paid: Option<Decimal>,

    /// Nominal annual loan rate in percent, used to derive total paid
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_invest_compare(args: InvestCompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let invest_input: InvestmentInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let principal = args
            .principal
            .ok_or("--principal is required (or provide --input)")?;
        let growth = args.growth.ok_or("--growth is required (or provide --input)")?;
        let years = args.years.ok_or("--years is required (or provide --input)")?;

        let total_paid = match (args.total_paid, args.rate) {
            (Some(total), _) => total,
            (None, Some(rate)) => {
                let term_months = (years * Decimal::from(12))
                    .round()
                    .to_u32()
                    .ok_or("--years must be a non-negative horizon")?;
                let payment = time_value::annuity_payment(principal, rate, term_months);
                payment * Decimal::from(term_months)
            }
            (None, None) => return Err("--total-paid or --rate is required (or provide --input)".into()),
        };

        InvestmentInput {
            principal,
            annual_growth_pct: growth,
            years,
            total_paid,
        }
    };

    let result = investment::compute_investment_comparison(&invest_input);
    Ok(serde_json::to_value(result)?)
}
