use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_analytics_core::amortization::{self, AmortizationInput};
use loan_analytics_core::analysis::{self, LoanAnalysisInput};
use loan_analytics_core::real_value::{self, RealValueInput};
use loan_analytics_core::time_value;

use crate::commands::ProductArg;
use crate::input;

/// Arguments for amortisation
#[derive(Args)]
pub struct AmortizeArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Nominal annual rate in percent (e.g. 3.69 for 3.69%)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<Decimal>,

    /// Term in whole years
    #[arg(long)]
    pub years: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the inflation-adjusted view
#[derive(Args)]
pub struct RealValueArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Nominal annual rate in percent
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<Decimal>,

    /// Assumed inflation p.a. in percent (may be negative)
    #[arg(long, default_value = "2.5", allow_hyphen_values = true)]
    pub inflation: Decimal,

    /// Monthly payment; derived from principal and rate when omitted
    #[arg(long)]
    pub payment: Option<Decimal>,

    /// Term in months; wins over --years
    #[arg(long)]
    pub months: Option<u32>,

    /// Term in whole years
    #[arg(long)]
    pub years: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the full analysis
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Loan product
    #[arg(long, value_enum, default_value = "mortgage")]
    pub product: ProductArg,

    /// Loan principal (clamped to product bounds)
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Term in whole years (clamped to product bounds)
    #[arg(long)]
    pub years: Option<u32>,

    /// Assumed inflation p.a. in percent
    #[arg(long, default_value = "2.5", allow_hyphen_values = true)]
    pub inflation: Decimal,

    /// Lender id from the reference table (see `loan lenders`)
    #[arg(long)]
    pub lender: Option<String>,

    /// Custom nominal annual rate in percent; wins over --lender
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<Decimal>,

    /// Asset id seeding the growth assumption (see `loan assets`)
    #[arg(long, default_value = "sp500")]
    pub asset: String,

    /// Expected growth p.a. in percent; wins over --asset
    #[arg(long, allow_hyphen_values = true)]
    pub growth: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_amortize(args: AmortizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: AmortizationInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        AmortizationInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };

    let result = amortization::compute_amortization(&loan_input);
    Ok(serde_json::to_value(result)?)
}

pub fn run_real_value(args: RealValueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rv_input: RealValueInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let principal = args
            .principal
            .ok_or("--principal is required (or provide --input)")?;
        let rate = args.rate.ok_or("--rate is required (or provide --input)")?;
        let term_months = match (args.months, args.years) {
            (Some(months), _) => months,
            (None, Some(years)) => years * 12,
            (None, None) => return Err("--months or --years is required (or provide --input)".into()),
        };
        let monthly_payment = args
            .payment
            .unwrap_or_else(|| time_value::annuity_payment(principal, rate, term_months));

        RealValueInput {
            principal,
            nominal_annual_rate_pct: rate,
            inflation_annual_rate_pct: args.inflation,
            monthly_payment,
            term_months,
        }
    };

    let result = real_value::compute_real_values(&rv_input);
    Ok(serde_json::to_value(result)?)
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let analysis_input: LoanAnalysisInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanAnalysisInput {
            product: args.product.into(),
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            term_years: args.years.ok_or("--years is required (or provide --input)")?,
            inflation_annual_pct: args.inflation,
            lender_id: args.lender,
            custom_rate_pct: args.rate,
            asset_id: Some(args.asset),
            expected_growth_pct: args.growth,
        }
    };

    let result = analysis::analyze_loan(&analysis_input)?;
    Ok(serde_json::to_value(result)?)
}
