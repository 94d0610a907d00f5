use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};

/// Input parameters for a fixed-rate annuity loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationInput {
    pub principal: Money,
    pub annual_rate_pct: Percent,
    pub term_years: u32,
}

/// Nominal cost of the loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub monthly_payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
    pub term_months: u32,
}

/// Compute the monthly annuity payment and nominal totals.
///
/// Total over its domain: degenerate inputs flow through the sentinel
/// branches of [`time_value::annuity_payment`] instead of erroring.
pub fn compute_amortization(input: &AmortizationInput) -> ComputationOutput<AmortizationResult> {
    let start = Instant::now();

    let term_months = input.term_years * 12;
    let monthly_payment =
        time_value::annuity_payment(input.principal, input.annual_rate_pct, term_months);
    let total_paid = monthly_payment * Decimal::from(term_months);
    let total_interest = total_paid - input.principal;

    with_metadata(
        "Fixed-rate annuity amortisation; monthly rate = annual pct / 100 / 12",
        input,
        Vec::new(),
        start.elapsed().as_micros() as u64,
        AmortizationResult {
            monthly_payment,
            total_paid,
            total_interest,
            term_months,
        },
    )
}
