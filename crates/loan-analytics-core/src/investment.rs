use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Years};

/// Input for the borrow-and-invest comparison: the full principal is
/// assumed invested as a lump sum at origination while the loan payments
/// come from some other funding source (no taxes or fees modelled).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentInput {
    pub principal: Money,
    pub annual_growth_pct: Percent,
    pub years: Years,
    pub total_paid: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentComparison {
    pub future_value_of_principal: Money,
    pub net_gain_or_loss: Money,
    pub break_even_rate_pct: Percent,
}

/// Compare investing the principal at an assumed CAGR against the total
/// nominal cost of the loan over the same horizon.
pub fn compute_investment_comparison(
    input: &InvestmentInput,
) -> ComputationOutput<InvestmentComparison> {
    let start = Instant::now();

    let future_value_of_principal =
        time_value::future_value_lump_sum(input.principal, input.annual_growth_pct, input.years);
    let net_gain_or_loss = future_value_of_principal - input.total_paid;
    let break_even_rate_pct =
        time_value::break_even_growth_rate(input.principal, input.total_paid, input.years);

    with_metadata(
        "Lump-sum compounding of the principal vs total nominal loan cost; break-even CAGR = (total/principal)^(1/years) - 1",
        input,
        Vec::new(),
        start.elapsed().as_micros() as u64,
        InvestmentComparison {
            future_value_of_principal,
            net_gain_or_loss,
            break_even_rate_pct,
        },
    )
}
