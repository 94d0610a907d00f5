use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};

/// Input for the inflation-adjusted view of a payment stream.
///
/// `principal` is carried because the real overpayment is measured
/// against the amount borrowed, not against the payments alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealValueInput {
    pub principal: Money,
    pub nominal_annual_rate_pct: Percent,
    pub inflation_annual_rate_pct: Percent,
    pub monthly_payment: Money,
    pub term_months: u32,
}

/// The payment stream in today's money.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealValueResult {
    pub real_monthly_rate: Rate,
    pub present_value_of_payments: Money,
    pub real_overpayment: Money,
}

/// Discount the nominal payment stream at the Fisher-approximation real
/// monthly rate. A negative real rate (inflation above the nominal rate)
/// is valid and inflates the present value above the nominal sum.
pub fn compute_real_values(input: &RealValueInput) -> ComputationOutput<RealValueResult> {
    let start = Instant::now();

    let real_monthly_rate = time_value::real_monthly_rate(
        input.nominal_annual_rate_pct,
        input.inflation_annual_rate_pct,
    );
    let present_value_of_payments = time_value::present_value_of_annuity(
        input.monthly_payment,
        real_monthly_rate,
        input.term_months,
    );
    let real_overpayment = present_value_of_payments - input.principal;

    with_metadata(
        "Fisher approximation on a monthly basis; nominal payments discounted at the real monthly rate",
        input,
        Vec::new(),
        start.elapsed().as_micros() as u64,
        RealValueResult {
            real_monthly_rate,
            present_value_of_payments,
            real_overpayment,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_equal_rates_leave_nominal_sum() {
        let out = compute_real_values(&RealValueInput {
            principal: dec!(100000),
            nominal_annual_rate_pct: dec!(3),
            inflation_annual_rate_pct: dec!(3),
            monthly_payment: dec!(1000),
            term_months: 120,
        });
        assert_eq!(out.result.real_monthly_rate, Decimal::ZERO);
        assert_eq!(out.result.present_value_of_payments, dec!(120000));
        assert_eq!(out.result.real_overpayment, dec!(20000));
    }

    #[test]
    fn test_zero_term_yields_zero_pv() {
        let out = compute_real_values(&RealValueInput {
            principal: dec!(100000),
            nominal_annual_rate_pct: dec!(4),
            inflation_annual_rate_pct: dec!(2),
            monthly_payment: dec!(1000),
            term_months: 0,
        });
        assert_eq!(out.result.present_value_of_payments, Decimal::ZERO);
        assert_eq!(out.result.real_overpayment, dec!(-100000));
    }
}
