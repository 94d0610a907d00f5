use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::types::{Money, Percent, Rate, Years};

/// Below this magnitude a periodic discount rate is treated as zero; the
/// zero branch equals the r → 0 limit of the closed-form annuity factor.
pub const RATE_EPSILON: Decimal = dec!(0.000000000001);

const HUNDRED: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Monthly nominal rate from an annual percentage (3.69 → 0.003075).
pub fn monthly_rate(annual_pct: Percent) -> Rate {
    annual_pct / HUNDRED / MONTHS_PER_YEAR
}

/// Fixed monthly payment that fully amortises `principal` over
/// `term_months` at a nominal annual percentage rate.
///
/// Degenerate inputs (zero term, non-positive principal) yield 0 rather
/// than an error; a zero rate yields straight-line repayment.
pub fn annuity_payment(principal: Money, annual_rate_pct: Percent, term_months: u32) -> Money {
    if term_months == 0 || principal <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let i = monthly_rate(annual_rate_pct);
    if i.is_zero() {
        return principal / Decimal::from(term_months);
    }
    if i <= dec!(-1) {
        // Compounding base would be non-positive
        return Decimal::ZERO;
    }

    // P·i·(1+i)^n / ((1+i)^n - 1), the factored form of P·i / (1 - (1+i)^-n)
    let factor = (Decimal::ONE + i).powd(Decimal::from(term_months));
    principal * i * factor / (factor - Decimal::ONE)
}

/// Fisher-approximation real monthly rate: (1+iN)/(1+iF) - 1.
///
/// Negative output (inflation outrunning the nominal rate) is valid. An
/// inflation rate of exactly -1200%/yr would zero the divisor; that edge
/// yields 0.
pub fn real_monthly_rate(nominal_annual_pct: Percent, inflation_annual_pct: Percent) -> Rate {
    let i_nominal = monthly_rate(nominal_annual_pct);
    let i_inflation = monthly_rate(inflation_annual_pct);

    let divisor = Decimal::ONE + i_inflation;
    if divisor.is_zero() {
        return Decimal::ZERO;
    }
    (Decimal::ONE + i_nominal) / divisor - Decimal::ONE
}

/// Present value of `periods` equal payments discounted at `rate` per
/// period: payment · (1 - (1+r)^-n) / r, with the r → 0 limit payment·n.
pub fn present_value_of_annuity(payment: Money, rate: Rate, periods: u32) -> Money {
    if periods == 0 {
        return Decimal::ZERO;
    }
    if rate.abs() < RATE_EPSILON {
        return payment * Decimal::from(periods);
    }
    if rate <= dec!(-1) {
        // Discount factor base would be non-positive
        return Decimal::ZERO;
    }

    let factor = (Decimal::ONE + rate).powd(Decimal::from(periods));
    payment * (Decimal::ONE - Decimal::ONE / factor) / rate
}

/// Future value of a lump sum compounding at an annual growth percentage.
/// `years` may be fractional; growth at or below -100% yields 0.
pub fn future_value_lump_sum(principal: Money, annual_growth_pct: Percent, years: Years) -> Money {
    let base = Decimal::ONE + annual_growth_pct / HUNDRED;
    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    principal * base.powd(years)
}

/// CAGR (as an annual percentage) at which a lump sum of `principal`
/// grows to exactly `total_paid` after `years` — the indifference point
/// between borrowing-and-investing-elsewhere and not borrowing.
///
/// Defined as 0 unless principal, total_paid and years are all positive.
pub fn break_even_growth_rate(principal: Money, total_paid: Money, years: Years) -> Percent {
    if principal <= Decimal::ZERO || total_paid <= Decimal::ZERO || years <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let ratio = total_paid / principal;
    (ratio.powd(Decimal::ONE / years) - Decimal::ONE) * HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = annuity_payment(dec!(180000), Decimal::ZERO, 360);
        assert_eq!(payment, dec!(500));
        assert_eq!(payment * dec!(360), dec!(180000));
    }

    #[test]
    fn test_annuity_payment_known_answer() {
        // 180k at 3.69% over 30 years ≈ 827.49/month
        let payment = annuity_payment(dec!(180000), dec!(3.69), 360);
        assert!((payment - dec!(827.49)).abs() < dec!(0.5), "payment = {payment}");
    }

    #[test]
    fn test_annuity_discounts_back_to_principal() {
        // The payment is precisely the payment whose nominal-rate PV is P
        let principal = dec!(180000);
        let payment = annuity_payment(principal, dec!(3.69), 360);
        let pv = present_value_of_annuity(payment, monthly_rate(dec!(3.69)), 360);
        assert!((pv - principal).abs() < dec!(0.01), "pv = {pv}");
    }

    #[test]
    fn test_degenerate_inputs_yield_zero() {
        assert_eq!(annuity_payment(dec!(100000), dec!(4), 0), Decimal::ZERO);
        assert_eq!(annuity_payment(Decimal::ZERO, dec!(4), 360), Decimal::ZERO);
        assert_eq!(annuity_payment(dec!(-5), dec!(4), 360), Decimal::ZERO);
        assert_eq!(present_value_of_annuity(dec!(500), dec!(0.001), 0), Decimal::ZERO);
        assert_eq!(break_even_growth_rate(Decimal::ZERO, dec!(100), dec!(10)), Decimal::ZERO);
        assert_eq!(break_even_growth_rate(dec!(100), dec!(200), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_real_rate_sign_follows_spread() {
        assert!(real_monthly_rate(dec!(2), dec!(5)) < Decimal::ZERO);
        assert!(real_monthly_rate(dec!(5), dec!(2)) > Decimal::ZERO);
        assert_eq!(real_monthly_rate(dec!(3.5), dec!(3.5)), Decimal::ZERO);
    }

    #[test]
    fn test_real_rate_known_answer() {
        // 3.69% nominal vs 2.5% inflation ≈ 0.099%/month real
        let r = real_monthly_rate(dec!(3.69), dec!(2.5));
        assert!((r - dec!(0.00099)).abs() < dec!(0.0002), "r = {r}");
    }

    #[test]
    fn test_pv_zero_branch_matches_tiny_rate() {
        let exact = present_value_of_annuity(dec!(1000), Decimal::ZERO, 360);
        assert_eq!(exact, dec!(360000));

        let tiny = present_value_of_annuity(dec!(1000), dec!(0.0000000001), 360);
        assert!((tiny - exact).abs() < dec!(0.1), "tiny-rate pv = {tiny}");
    }

    #[test]
    fn test_negative_discount_rate_is_valid() {
        // Inflation above the nominal rate discounts at a negative rate,
        // which inflates the PV above the nominal sum
        let pv = present_value_of_annuity(dec!(1000), dec!(-0.001), 120);
        assert!(pv > dec!(120000));
    }

    #[test]
    fn test_future_value_known_answer() {
        // 10k at 10% over 10 years ≈ 25,937.42
        let fv = future_value_lump_sum(dec!(10000), dec!(10), dec!(10));
        assert!((fv - dec!(25937.42)).abs() < dec!(0.5), "fv = {fv}");
    }

    #[test]
    fn test_future_value_fractional_years_and_negative_growth() {
        let fv = future_value_lump_sum(dec!(10000), dec!(-5), dec!(2.5));
        // 10000 · 0.95^2.5 ≈ 8796.45
        assert!((fv - dec!(8796.45)).abs() < dec!(1), "fv = {fv}");
        assert_eq!(future_value_lump_sum(dec!(10000), dec!(-100), dec!(3)), Decimal::ZERO);
    }

    #[test]
    fn test_break_even_round_trip() {
        let principal = dec!(180000);
        let total_paid = dec!(297898);
        let years = dec!(30);
        let be = break_even_growth_rate(principal, total_paid, years);
        let fv = future_value_lump_sum(principal, be, years);
        assert!((fv - total_paid).abs() < dec!(1), "fv = {fv}");
    }

    #[test]
    fn test_break_even_doubling_in_ten_years() {
        // Doubling over 10y requires ~7.18% CAGR
        let be = break_even_growth_rate(dec!(100), dec!(200), dec!(10));
        assert!((be - dec!(7.177)).abs() < dec!(0.01), "be = {be}");
    }
}
