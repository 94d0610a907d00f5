use loan_analytics_core::amortization::{compute_amortization, AmortizationInput};
use loan_analytics_core::investment::{compute_investment_comparison, InvestmentInput};
use loan_analytics_core::real_value::{compute_real_values, RealValueInput};
use loan_analytics_core::time_value;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Reference scenario: 180,000 at 3.69% over 30 years, 2.5% inflation
// ===========================================================================

fn reference_loan() -> AmortizationInput {
    AmortizationInput {
        principal: dec!(180000),
        annual_rate_pct: dec!(3.69),
        term_years: 30,
    }
}

#[test]
fn test_reference_scenario_nominal() {
    let out = compute_amortization(&reference_loan());
    let r = &out.result;

    // Closed-form annuity payment ≈ 827.49/month
    assert!(
        (r.monthly_payment - dec!(827.49)).abs() < dec!(0.5),
        "monthly_payment = {}",
        r.monthly_payment
    );
    assert_eq!(r.term_months, 360);
    assert_eq!(r.total_paid, r.monthly_payment * dec!(360));
    assert_eq!(r.total_interest, r.total_paid - dec!(180000));
    assert!((r.total_paid - dec!(297898)).abs() < dec!(200), "total_paid = {}", r.total_paid);
}

#[test]
fn test_reference_scenario_real_values() {
    let nominal = compute_amortization(&reference_loan()).result;
    let out = compute_real_values(&RealValueInput {
        principal: dec!(180000),
        nominal_annual_rate_pct: dec!(3.69),
        inflation_annual_rate_pct: dec!(2.5),
        monthly_payment: nominal.monthly_payment,
        term_months: nominal.term_months,
    });
    let r = &out.result;

    assert!(
        (r.real_monthly_rate - dec!(0.00099)).abs() < dec!(0.0002),
        "real_monthly_rate = {}",
        r.real_monthly_rate
    );
    // Nominal rate above inflation: discounting pulls the stream below
    // its nominal sum but keeps it above the principal
    assert!(r.present_value_of_payments > Decimal::ZERO);
    assert!(r.present_value_of_payments < nominal.total_paid);
    assert!(r.present_value_of_payments > dec!(180000));
    assert_eq!(
        r.real_overpayment,
        r.present_value_of_payments - dec!(180000)
    );
}

#[test]
fn test_reference_scenario_investment() {
    let nominal = compute_amortization(&reference_loan()).result;
    let out = compute_investment_comparison(&InvestmentInput {
        principal: dec!(180000),
        annual_growth_pct: dec!(10),
        years: dec!(30),
        total_paid: nominal.total_paid,
    });
    let r = &out.result;

    // 180k at 10% over 30y ≈ 3.14m
    assert!((r.future_value_of_principal - dec!(3140891)).abs() < dec!(1000));
    assert_eq!(
        r.net_gain_or_loss,
        r.future_value_of_principal - nominal.total_paid
    );
    // Break-even for ~1.65x total growth over 30y is ~1.69%/yr
    assert!(
        (r.break_even_rate_pct - dec!(1.69)).abs() < dec!(0.05),
        "break_even_rate_pct = {}",
        r.break_even_rate_pct
    );
}

// ===========================================================================
// Engine identities across parameter combinations
// ===========================================================================

#[test]
fn test_annuity_pv_identity_across_rates() {
    // PV of the payment stream at the nominal monthly rate recovers the
    // principal for every rate/term combination
    let principal = dec!(40000);
    for rate in [dec!(0.5), dec!(3.19), dec!(6.49), dec!(9.5), dec!(15)] {
        for months in [12u32, 96, 240, 480] {
            let payment = time_value::annuity_payment(principal, rate, months);
            let pv = time_value::present_value_of_annuity(
                payment,
                time_value::monthly_rate(rate),
                months,
            );
            assert!(
                (pv - principal).abs() < dec!(0.01),
                "rate {rate}, months {months}: pv = {pv}"
            );
        }
    }
}

#[test]
fn test_break_even_identity_across_horizons() {
    for (principal, total, years) in [
        (dec!(5000), dec!(6000), dec!(1)),
        (dec!(40000), dec!(52000), dec!(8)),
        (dec!(180000), dec!(297898), dec!(30)),
        (dec!(600000), dec!(1100000), dec!(40)),
    ] {
        let be = time_value::break_even_growth_rate(principal, total, years);
        let fv = time_value::future_value_lump_sum(principal, be, years);
        assert!(
            (fv - total).abs() < dec!(1),
            "principal {principal}, years {years}: fv = {fv}"
        );
    }
}

#[test]
fn test_zero_rate_scenario_is_exact() {
    let out = compute_amortization(&AmortizationInput {
        principal: dec!(36000),
        annual_rate_pct: Decimal::ZERO,
        term_years: 3,
    });
    assert_eq!(out.result.monthly_payment, dec!(1000));
    assert_eq!(out.result.total_paid, dec!(36000));
    assert_eq!(out.result.total_interest, Decimal::ZERO);
}

#[test]
fn test_inflation_above_nominal_discounts_at_negative_rate() {
    // 6% inflation against a 3.69% loan: the real rate is negative and
    // discounting at it inflates the stream above its nominal sum
    let nominal = compute_amortization(&reference_loan()).result;
    let out = compute_real_values(&RealValueInput {
        principal: dec!(180000),
        nominal_annual_rate_pct: dec!(3.69),
        inflation_annual_rate_pct: dec!(6),
        monthly_payment: nominal.monthly_payment,
        term_months: nominal.term_months,
    });
    assert!(out.result.real_monthly_rate < Decimal::ZERO);
    assert!(out.result.present_value_of_payments > nominal.total_paid);
}

#[test]
fn test_envelope_carries_assumptions() {
    let out = compute_amortization(&reference_loan());
    assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    assert_eq!(out.assumptions["term_years"], serde_json::json!(30));
    assert!(out.warnings.is_empty());
}
