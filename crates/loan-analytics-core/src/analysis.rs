use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{compute_amortization, AmortizationInput, AmortizationResult};
use crate::error::LoanAnalyticsError;
use crate::investment::{compute_investment_comparison, InvestmentComparison, InvestmentInput};
use crate::real_value::{compute_real_values, RealValueInput, RealValueResult};
use crate::reference::{self, LoanProduct};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::LoanAnalyticsResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input for a full loan analysis.
///
/// Rate resolution mirrors the calculator UI: an explicit
/// `custom_rate_pct` wins over `lender_id`; at least one is required.
/// The growth assumption resolves the same way from
/// `expected_growth_pct` and `asset_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAnalysisInput {
    pub product: LoanProduct,
    pub principal: Money,
    pub term_years: u32,
    pub inflation_annual_pct: Percent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_rate_pct: Option<Percent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_growth_pct: Option<Percent>,
}

/// Everything the calculator shows for one set of inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAnalysis {
    pub product: LoanProduct,
    pub principal: Money,
    pub term_years: u32,
    pub effective_rate_pct: Percent,
    pub expected_growth_pct: Percent,
    pub amortization: AmortizationResult,
    pub real_value: RealValueResult,
    pub investment: InvestmentComparison,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Run the full recompute: clamp inputs to product bounds, resolve the
/// effective rate and growth assumption, then chain amortisation, the
/// inflation-adjusted view and the investment comparison over the loan
/// term. Clamping is reported as warnings, never as errors.
pub fn analyze_loan(
    input: &LoanAnalysisInput,
) -> LoanAnalyticsResult<ComputationOutput<LoanAnalysis>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Clamp to product bounds ---
    let limits = input.product.limits();
    let principal = limits.clamp_amount(input.principal);
    if principal != input.principal {
        warnings.push(format!(
            "principal {} clamped to {} (product bounds {}..{})",
            input.principal, principal, limits.amount.min, limits.amount.max
        ));
    }
    let term_years = limits.clamp_term_years(input.term_years);
    if term_years != input.term_years {
        warnings.push(format!(
            "term {}y clamped to {}y (product bounds {}..{})",
            input.term_years, term_years, limits.term.min_years, limits.term.max_years
        ));
    }

    // --- Resolve rate and growth assumptions ---
    let effective_rate_pct = match (input.custom_rate_pct, input.lender_id.as_deref()) {
        (Some(rate), _) => rate,
        (None, Some(id)) => reference::lender_rate(input.product, id)?,
        (None, None) => {
            return Err(LoanAnalyticsError::InvalidInput {
                field: "custom_rate_pct".into(),
                reason: "either custom_rate_pct or lender_id is required".into(),
            })
        }
    };
    let expected_growth_pct = match (input.expected_growth_pct, input.asset_id.as_deref()) {
        (Some(growth), _) => growth,
        (None, Some(id)) => reference::asset_cagr(id)?,
        (None, None) => {
            return Err(LoanAnalyticsError::InvalidInput {
                field: "expected_growth_pct".into(),
                reason: "either expected_growth_pct or asset_id is required".into(),
            })
        }
    };

    // --- Chain the three computations ---
    let amortization = compute_amortization(&AmortizationInput {
        principal,
        annual_rate_pct: effective_rate_pct,
        term_years,
    })
    .result;

    let real_value = compute_real_values(&RealValueInput {
        principal,
        nominal_annual_rate_pct: effective_rate_pct,
        inflation_annual_rate_pct: input.inflation_annual_pct,
        monthly_payment: amortization.monthly_payment,
        term_months: amortization.term_months,
    })
    .result;

    // Investment horizon equals the loan term
    let investment = compute_investment_comparison(&InvestmentInput {
        principal,
        annual_growth_pct: expected_growth_pct,
        years: Decimal::from(term_years),
        total_paid: amortization.total_paid,
    })
    .result;

    Ok(with_metadata(
        "Annuity amortisation, Fisher-discounted real values and lump-sum investment comparison over the loan term",
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        LoanAnalysis {
            product: input.product,
            principal,
            term_years,
            effective_rate_pct,
            expected_growth_pct,
            amortization,
            real_value,
            investment,
        },
    ))
}
