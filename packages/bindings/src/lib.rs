use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use std::str::FromStr;

use loan_analytics_core::reference::{self, LoanProduct};
use loan_analytics_core::time_value;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_product(product: &str) -> NapiResult<LoanProduct> {
    match product {
        "mortgage" => Ok(LoanProduct::Mortgage),
        "consumer" => Ok(LoanProduct::Consumer),
        other => Err(napi::Error::from_reason(format!(
            "Unknown loan product: {other}"
        ))),
    }
}

fn parse_decimal(field: &str, raw: &str) -> NapiResult<Decimal> {
    Decimal::from_str(raw)
        .map_err(|e| napi::Error::from_reason(format!("Invalid decimal for {field}: {e}")))
}

// ---------------------------------------------------------------------------
// Engine operations
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_amortization(input_json: String) -> NapiResult<String> {
    let input: loan_analytics_core::amortization::AmortizationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = loan_analytics_core::amortization::compute_amortization(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compute_real_values(input_json: String) -> NapiResult<String> {
    let input: loan_analytics_core::real_value::RealValueInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = loan_analytics_core::real_value::compute_real_values(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compute_investment_comparison(input_json: String) -> NapiResult<String> {
    let input: loan_analytics_core::investment::InvestmentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = loan_analytics_core::investment::compute_investment_comparison(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn analyze_loan(input_json: String) -> NapiResult<String> {
    let input: loan_analytics_core::analysis::LoanAnalysisInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = loan_analytics_core::analysis::analyze_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Direct primitive for UI sliders that only need the payment figure.
#[napi]
pub fn annuity_payment(
    principal: String,
    annual_rate_pct: String,
    term_months: u32,
) -> NapiResult<String> {
    let principal = parse_decimal("principal", &principal)?;
    let rate = parse_decimal("annual_rate_pct", &annual_rate_pct)?;
    Ok(time_value::annuity_payment(principal, rate, term_months).to_string())
}

// ---------------------------------------------------------------------------
// Reference tables
// ---------------------------------------------------------------------------

#[napi]
pub fn list_lenders(product: String) -> NapiResult<String> {
    let product = parse_product(&product)?;
    serde_json::to_string(reference::lenders(product)).map_err(to_napi_error)
}

#[napi]
pub fn list_assets() -> NapiResult<String> {
    serde_json::to_string(reference::ASSETS).map_err(to_napi_error)
}

#[napi]
pub fn product_limits(product: String) -> NapiResult<String> {
    let product = parse_product(&product)?;
    serde_json::to_string(product.limits()).map_err(to_napi_error)
}
