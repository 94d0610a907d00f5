//! Static reference data consumed by callers of the engine: per-product
//! input bounds, indicative lender rates and indicative asset CAGRs.
//! The tables are read-only configuration; the engine never validates
//! or mutates them, and the rates are illustrative, not advice.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LoanAnalyticsError;
use crate::types::{Money, Percent};
use crate::LoanAnalyticsResult;

/// Loan product class. Bounds and lender pricing differ per product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanProduct {
    Mortgage,
    /// Unsecured consumer loan
    Consumer,
}

/// Inclusive principal bounds with the step an input slider advances by.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AmountBounds {
    pub min: Money,
    pub max: Money,
    pub step: Money,
}

/// Inclusive term bounds in whole years.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TermBounds {
    pub min_years: u32,
    pub max_years: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProductLimits {
    pub amount: AmountBounds,
    pub term: TermBounds,
}

impl ProductLimits {
    pub fn clamp_amount(&self, raw: Money) -> Money {
        raw.clamp(self.amount.min, self.amount.max)
    }

    pub fn clamp_term_years(&self, raw: u32) -> u32 {
        raw.clamp(self.term.min_years, self.term.max_years)
    }
}

pub const MORTGAGE_LIMITS: ProductLimits = ProductLimits {
    amount: AmountBounds {
        min: dec!(5000),
        max: dec!(600000),
        step: dec!(1000),
    },
    term: TermBounds {
        min_years: 1,
        max_years: 40,
    },
};

pub const CONSUMER_LIMITS: ProductLimits = ProductLimits {
    amount: AmountBounds {
        min: dec!(500),
        max: dec!(40000),
        step: dec!(100),
    },
    term: TermBounds {
        min_years: 1,
        max_years: 8,
    },
};

impl LoanProduct {
    pub fn limits(self) -> &'static ProductLimits {
        match self {
            LoanProduct::Mortgage => &MORTGAGE_LIMITS,
            LoanProduct::Consumer => &CONSUMER_LIMITS,
        }
    }
}

/// A lender with an indicative annual rate for one product.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Lender {
    pub id: &'static str,
    pub name: &'static str,
    pub annual_rate_pct: Percent,
}

pub const MORTGAGE_LENDERS: &[Lender] = &[
    Lender { id: "slsp", name: "Slovenská sporiteľňa", annual_rate_pct: dec!(3.69) },
    Lender { id: "vub", name: "VÚB", annual_rate_pct: dec!(3.89) },
    Lender { id: "tatrabanka", name: "Tatra banka", annual_rate_pct: dec!(3.19) },
    Lender { id: "csob", name: "ČSOB", annual_rate_pct: dec!(3.5) },
    Lender { id: "unicredit", name: "UniCredit Bank", annual_rate_pct: dec!(3.49) },
    Lender { id: "365", name: "365.bank", annual_rate_pct: dec!(3.35) },
    Lender { id: "mbank", name: "mBank", annual_rate_pct: dec!(3.9) },
    Lender { id: "prima", name: "Prima banka", annual_rate_pct: dec!(3.4) },
];

pub const CONSUMER_LENDERS: &[Lender] = &[
    Lender { id: "slsp", name: "Slovenská sporiteľňa", annual_rate_pct: dec!(6.49) },
    Lender { id: "vub", name: "VÚB", annual_rate_pct: dec!(6.3) },
    Lender { id: "tatrabanka", name: "Tatra banka", annual_rate_pct: dec!(7.5) },
    Lender { id: "csob", name: "ČSOB", annual_rate_pct: dec!(7.9) },
    Lender { id: "unicredit", name: "UniCredit Bank", annual_rate_pct: dec!(5.99) },
    Lender { id: "365", name: "365.bank", annual_rate_pct: dec!(6.0) },
    Lender { id: "mbank", name: "mBank", annual_rate_pct: dec!(5.89) },
    Lender { id: "prima", name: "Prima banka", annual_rate_pct: dec!(9.5) },
];

pub fn lenders(product: LoanProduct) -> &'static [Lender] {
    match product {
        LoanProduct::Mortgage => MORTGAGE_LENDERS,
        LoanProduct::Consumer => CONSUMER_LENDERS,
    }
}

/// Look up the indicative annual rate for a lender id within a product.
pub fn lender_rate(product: LoanProduct, id: &str) -> LoanAnalyticsResult<Percent> {
    lenders(product)
        .iter()
        .find(|l| l.id == id)
        .map(|l| l.annual_rate_pct)
        .ok_or_else(|| LoanAnalyticsError::UnknownLender(id.to_string()))
}

/// A financial asset with an indicative 10-year CAGR, used only to seed
/// a default growth-rate assumption.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Asset {
    pub id: &'static str,
    pub name: &'static str,
    pub cagr_pct: Percent,
}

pub const ASSETS: &[Asset] = &[
    Asset { id: "sp500", name: "S&P 500 (TR)", cagr_pct: dec!(10) },
    Asset { id: "apple", name: "Apple", cagr_pct: dec!(24) },
    Asset { id: "microsoft", name: "Microsoft", cagr_pct: dec!(23) },
    Asset { id: "nvidia", name: "NVIDIA", cagr_pct: dec!(55) },
    Asset { id: "alphabet", name: "Alphabet (Google)", cagr_pct: dec!(18) },
    Asset { id: "amazon", name: "Amazon", cagr_pct: dec!(20) },
    Asset { id: "meta", name: "Meta (Facebook)", cagr_pct: dec!(17) },
    Asset { id: "tsmc", name: "TSMC", cagr_pct: dec!(19) },
    Asset { id: "berkshire", name: "Berkshire Hathaway", cagr_pct: dec!(11) },
    Asset { id: "tesla", name: "Tesla", cagr_pct: dec!(35) },
    Asset { id: "saudi", name: "Saudi Aramco", cagr_pct: dec!(5) },
];

/// Look up the indicative CAGR for an asset id.
pub fn asset_cagr(id: &str) -> LoanAnalyticsResult<Percent> {
    ASSETS
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.cagr_pct)
        .ok_or_else(|| LoanAnalyticsError::UnknownAsset(id.to_string()))
}
