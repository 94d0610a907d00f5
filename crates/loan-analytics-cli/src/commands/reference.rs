use clap::Args;
use serde_json::Value;

use loan_analytics_core::reference;

use crate::commands::ProductArg;

/// Arguments for listing the lender table
#[derive(Args)]
pub struct LendersArgs {
    /// Loan product
    #[arg(long, value_enum, default_value = "mortgage")]
    pub product: ProductArg,
}

pub fn run_lenders(args: LendersArgs) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(reference::lenders(args.product.into()))?)
}

pub fn run_assets() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(reference::ASSETS)?)
}
