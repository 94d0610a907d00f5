pub mod investment;
pub mod loan;
pub mod reference;

use clap::ValueEnum;
use loan_analytics_core::reference::LoanProduct;

/// CLI-facing loan product selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProductArg {
    Mortgage,
    Consumer,
}

impl From<ProductArg> for LoanProduct {
    fn from(p: ProductArg) -> Self {
        match p {
            ProductArg::Mortgage => LoanProduct::Mortgage,
            ProductArg::Consumer => LoanProduct::Consumer,
        }
    }
}
