pub mod amortization;
pub mod analysis;
pub mod error;
pub mod investment;
pub mod real_value;
pub mod reference;
pub mod time_value;
pub mod types;

pub use error::LoanAnalyticsError;
pub use types::*;

/// Standard result type for all loan-analytics operations
pub type LoanAnalyticsResult<T> = Result<T, LoanAnalyticsError>;
