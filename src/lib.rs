pub mod affordability;
pub mod decimal;
pub mod errors;
pub mod export;
pub mod rates;
pub mod schedule;
pub mod server;
pub mod types;

// re-export key types
pub use affordability::{AffordabilityEstimate, AffordabilityRequest, MonthlyIncome};
pub use decimal::{Money, Rate};
pub use errors::{PlanError, Result};
pub use rates::{RateClient, SUPPORTED_COUNTRIES};
pub use schedule::{AmortizationPlan, ScheduleRow, ScheduleTotals};
pub use types::{LoanRequest, RepaymentMethod};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
