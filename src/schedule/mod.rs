pub mod engine;

pub use engine::{AmortizationPlan, ScheduleRow, ScheduleTotals};
