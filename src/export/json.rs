use rust_decimal::prelude::ToPrimitive;
use serde_json::{json, Value};

use crate::decimal::Money;
use crate::schedule::{AmortizationPlan, ScheduleRow, ScheduleTotals};

/// compact row form consumed by table frontends:
/// `[period, payment, principal, interest, balance]`
pub fn row_values(row: &ScheduleRow) -> Value {
    json!([
        row.period,
        number(row.payment),
        number(row.principal_portion),
        number(row.interest_portion),
        number(row.remaining_balance),
    ])
}

/// totals as a 4-tuple: `[payment, principal, interest, final balance]`
pub fn totals_values(totals: &ScheduleTotals) -> Value {
    json!([
        number(totals.total_payment),
        number(totals.total_principal),
        number(totals.total_interest),
        number(totals.final_balance),
    ])
}

/// full calculation payload
pub fn plan_payload(plan: &AmortizationPlan) -> Value {
    json!({
        "plan": plan.rows.iter().map(row_values).collect::<Vec<_>>(),
        "totals": totals_values(&plan.totals),
    })
}

fn number(amount: Money) -> f64 {
    amount.as_decimal().to_f64().unwrap_or_default()
}
