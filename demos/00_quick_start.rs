/// quick start - compute and print an amortization plan
use mortgage_plan_rs::{AmortizationPlan, LoanRequest, Money, RepaymentMethod};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 100k property, 20k down, 3.6% over 10 years, level payments
    let request = LoanRequest {
        principal_amount: Money::from_major(100_000),
        down_payment: Money::from_major(20_000),
        annual_rate_percent: dec!(3.6),
        term_years: 10,
        method: RepaymentMethod::French,
    };

    let plan = AmortizationPlan::generate(request)?;

    for row in &plan.rows {
        println!(
            "{:>4} {:>10} {:>10} {:>10} {:>10}",
            row.period,
            row.payment,
            row.principal_portion,
            row.interest_portion,
            row.remaining_balance
        );
    }
    println!(
        "paid {} in total, {} of it interest",
        plan.totals.total_payment, plan.totals.total_interest
    );

    Ok(())
}
