/// export the same plan as json, text table, and pdf
use mortgage_plan_rs::export;
use mortgage_plan_rs::{AmortizationPlan, LoanRequest, Money, RepaymentMethod};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request = LoanRequest {
        principal_amount: Money::from_major(250_000),
        down_payment: Money::from_major(50_000),
        annual_rate_percent: dec!(4.25),
        term_years: 30,
        method: RepaymentMethod::German,
    };

    let plan = AmortizationPlan::generate(request)?;

    // structured payload, the shape a table frontend consumes
    println!("{}", serde_json::to_string_pretty(&export::json::plan_payload(&plan))?);

    std::fs::write(
        export::text::ATTACHMENT_FILENAME,
        export::text::render_table(&plan),
    )?;
    std::fs::write(
        export::pdf::ATTACHMENT_FILENAME,
        export::pdf::render_document(&plan)?,
    )?;

    println!(
        "wrote {} and {}",
        export::text::ATTACHMENT_FILENAME,
        export::pdf::ATTACHMENT_FILENAME
    );

    Ok(())
}
