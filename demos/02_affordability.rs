/// estimate what a two-earner household can afford
use mortgage_plan_rs::affordability::{estimate, AffordabilityRequest, MonthlyIncome};
use mortgage_plan_rs::Money;
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request = AffordabilityRequest {
        incomes: vec![
            // salaried with a 13th month installment
            MonthlyIncome {
                amount: Money::from_major(1_800),
                thirteenth: true,
                fourteenth: false,
            },
            MonthlyIncome {
                amount: Money::from_major(1_500),
                thirteenth: false,
                fourteenth: false,
            },
        ],
        annual_rate_percent: dec!(3.6),
    };

    let result = estimate(&request)?;
    println!("max sustainable payment: {} per month", result.max_payment);
    println!("max financeable amount:  {}", result.max_principal);

    Ok(())
}
