use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{PlanError, Result};

/// share of combined income a sustainable payment may not exceed
const PAYMENT_TO_INCOME_CAP: Decimal = dec!(0.3);

/// borrowing horizon used to size the maximum financeable principal
const HORIZON_MONTHS: u32 = 360;

/// one earner's monthly income
///
/// a 14th month salary takes precedence over a 13th when both are present
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyIncome {
    pub amount: Money,
    /// salary paid over 13 yearly installments
    #[serde(default)]
    pub thirteenth: bool,
    /// salary paid over 14 yearly installments
    #[serde(default)]
    pub fourteenth: bool,
}

impl MonthlyIncome {
    /// income spread over 12 months, including extra installments
    pub fn effective_monthly(&self) -> Money {
        let amount = self.amount.as_decimal();
        let effective = if self.fourteenth {
            amount * dec!(14) / dec!(12)
        } else if self.thirteenth {
            amount * dec!(13) / dec!(12)
        } else {
            amount
        };
        Money::from_decimal(effective)
    }
}

/// input for an affordability estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityRequest {
    pub incomes: Vec<MonthlyIncome>,
    /// nominal annual rate in percentage form
    #[serde(default)]
    pub annual_rate_percent: Decimal,
}

/// maximum sustainable payment and financeable principal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityEstimate {
    pub max_payment: Money,
    pub max_principal: Money,
}

/// estimate what a household can afford at the given rate
pub fn estimate(request: &AffordabilityRequest) -> Result<AffordabilityEstimate> {
    for income in &request.incomes {
        if income.amount.is_negative() {
            return Err(PlanError::InvalidIncome {
                amount: income.amount,
            });
        }
    }

    if request.annual_rate_percent.is_sign_negative() && !request.annual_rate_percent.is_zero() {
        return Err(PlanError::InvalidRate {
            percent: request.annual_rate_percent,
        });
    }

    let combined = request
        .incomes
        .iter()
        .map(|i| i.effective_monthly())
        .fold(Money::ZERO, |acc, x| acc + x);

    let max_payment = combined * PAYMENT_TO_INCOME_CAP;
    let monthly_rate = request.annual_rate_percent / dec!(100) / dec!(12);

    let max_principal = if monthly_rate.is_zero() {
        max_payment * Decimal::from(HORIZON_MONTHS)
    } else {
        // present value of an annuity: payment * (1 - (1+r)^-n) / r
        let mut compound = Decimal::ONE;
        let base = Decimal::ONE + monthly_rate;
        for _ in 0..HORIZON_MONTHS {
            compound *= base;
        }
        let annuity_factor = (Decimal::ONE - Decimal::ONE / compound) / monthly_rate;
        max_payment * annuity_factor
    };

    Ok(AffordabilityEstimate {
        max_payment,
        max_principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income(amount: i64) -> MonthlyIncome {
        MonthlyIncome {
            amount: Money::from_major(amount),
            thirteenth: false,
            fourteenth: false,
        }
    }

    #[test]
    fn test_effective_monthly_plain() {
        assert_eq!(income(1200).effective_monthly(), Money::from_major(1200));
    }

    #[test]
    fn test_effective_monthly_thirteenth() {
        let mut i = income(1200);
        i.thirteenth = true;
        assert_eq!(i.effective_monthly(), Money::from_major(1300));
    }

    #[test]
    fn test_fourteenth_takes_precedence() {
        let mut i = income(1200);
        i.thirteenth = true;
        i.fourteenth = true;
        assert_eq!(i.effective_monthly(), Money::from_major(1400));
    }

    #[test]
    fn test_payment_cap_on_combined_income() {
        let request = AffordabilityRequest {
            incomes: vec![income(2000), income(1000)],
            annual_rate_percent: Decimal::ZERO,
        };
        let result = estimate(&request).unwrap();
        assert_eq!(result.max_payment, Money::from_major(900));
    }

    #[test]
    fn test_zero_rate_principal_is_payment_times_horizon() {
        let request = AffordabilityRequest {
            incomes: vec![income(3000)],
            annual_rate_percent: Decimal::ZERO,
        };
        let result = estimate(&request).unwrap();
        assert_eq!(result.max_principal, Money::from_major(900 * 360));
    }

    #[test]
    fn test_positive_rate_discounts_principal() {
        let request = AffordabilityRequest {
            incomes: vec![income(3000)],
            annual_rate_percent: dec!(3.6),
        };
        let result = estimate(&request).unwrap();

        assert_eq!(result.max_payment, Money::from_major(900));
        // pv of 900/month over 360 months at 0.3% monthly, around 198k
        assert!(result.max_principal > Money::from_major(195_000));
        assert!(result.max_principal < Money::from_major(200_000));
        assert!(result.max_principal < Money::from_major(900 * 360));
    }

    #[test]
    fn test_no_incomes_yields_zero_estimate() {
        let request = AffordabilityRequest {
            incomes: vec![],
            annual_rate_percent: dec!(3.6),
        };
        let result = estimate(&request).unwrap();
        assert_eq!(result.max_payment, Money::ZERO);
        assert_eq!(result.max_principal, Money::ZERO);
    }

    #[test]
    fn test_negative_income_rejected() {
        let request = AffordabilityRequest {
            incomes: vec![income(-100)],
            annual_rate_percent: Decimal::ZERO,
        };
        assert!(matches!(
            estimate(&request),
            Err(PlanError::InvalidIncome { .. })
        ));
    }
}
