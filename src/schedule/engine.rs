use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::types::{LoanRequest, RepaymentMethod};

/// one repayment period of an amortization plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based period number
    pub period: u32,
    pub payment: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub remaining_balance: Money,
}

/// totals over the emitted rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTotals {
    pub total_payment: Money,
    pub total_principal: Money,
    pub total_interest: Money,
    pub final_balance: Money,
}

impl ScheduleTotals {
    /// fold over the rows as emitted so displayed totals reconcile with displayed rows
    fn from_rows(rows: &[ScheduleRow]) -> Self {
        let total_payment = rows
            .iter()
            .map(|r| r.payment)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_principal = rows
            .iter()
            .map(|r| r.principal_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_interest = rows
            .iter()
            .map(|r| r.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let final_balance = rows
            .last()
            .map(|r| r.remaining_balance)
            .unwrap_or(Money::ZERO)
            .max(Money::ZERO);

        Self {
            total_payment,
            total_principal,
            total_interest,
            final_balance,
        }
    }
}

/// full amortization plan for a loan request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationPlan {
    pub request: LoanRequest,
    pub rows: Vec<ScheduleRow>,
    pub totals: ScheduleTotals,
}

impl AmortizationPlan {
    /// generate the full repayment schedule, validating the request first
    pub fn generate(request: LoanRequest) -> Result<Self> {
        request.validate()?;

        let financed = request.financed_amount().as_decimal();
        let periods = request.period_count();
        let monthly_rate = request.monthly_rate().as_decimal();
        let straight_line = financed / Decimal::from(periods);
        let level = level_payment(financed, monthly_rate, periods);

        let mut rows = Vec::with_capacity(periods as usize);
        let mut balance = financed;

        for period in 1..=periods {
            // interest accrues on the balance entering the period
            let interest = balance * monthly_rate;

            let (payment, principal) = match request.method {
                RepaymentMethod::French => (level, level - interest),
                // equal principal: both labels share one formula, see DESIGN.md
                RepaymentMethod::German | RepaymentMethod::Italian => {
                    (straight_line + interest, straight_line)
                }
            };

            balance -= principal;

            rows.push(ScheduleRow {
                period,
                payment: Money::from_decimal(payment),
                principal_portion: Money::from_decimal(principal),
                interest_portion: Money::from_decimal(interest),
                remaining_balance: Money::from_decimal(balance.max(Decimal::ZERO)),
            });
        }

        let totals = ScheduleTotals::from_rows(&rows);

        Ok(Self {
            request,
            rows,
            totals,
        })
    }

    /// get the row for a specific period
    pub fn row(&self, period: u32) -> Option<&ScheduleRow> {
        self.rows.get(period.checked_sub(1)? as usize)
    }
}

/// level annuity payment for french amortization
///
/// degenerates to a straight principal split at zero rate
fn level_payment(financed: Decimal, monthly_rate: Decimal, periods: u32) -> Decimal {
    if monthly_rate.is_zero() {
        return financed / Decimal::from(periods);
    }

    // (1 + r)^n by iteration keeps everything in decimal
    let mut compound = Decimal::ONE;
    let base = Decimal::ONE + monthly_rate;
    for _ in 0..periods {
        compound *= base;
    }

    financed * (monthly_rate * compound) / (compound - Decimal::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(method: RepaymentMethod) -> LoanRequest {
        LoanRequest {
            principal_amount: Money::from_major(100_000),
            down_payment: Money::from_major(20_000),
            annual_rate_percent: dec!(3.6),
            term_years: 1,
            method,
        }
    }

    // rounding may split a cent between the two portions
    fn within_cent(a: Money, b: Money) -> bool {
        (a - b).max(b - a) <= Money::from_decimal(dec!(0.01))
    }

    #[test]
    fn test_french_schedule() {
        let plan = AmortizationPlan::generate(request(RepaymentMethod::French)).unwrap();

        assert_eq!(plan.rows.len(), 12);

        // first period interest on the full financed amount: 80000 * 0.003
        assert_eq!(
            plan.rows[0].interest_portion,
            Money::from_decimal(dec!(240.00))
        );

        // level payment throughout
        let payment = plan.rows[0].payment;
        for row in &plan.rows {
            assert_eq!(row.payment, payment);
        }

        // balance closes at zero
        assert_eq!(plan.rows[11].remaining_balance, Money::ZERO);
        assert_eq!(plan.totals.final_balance, Money::ZERO);
    }

    #[test]
    fn test_rows_reconcile_payment_split() {
        for method in [
            RepaymentMethod::French,
            RepaymentMethod::German,
            RepaymentMethod::Italian,
        ] {
            let plan = AmortizationPlan::generate(request(method)).unwrap();
            for row in &plan.rows {
                assert!(
                    within_cent(row.payment, row.principal_portion + row.interest_portion),
                    "period {} of {:?} does not reconcile",
                    row.period,
                    method
                );
            }
        }
    }

    #[test]
    fn test_balance_non_increasing() {
        let plan = AmortizationPlan::generate(request(RepaymentMethod::French)).unwrap();
        for pair in plan.rows.windows(2) {
            assert!(pair[1].remaining_balance <= pair[0].remaining_balance);
        }
    }

    #[test]
    fn test_german_equal_principal() {
        let plan = AmortizationPlan::generate(request(RepaymentMethod::German)).unwrap();

        // 80000 / 12 rounded to cents
        for row in &plan.rows {
            assert_eq!(
                row.principal_portion,
                Money::from_decimal(dec!(6666.67))
            );
        }

        // payment strictly decreasing as interest shrinks
        for pair in plan.rows.windows(2) {
            assert!(pair[1].payment < pair[0].payment);
        }

        assert_eq!(plan.rows[11].remaining_balance, Money::ZERO);
    }

    #[test]
    fn test_german_and_italian_are_equivalent() {
        let german = AmortizationPlan::generate(request(RepaymentMethod::German)).unwrap();
        let italian = AmortizationPlan::generate(request(RepaymentMethod::Italian)).unwrap();

        assert_eq!(german.rows, italian.rows);
        assert_eq!(german.totals, italian.totals);
    }

    #[test]
    fn test_principal_sums_to_financed_amount() {
        for method in [RepaymentMethod::French, RepaymentMethod::German] {
            let plan = AmortizationPlan::generate(request(method)).unwrap();
            let financed = plan.request.financed_amount();
            let tolerance =
                Money::from_decimal(dec!(0.01) * Decimal::from(plan.rows.len() as u32));

            let diff = (plan.totals.total_principal - financed).max(financed - plan.totals.total_principal);
            assert!(diff <= tolerance, "{:?} drifts by {}", method, diff);
        }
    }

    #[test]
    fn test_totals_match_emitted_rows() {
        let plan = AmortizationPlan::generate(request(RepaymentMethod::French)).unwrap();

        let mut payment = Money::ZERO;
        let mut principal = Money::ZERO;
        let mut interest = Money::ZERO;
        for row in &plan.rows {
            payment += row.payment;
            principal += row.principal_portion;
            interest += row.interest_portion;
        }

        assert_eq!(plan.totals.total_payment, payment);
        assert_eq!(plan.totals.total_principal, principal);
        assert_eq!(plan.totals.total_interest, interest);
    }

    #[test]
    fn test_zero_rate_degenerates_to_straight_line() {
        for method in [
            RepaymentMethod::French,
            RepaymentMethod::German,
            RepaymentMethod::Italian,
        ] {
            let mut req = request(method);
            req.annual_rate_percent = Decimal::ZERO;
            let plan = AmortizationPlan::generate(req).unwrap();

            for row in &plan.rows {
                assert_eq!(row.interest_portion, Money::ZERO);
                assert_eq!(row.payment, row.principal_portion);
                assert_eq!(row.payment, Money::from_decimal(dec!(6666.67)));
            }

            let financed = plan.request.financed_amount();
            let tolerance =
                Money::from_decimal(dec!(0.01) * Decimal::from(plan.rows.len() as u32));
            let diff = (plan.totals.total_payment - financed).max(financed - plan.totals.total_payment);
            assert!(diff <= tolerance);
        }
    }

    #[test]
    fn test_zero_financed_amount_is_degenerate() {
        let mut req = request(RepaymentMethod::French);
        req.down_payment = req.principal_amount;
        let plan = AmortizationPlan::generate(req).unwrap();

        assert_eq!(plan.rows.len(), 12);
        for row in &plan.rows {
            assert_eq!(row.payment, Money::ZERO);
            assert_eq!(row.principal_portion, Money::ZERO);
            assert_eq!(row.interest_portion, Money::ZERO);
            assert_eq!(row.remaining_balance, Money::ZERO);
        }
        assert_eq!(plan.totals.total_payment, Money::ZERO);
    }

    #[test]
    fn test_invalid_input_produces_no_rows() {
        let mut req = request(RepaymentMethod::French);
        req.down_payment = Money::from_major(120_000);
        let err = AmortizationPlan::generate(req).unwrap_err();
        assert!(matches!(
            err,
            crate::errors::PlanError::DownPaymentExceedsPrincipal { .. }
        ));
    }

    #[test]
    fn test_long_term_schedule_closes() {
        let req = LoanRequest {
            principal_amount: Money::from_major(250_000),
            down_payment: Money::from_major(50_000),
            annual_rate_percent: dec!(4.25),
            term_years: 30,
            method: RepaymentMethod::French,
        };
        let plan = AmortizationPlan::generate(req).unwrap();

        assert_eq!(plan.rows.len(), 360);
        assert_eq!(plan.rows[359].remaining_balance, Money::ZERO);
        assert_eq!(plan.row(1).unwrap().period, 1);
        assert_eq!(plan.row(360).unwrap().period, 360);
        assert!(plan.row(361).is_none());
        assert!(plan.row(0).is_none());
    }
}
