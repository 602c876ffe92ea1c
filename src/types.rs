use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{PlanError, Result};

/// repayment method for a loan plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepaymentMethod {
    /// constant total payment, principal/interest split shifts over time
    French,
    /// constant principal portion, declining total payment
    German,
    /// constant principal portion, declining total payment
    Italian,
}

/// loan parameters for one plan computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// total loan or property value
    pub principal_amount: Money,
    /// amount paid upfront, not financed
    #[serde(default)]
    pub down_payment: Money,
    /// nominal annual rate in percentage form (3.5 means 3.5%)
    pub annual_rate_percent: Decimal,
    /// duration in years
    pub term_years: u32,
    pub method: RepaymentMethod,
}

impl LoanRequest {
    /// check all preconditions before any computation
    pub fn validate(&self) -> Result<()> {
        if self.principal_amount <= Money::ZERO {
            return Err(PlanError::InvalidPrincipal {
                amount: self.principal_amount,
            });
        }

        if self.down_payment.is_negative() {
            return Err(PlanError::InvalidDownPayment {
                amount: self.down_payment,
            });
        }

        if self.down_payment > self.principal_amount {
            return Err(PlanError::DownPaymentExceedsPrincipal {
                down_payment: self.down_payment,
                principal: self.principal_amount,
            });
        }

        if self.term_years == 0 {
            return Err(PlanError::InvalidTerm {
                years: self.term_years,
            });
        }

        if self.annual_rate_percent.is_sign_negative() && !self.annual_rate_percent.is_zero() {
            return Err(PlanError::InvalidRate {
                percent: self.annual_rate_percent,
            });
        }

        Ok(())
    }

    /// amount actually financed, zero yields a degenerate all-zero plan
    pub fn financed_amount(&self) -> Money {
        self.principal_amount - self.down_payment
    }

    /// number of monthly repayment periods
    pub fn period_count(&self) -> u32 {
        self.term_years * 12
    }

    /// per-period interest rate
    pub fn monthly_rate(&self) -> Rate {
        Rate::from_percentage(self.annual_rate_percent).monthly()
    }
}
