use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid principal amount: {amount}")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid down payment: {amount}")]
    InvalidDownPayment {
        amount: Money,
    },

    #[error("down payment {down_payment} exceeds principal {principal}")]
    DownPaymentExceedsPrincipal {
        down_payment: Money,
        principal: Money,
    },

    #[error("invalid loan term: {years} years")]
    InvalidTerm {
        years: u32,
    },

    #[error("invalid interest rate: {percent}%")]
    InvalidRate {
        percent: Decimal,
    },

    #[error("invalid income amount: {amount}")]
    InvalidIncome {
        amount: Money,
    },

    #[error("unsupported country: {country}")]
    UnsupportedCountry {
        country: String,
    },

    #[error("market rate not found for {country}")]
    RateNotFound {
        country: String,
    },

    #[error("rate lookup request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("document rendering failed: {message}")]
    DocumentRender {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, PlanError>;
