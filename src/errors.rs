use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("invalid term: {months} months")]
    InvalidTerm {
        months: u32,
    },

    #[error("non-positive financed amount: {financed}")]
    NonPositiveFinancedAmount {
        financed: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidRate {
        rate: Rate,
    },

    #[error("residual percent out of range: {percent}")]
    InvalidResidualPercent {
        percent: Rate,
    },

    #[error("overfunded lease: advance {advance} plus residual {residual_value} covers price {car_price}")]
    OverfundedLease {
        advance: Money,
        residual_value: Money,
        car_price: Money,
    },

    #[error("negative advance: {advance}")]
    NegativeAdvance {
        advance: Money,
    },

    #[error("negative down payment: {down_payment}")]
    NegativeDownPayment {
        down_payment: Money,
    },

    #[error("invalid exchange rate: {rate}")]
    InvalidExchangeRate {
        rate: rust_decimal::Decimal,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("notification failed: {message}")]
    NotificationFailed {
        message: String,
    },

    #[error("lead store failed: {message}")]
    LeadStoreFailed {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
