use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{CalculatorError, Result};
use crate::types::PaymentQuote;

/// positive multiplier from the canonical currency to a secondary
/// display currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    pub fn new(rate: Decimal) -> Result<Self> {
        if rate <= Decimal::ZERO {
            return Err(CalculatorError::InvalidExchangeRate { rate });
        }
        Ok(Self(rate))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// secondary display amount, rounded to whole units
    pub fn convert(&self, amount: Money) -> Money {
        (amount * self.0).to_whole()
    }
}

/// quote fields converted for secondary display
///
/// always derived from the canonical quote, field by field; stored
/// state never round-trips through the conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteDisplay {
    pub financed_amount: Money,
    pub monthly_payment: Money,
    pub total_paid: Money,
    pub overpayment: Option<Money>,
}

impl QuoteDisplay {
    pub fn from_quote(quote: &PaymentQuote, rate: &ExchangeRate) -> Self {
        Self {
            financed_amount: rate.convert(quote.financed_amount),
            monthly_payment: rate.convert(quote.monthly_payment),
            total_paid: rate.convert(quote.total_paid),
            overpayment: quote.overpayment.map(|o| rate.convert(o)),
        }
    }
}
