use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculator::{annuity_payment, straight_line_payment};
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::types::{PaymentQuote, ZeroRateOverpayment};

/// inputs for a leasing quote
///
/// the residual stays outside the financed amount: it is the lease-end
/// buyout owed separately, not paid through the monthly schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaseTerms {
    pub car_price: Money,
    pub advance: Money,
    pub term_months: u32,
    /// share of the price left as the buyout value, 0 to 1
    pub residual_percent: Rate,
    /// rate of the selected leasing company; None or zero selects the
    /// even split with no interest component
    pub annual_rate: Option<Rate>,
}

impl LeaseTerms {
    pub fn new(
        car_price: Money,
        advance: Money,
        term_months: u32,
        residual_percent: Rate,
        annual_rate: Option<Rate>,
    ) -> Self {
        Self {
            car_price,
            advance,
            term_months,
            residual_percent,
            annual_rate,
        }
    }

    /// lease-end buyout value
    pub fn residual_value(&self) -> Money {
        self.car_price.portion(self.residual_percent)
    }

    /// amount financed through monthly payments
    pub fn financed_amount(&self) -> Money {
        self.car_price - self.advance - self.residual_value()
    }

    fn validate(&self) -> Result<()> {
        if self.term_months == 0 {
            return Err(CalculatorError::InvalidTerm {
                months: self.term_months,
            });
        }

        if let Some(rate) = self.annual_rate {
            if rate.is_negative() {
                return Err(CalculatorError::InvalidRate { rate });
            }
        }

        if self.residual_percent < Rate::ZERO || self.residual_percent > Rate::ONE {
            return Err(CalculatorError::InvalidResidualPercent {
                percent: self.residual_percent,
            });
        }

        if self.advance.is_negative() {
            return Err(CalculatorError::NegativeAdvance {
                advance: self.advance,
            });
        }

        if !self.car_price.is_positive() {
            return Err(CalculatorError::NonPositiveFinancedAmount {
                financed: self.financed_amount(),
            });
        }

        // advance and residual are non-negative here, so this also rules
        // out every non-positive financed amount
        if self.advance + self.residual_value() >= self.car_price {
            return Err(CalculatorError::OverfundedLease {
                advance: self.advance,
                residual_value: self.residual_value(),
                car_price: self.car_price,
            });
        }

        Ok(())
    }

    /// compute the payment breakdown for these terms
    pub fn quote(&self, policy: ZeroRateOverpayment) -> Result<PaymentQuote> {
        self.validate()?;

        let financed = self.financed_amount();
        let rate = self.annual_rate.unwrap_or(Rate::ZERO);

        // zero rate takes the even split deliberately, the annuity
        // formula degenerates to 0/0 there
        if rate.is_zero() {
            let monthly_payment = straight_line_payment(financed, self.term_months);
            let total_paid = monthly_payment * Decimal::from(self.term_months) + self.advance;

            let overpayment = match policy {
                ZeroRateOverpayment::ReportZero => Some(Money::ZERO),
                ZeroRateOverpayment::Omit => None,
            };

            return Ok(PaymentQuote {
                financed_amount: financed,
                monthly_payment,
                total_paid,
                overpayment,
            });
        }

        let monthly_payment = annuity_payment(financed, rate, self.term_months);
        let total_paid = monthly_payment * Decimal::from(self.term_months) + self.advance;
        let overpayment = total_paid - self.car_price + self.residual_value();

        Ok(PaymentQuote {
            financed_amount: financed,
            monthly_payment,
            total_paid,
            overpayment: Some(overpayment),
        })
    }
}
