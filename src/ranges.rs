use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// inclusive slider bounds with a step grid anchored at min
///
/// interactive calculators clamp here before building loan or lease
/// terms, so the typed rejections in the calculators stay a boundary
/// for programmatic callers only
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
}

impl SliderRange {
    pub fn new(min: Decimal, max: Decimal, step: Decimal) -> Self {
        Self { min, max, step }
    }

    /// clamp into bounds, then snap to the nearest step from min;
    /// the max stays reachable even when it sits off the step grid
    pub fn clamp(&self, value: Decimal) -> Decimal {
        let bounded = value.clamp(self.min, self.max);
        if bounded == self.max {
            return self.max;
        }
        let steps = ((bounded - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    // credit calculator presets

    pub fn credit_price_usd() -> Self {
        Self::new(dec!(1000), dec!(100000), dec!(1000))
    }

    pub fn credit_price_byn() -> Self {
        Self::new(dec!(3000), dec!(300000), dec!(500))
    }

    /// down payment window, 10% to 80% of the car price
    pub fn down_payment_usd(car_price: Money) -> Self {
        let price = car_price.as_decimal();
        Self::new(price * dec!(0.1), price * dec!(0.8), dec!(500))
    }

    pub fn down_payment_byn(car_price: Money) -> Self {
        let price = car_price.as_decimal();
        Self::new(price * dec!(0.1), price * dec!(0.8), dec!(200))
    }

    pub fn loan_term_months() -> Self {
        Self::new(dec!(12), dec!(84), dec!(3))
    }

    /// annual rate in percent
    pub fn interest_rate_percent() -> Self {
        Self::new(dec!(10), dec!(25), dec!(0.25))
    }

    // leasing calculator presets

    pub fn lease_price_usd() -> Self {
        Self::new(dec!(20000), dec!(300000), dec!(5000))
    }

    /// advance window, 10% to 50% of the car price
    pub fn lease_advance(car_price: Money) -> Self {
        let price = car_price.as_decimal();
        Self::new(price * dec!(0.1), price * dec!(0.5), dec!(1000))
    }

    pub fn lease_term_months() -> Self {
        Self::new(dec!(12), dec!(84), dec!(6))
    }

    /// residual value in percent of the car price
    pub fn residual_percent() -> Self {
        Self::new(dec!(10), dec!(50), dec!(5))
    }
}

/// keep the advance share constant when the price slider moves,
/// rounded to whole currency units
pub fn rescale_advance(old_price: Money, old_advance: Money, new_price: Money) -> Money {
    let share = old_advance.as_decimal() / old_price.as_decimal();
    Money::from_decimal((new_price.as_decimal() * share).round_dp(0))
}
