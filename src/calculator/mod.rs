pub mod credit;
pub mod leasing;

use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

pub use credit::LoanTerms;
pub use leasing::LeaseTerms;

/// annuity payment for one month
///
/// payment = P * r * (1 + r)^n / ((1 + r)^n - 1)
///
/// callers validate first: term is positive and the rate is strictly
/// positive, so the denominator cannot vanish
pub(crate) fn annuity_payment(principal: Money, annual_rate: Rate, term_months: u32) -> Money {
    let r = annual_rate.monthly_rate().as_decimal();

    let mut compound = Decimal::ONE;
    let base = Decimal::ONE + r;
    for _ in 0..term_months {
        compound *= base;
    }

    let numerator = principal.as_decimal() * r * compound;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal(numerator / denominator)
}

/// even split of the financed amount across the term, no interest
pub(crate) fn straight_line_payment(principal: Money, term_months: u32) -> Money {
    principal / Decimal::from(term_months)
}
