/// credit calculator - slider clamping, quoting, and secondary display
use auto_finance_rs::{ExchangeRate, LoanTerms, Money, QuoteDisplay, Rate, SliderRange};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // clamp raw slider input the way the page does before quoting
    let price_range = SliderRange::credit_price_usd();
    let price = Money::from_decimal(price_range.clamp(dec!(64750)));

    let down_range = SliderRange::down_payment_usd(price);
    let down = Money::from_decimal(down_range.clamp(dec!(35200)));

    let term = SliderRange::loan_term_months().clamp(dec!(37));
    let rate = SliderRange::interest_rate_percent().clamp(dec!(15.1));

    let terms = LoanTerms::new(
        price,
        down,
        term.to_u32().ok_or("term out of range")?,
        Rate::from_decimal(rate / dec!(100)),
    );
    let quote = terms.quote()?;

    println!("monthly payment: {}", quote.monthly_payment.round_dp(2));

    // secondary display currency, derived from the canonical quote
    let byn = ExchangeRate::new(dec!(3.25))?;
    let display = QuoteDisplay::from_quote(&quote, &byn);
    println!("monthly payment: ~{} BYN", display.monthly_payment);

    Ok(())
}
