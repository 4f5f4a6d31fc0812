/// quick start - minimal example to get started
use auto_finance_rs::{LoanTerms, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // quote a $50,000 car with $15,000 down over 36 months at 15%
    let terms = LoanTerms::new(
        Money::from_major(50_000),
        Money::from_major(15_000),
        36,
        Rate::from_percentage(15),
    );

    let quote = terms.quote()?;

    println!("financed:  {}", quote.financed_amount);
    println!("monthly:   {}", quote.monthly_payment.round_dp(2));
    println!("total:     {}", quote.total_paid.round_dp(2));
    println!("overpaid:  {}", quote.overpayment.unwrap().round_dp(2));

    Ok(())
}
