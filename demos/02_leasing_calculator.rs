/// leasing calculator - company rates and the zero-rate branch
use auto_finance_rs::{LeasingConfig, ZeroRateOverpayment};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = LeasingConfig::default();

    // even split when no company is selected
    let terms = config.default_lease_terms();
    let quote = terms.quote(ZeroRateOverpayment::Omit)?;
    println!("no company:  {} / month", quote.monthly_payment.round_dp(2));

    // interest-bearing schedule once a company supplies its rate
    for company in &config.companies {
        let mut with_rate = terms;
        with_rate.annual_rate = company.effective_rate();

        let quote = with_rate.quote(ZeroRateOverpayment::Omit)?;
        println!(
            "{:<15} {} / month, overpayment {}",
            company.name,
            quote.monthly_payment.round_dp(2),
            quote
                .overpayment
                .map(|o| o.round_dp(2).to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    Ok(())
}
