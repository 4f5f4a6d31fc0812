/// lead capture - persist first, notify best-effort
use auto_finance_rs::{
    format_phone, submit_lead, ContactDetails, Lead, LeadKind, LeadNotifier, LeadStore,
    LoanTerms, Money, NotificationPayload, Rate, Result, SafeTimeProvider, SelectedTerms,
    TimeSource,
};

struct PrintingStore;

impl LeadStore for PrintingStore {
    fn save(&mut self, lead: &Lead) -> Result<()> {
        println!("stored lead {} ({:?})", lead.id, lead.kind);
        Ok(())
    }
}

struct WebhookStub;

impl LeadNotifier for WebhookStub {
    fn notify(&self, payload: &NotificationPayload) -> Result<()> {
        println!("POST /api/notify {}", payload.to_json()?);
        Ok(())
    }
}

fn main() -> Result<()> {
    let time = SafeTimeProvider::new(TimeSource::System);

    let terms = LoanTerms::new(
        Money::from_major(50_000),
        Money::from_major(15_000),
        36,
        Rate::from_percentage(15),
    );
    let quote = terms.quote()?;

    let lead = Lead::new(
        LeadKind::CreditRequest,
        ContactDetails {
            name: "Ivan Petrov".to_string(),
            phone: format_phone("375291234567"),
            email: "ivan@example.com".to_string(),
            message: Some("Interested in the black one".to_string()),
        },
        Some(SelectedTerms {
            car_price: terms.car_price,
            upfront_payment: terms.down_payment,
            term_months: terms.term_months,
            partner: Some("AutoBank".to_string()),
            quote: Some(quote),
        }),
        &time,
    );

    submit_lead(&lead, &mut PrintingStore, &WebhookStub)
}
